//! Wire representations for the directory admin API.
//!
//! These mirror the JSON the directory sends and accepts. They are internal
//! to the facade; the HTTP layer exposes its own response models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Payload for creating a user in the directory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDirectoryUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub enabled: bool,
    pub email_verified: bool,
    pub credentials: Vec<PasswordCredential>,
}

impl NewDirectoryUser {
    /// Build an enabled user carrying one permanent password credential.
    #[must_use]
    pub fn new(
        username: String,
        email: String,
        password: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            username,
            email,
            first_name,
            last_name,
            enabled: true,
            email_verified: false,
            credentials: vec![PasswordCredential::password(password)],
        }
    }
}

/// A credential entry attached to a new user.
///
/// The [`Debug`] impl redacts the credential value to prevent passwords from
/// reaching log output.
#[derive(Clone, Serialize)]
pub struct PasswordCredential {
    #[serde(rename = "type")]
    pub credential_type: String,
    pub value: String,
    pub temporary: bool,
}

impl PasswordCredential {
    /// A permanent password credential.
    #[must_use]
    pub fn password(value: String) -> Self {
        Self {
            credential_type: "password".to_string(),
            value,
            temporary: false,
        }
    }
}

impl std::fmt::Debug for PasswordCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCredential")
            .field("credential_type", &self.credential_type)
            .field("value", &"[REDACTED]")
            .field("temporary", &self.temporary)
            .finish()
    }
}

/// User representation returned by the directory.
///
/// All profile fields are optional on the wire; the directory omits anything
/// never set on the account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub groups: Option<Vec<String>>,
}

/// Realm role mappings for a user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMappings {
    #[serde(default)]
    pub realm_mappings: Option<Vec<RoleRef>>,
}

/// A single named role in a mapping response.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleRef {
    pub name: String,
}

/// Combined profile assembled from the user representation and the realm
/// role mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryUserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub roles: BTreeSet<String>,
    pub groups: BTreeSet<String>,
}

impl DirectoryUserProfile {
    /// Merge the two directory responses into one profile.
    #[must_use]
    pub fn from_parts(user: DirectoryUser, mappings: RoleMappings) -> Self {
        let roles = mappings
            .realm_mappings
            .unwrap_or_default()
            .into_iter()
            .map(|role| role.name)
            .collect();
        let groups = user.groups.unwrap_or_default().into_iter().collect();

        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            roles,
            groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> DirectoryUser {
        DirectoryUser {
            id: Some("7f0c5d20-9f31-4e2a-8d4f-0a1b2c3d4e5f".to_string()),
            username: Some("someUserName".to_string()),
            first_name: Some("Ivan".to_string()),
            last_name: Some("Ivanov".to_string()),
            email: Some("someusername@test.com".to_string()),
            groups: Some(vec!["staff".to_string(), "admins".to_string()]),
        }
    }

    #[test]
    fn new_user_serializes_directory_shape() {
        let user = NewDirectoryUser::new(
            "someUserName".to_string(),
            "someusername@test.com".to_string(),
            "somePassword".to_string(),
            "Ivan".to_string(),
            "Ivanov".to_string(),
        );

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "someUserName");
        assert_eq!(json["email"], "someusername@test.com");
        assert_eq!(json["firstName"], "Ivan");
        assert_eq!(json["lastName"], "Ivanov");
        assert_eq!(json["enabled"], true);
        assert_eq!(json["emailVerified"], false);
        assert_eq!(json["credentials"][0]["type"], "password");
        assert_eq!(json["credentials"][0]["value"], "somePassword");
        assert_eq!(json["credentials"][0]["temporary"], false);
    }

    #[test]
    fn password_credential_debug_redacts_value() {
        let cred = PasswordCredential::password("hunter2".to_string());
        let debug = format!("{cred:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn profile_combines_user_and_role_mappings() {
        let mappings = RoleMappings {
            realm_mappings: Some(vec![
                RoleRef {
                    name: "moderator".to_string(),
                },
                RoleRef {
                    name: "user".to_string(),
                },
            ]),
        };

        let profile = DirectoryUserProfile::from_parts(sample_user(), mappings);

        assert_eq!(profile.first_name.as_deref(), Some("Ivan"));
        assert_eq!(profile.last_name.as_deref(), Some("Ivanov"));
        assert_eq!(profile.email.as_deref(), Some("someusername@test.com"));
        assert_eq!(
            profile.roles.into_iter().collect::<Vec<_>>(),
            vec!["moderator", "user"]
        );
        assert_eq!(
            profile.groups.into_iter().collect::<Vec<_>>(),
            vec!["admins", "staff"]
        );
    }

    #[test]
    fn profile_with_no_mappings_has_empty_roles() {
        let user = DirectoryUser {
            groups: None,
            ..sample_user()
        };
        let mappings = RoleMappings {
            realm_mappings: None,
        };

        let profile = DirectoryUserProfile::from_parts(user, mappings);

        assert!(profile.roles.is_empty());
        assert!(profile.groups.is_empty());
    }

    #[test]
    fn directory_user_deserializes_sparse_response() {
        let user: DirectoryUser = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(user.id.as_deref(), Some("abc"));
        assert!(user.username.is_none());
        assert!(user.email.is_none());
        assert!(user.groups.is_none());
    }

    #[test]
    fn role_mappings_deserialize_realm_mappings() {
        let mappings: RoleMappings = serde_json::from_str(
            r#"{"realmMappings":[{"id":"1","name":"moderator","composite":false}]}"#,
        )
        .unwrap();
        let names: Vec<_> = mappings
            .realm_mappings
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["moderator"]);
    }
}
