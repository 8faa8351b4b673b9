//! Response models for the users API.

use std::collections::BTreeSet;

use roster_directory::models::DirectoryUserProfile;
use serde::Serialize;
use utoipa::ToSchema;

/// Profile of a directory user as exposed over the API.
///
/// Optional fields are serialized as `null` when the directory record
/// omits them.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    /// User's first name, if set in the directory.
    pub first_name: Option<String>,

    /// User's last name, if set in the directory.
    pub last_name: Option<String>,

    /// User's email address, if set in the directory.
    pub email: Option<String>,

    /// Realm-level role names assigned to the user.
    pub roles: BTreeSet<String>,

    /// Names of the groups the user belongs to.
    pub groups: BTreeSet<String>,
}

impl From<DirectoryUserProfile> for UserProfileResponse {
    fn from(profile: DirectoryUserProfile) -> Self {
        Self {
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            roles: profile.roles,
            groups: profile.groups,
        }
    }
}
