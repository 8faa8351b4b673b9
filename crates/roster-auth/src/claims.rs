//! Identity-token claims with the directory's realm role layout.
//!
//! Provides the `TokenClaims` struct containing the RFC 7519 standard claims
//! this service reads plus the directory-specific `realm_access` claim.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Prefix applied to every role name taken from the token before it is used
/// in authorization comparisons.
pub const ROLE_PREFIX: &str = "ROLE_";

/// The nested `realm_access` claim carrying the caller's realm role names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RealmAccess {
    /// Role names as assigned in the directory, without any prefix.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Verified identity-token claims.
///
/// Deserialized from the token payload by [`decode_token`](crate::decode_token);
/// unknown claims are ignored. The `realm_access` claim is optional by design:
/// a token without it is still authentic, it just carries zero roles.
///
/// # Example
///
/// ```rust
/// use roster_auth::TokenClaims;
///
/// let claims = TokenClaims::builder()
///     .subject("mihail")
///     .realm_roles(vec!["MODERATOR"])
///     .expires_in_secs(3600)
///     .build();
///
/// assert_eq!(claims.sub, "mihail");
/// assert!(claims.authorities().contains("ROLE_MODERATOR"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject, the caller's identifier in the directory.
    pub sub: String,

    /// Issuer, the realm URL that minted the token.
    #[serde(default)]
    pub iss: String,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// Issued at as Unix timestamp.
    #[serde(default)]
    pub iat: i64,

    /// Realm role assignments. Absent when the caller has no realm roles
    /// or the token was minted without the claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm_access: Option<RealmAccess>,
}

impl TokenClaims {
    /// Create a new builder for constructing token claims.
    #[must_use]
    pub fn builder() -> TokenClaimsBuilder {
        TokenClaimsBuilder::default()
    }

    /// Check if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Derive the caller's authorization roles from the `realm_access` claim.
    ///
    /// Every role name is prefixed with [`ROLE_PREFIX`]. A missing or empty
    /// `realm_access` claim yields an empty set; it never fails.
    #[must_use]
    pub fn authorities(&self) -> BTreeSet<String> {
        self.realm_access
            .as_ref()
            .map(|access| {
                access
                    .roles
                    .iter()
                    .map(|role| format!("{ROLE_PREFIX}{role}"))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Builder for constructing token claims.
#[derive(Debug, Default)]
pub struct TokenClaimsBuilder {
    sub: Option<String>,
    iss: Option<String>,
    exp: Option<i64>,
    iat: Option<i64>,
    realm_access: Option<RealmAccess>,
}

impl TokenClaimsBuilder {
    /// Set the subject.
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Set the issuer.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Set expiration time as Unix timestamp.
    #[must_use]
    pub fn expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set expiration time as seconds from now.
    #[must_use]
    pub fn expires_in_secs(mut self, secs: i64) -> Self {
        self.exp = Some(Utc::now().timestamp() + secs);
        self
    }

    /// Set the issued at time.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set the realm role names (unprefixed, directory spelling).
    #[must_use]
    pub fn realm_roles(mut self, roles: Vec<impl Into<String>>) -> Self {
        self.realm_access = Some(RealmAccess {
            roles: roles.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Add a single realm role name.
    #[must_use]
    pub fn add_realm_role(mut self, role: impl Into<String>) -> Self {
        self.realm_access
            .get_or_insert_with(RealmAccess::default)
            .roles
            .push(role.into());
        self
    }

    /// Build the token claims.
    ///
    /// # Defaults
    ///
    /// - `sub`: empty string if not set
    /// - `iss`: "roster" if not set
    /// - `exp`: 1 hour from now if not set
    /// - `iat`: current time if not set
    /// - `realm_access`: absent if no roles were set
    #[must_use]
    pub fn build(self) -> TokenClaims {
        let now = Utc::now().timestamp();

        TokenClaims {
            sub: self.sub.unwrap_or_default(),
            iss: self.iss.unwrap_or_else(|| "roster".to_string()),
            exp: self.exp.unwrap_or(now + 3600), // Default: 1 hour
            iat: self.iat.unwrap_or(now),
            realm_access: self.realm_access,
        }
    }
}
