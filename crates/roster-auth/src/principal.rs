//! Request-scoped authenticated caller context.

use crate::claims::TokenClaims;
use std::collections::BTreeSet;

/// The authenticated caller of the current request.
///
/// Derived exactly once per request from verified token claims by the bearer
/// middleware and carried in the request extensions. It is never stored
/// globally and never shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedPrincipal {
    /// Subject identifier from the token.
    pub subject: String,

    /// Authorization roles, already `ROLE_`-prefixed.
    pub roles: BTreeSet<String>,
}

impl AuthorizedPrincipal {
    /// Derive a principal from verified token claims.
    #[must_use]
    pub fn from_claims(claims: &TokenClaims) -> Self {
        Self {
            subject: claims.sub.clone(),
            roles: claims.authorities(),
        }
    }

    /// Check for a role. Exact, case-sensitive match against the prefixed name.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}
