use chrono::{DateTime, Utc};
use trellis_core::identity::{AuthIdentity, RequestContext};

/// Parsed and validated Clerk session claims.
///
/// Produced by JWKS validation, turned into a [`RequestContext`] for
/// procedure handlers.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    /// Clerk user ID (`sub` claim).
    pub user_id: String,
    /// Organization ID (`org_id` claim). `None` if no organization is active.
    pub org_id: Option<String>,
    /// Organization slug (`org_slug` claim).
    pub org_slug: Option<String>,
    /// Organization role (`org_role` claim, e.g. `"org:admin"`).
    pub org_role: Option<String>,
    /// Token expiration time (from `exp` claim).
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Convert to a lightweight `AuthIdentity` for cross-crate passing.
    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: Some(self.user_id.clone()),
            org_id: self.org_id.clone(),
            org_slug: self.org_slug.clone(),
            org_role: self.org_role.clone(),
        }
    }

    #[must_use]
    pub fn to_request_context(&self) -> RequestContext {
        RequestContext::new(self.to_identity())
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at <= threshold
    }
}
