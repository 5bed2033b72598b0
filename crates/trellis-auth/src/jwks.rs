use std::sync::Arc;

use clerk_rs::ClerkConfiguration;
use clerk_rs::clerk::Clerk;
use clerk_rs::validators::authorizer::validate_jwt;
use clerk_rs::validators::jwks::MemoryCacheJwksProvider;

use crate::claims::SessionClaims;
use crate::error::AuthError;

/// Validates Clerk session tokens against the instance JWKS.
///
/// Holds one `MemoryCacheJwksProvider` (public keys cached for an hour), so a
/// server should build a single validator per Clerk secret key and share it
/// across requests.
#[derive(Clone)]
pub struct SessionValidator {
    provider: Arc<MemoryCacheJwksProvider>,
}

impl SessionValidator {
    #[must_use]
    pub fn new(secret_key: &str) -> Self {
        let config = ClerkConfiguration::new(None, None, Some(secret_key.to_string()), None);
        let clerk = Clerk::new(config);
        Self {
            provider: Arc::new(MemoryCacheJwksProvider::new(clerk)),
        }
    }

    /// Validate a session JWT and extract the claims Trellis needs.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` for an empty token, or
    /// `AuthError::JwksValidation` if the token is invalid, expired, or the
    /// JWKS endpoint is unreachable.
    pub async fn validate(&self, jwt: &str) -> Result<SessionClaims, AuthError> {
        let jwt = jwt.trim();
        if jwt.is_empty() {
            return Err(AuthError::NotAuthenticated);
        }

        let clerk_jwt = validate_jwt(jwt, self.provider.clone())
            .await
            .map_err(|e| AuthError::JwksValidation(e.to_string()))?;

        let expires_at = chrono::DateTime::from_timestamp(i64::from(clerk_jwt.exp), 0)
            .ok_or_else(|| AuthError::JwksValidation("invalid exp timestamp".into()))?;
        let org = clerk_jwt.org.as_ref();

        tracing::debug!(user_id = %clerk_jwt.sub, org_id = ?org.map(|o| &o.id), "validated session token");

        Ok(SessionClaims {
            user_id: clerk_jwt.sub.clone(),
            org_id: org.map(|o| o.id.clone()),
            org_slug: org.map(|o| o.slug.clone()),
            org_role: org.map(|o| o.role.clone()),
            expires_at,
        })
    }
}
