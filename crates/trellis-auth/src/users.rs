//! Clerk Backend API user lookup.
//!
//! Calls `GET {api_url}/users/{user_id}` directly via `reqwest`. The resolver
//! is built per request from the validated session, so the user id it looks up
//! always comes from the token, never from request payloads.

use serde::Deserialize;
use trellis_core::identity::{CurrentUser, IdentityResolver, RequestContext};

use crate::AuthError;

/// User record fields returned by the Clerk Backend API.
#[derive(Debug, Deserialize)]
struct ClerkUserRecord {
    id: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

impl From<ClerkUserRecord> for CurrentUser {
    fn from(record: ClerkUserRecord) -> Self {
        Self {
            id: record.id,
            image_url: record.image_url.unwrap_or_default(),
            first_name: record.first_name,
            last_name: record.last_name,
        }
    }
}

/// Resolves the session user's profile from Clerk.
#[derive(Clone)]
pub struct ClerkUserResolver {
    client: reqwest::Client,
    api_url: String,
    secret_key: String,
    user_id: Option<String>,
}

impl std::fmt::Debug for ClerkUserResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClerkUserResolver")
            .field("api_url", &self.api_url)
            .field("secret_key", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

impl ClerkUserResolver {
    #[must_use]
    pub fn new(api_url: &str, secret_key: &str, user_id: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            secret_key: secret_key.to_string(),
            user_id: user_id.filter(|id| !id.is_empty()),
        }
    }

    /// Resolver for whoever the request context says is signed in.
    #[must_use]
    pub fn for_context(api_url: &str, secret_key: &str, ctx: &RequestContext) -> Self {
        Self::new(api_url, secret_key, ctx.auth.user_id.clone())
    }

    fn user_url(&self, user_id: &str) -> String {
        format!("{}/users/{}", self.api_url, urlencoding::encode(user_id))
    }

    /// Fetch a user by id. `Ok(None)` when Clerk does not know the user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ClerkApiError` if the request fails, Clerk answers
    /// with a non-success status other than 404, or the body cannot be parsed.
    pub async fn fetch_user(&self, user_id: &str) -> Result<Option<CurrentUser>, AuthError> {
        let resp = self
            .client
            .get(self.user_url(user_id))
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .send()
            .await
            .map_err(|e| AuthError::ClerkApiError(format!("get user: {e}")))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(user_id, "clerk user not found");
            return Ok(None);
        }

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::ClerkApiError(format!(
                "get user: HTTP {status}: {body}"
            )));
        }

        let record: ClerkUserRecord = resp
            .json()
            .await
            .map_err(|e| AuthError::ClerkApiError(format!("parse user: {e}")))?;

        Ok(Some(record.into()))
    }
}

impl IdentityResolver for ClerkUserResolver {
    type Error = AuthError;

    async fn current_user(&self) -> Result<Option<CurrentUser>, AuthError> {
        match self.user_id.as_deref() {
            Some(user_id) => self.fetch_user(user_id).await,
            None => Ok(None),
        }
    }
}
