//! Request identity and actor resolution.
//!
//! `AuthIdentity` is what the session token says about the caller (user and
//! active organization). `CurrentUser` is the actor profile used to attribute
//! audit entries. Resolving it is an injected capability so the recorder never
//! reaches for ambient state.

use std::future::Future;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated identity for cross-crate passing.
///
/// Produced by `trellis-auth` from validated session claims. Contains only
/// data fields, no auth logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    /// Clerk user ID (from JWT `sub` claim).
    pub user_id: Option<String>,
    /// Active organization ID (from JWT `org_id` claim). `None` = no tenant selected.
    pub org_id: Option<String>,
    /// Active organization slug (from JWT `org_slug` claim).
    pub org_slug: Option<String>,
    /// Role in the active organization (e.g. `"org:admin"`).
    pub org_role: Option<String>,
}

/// Per-request context handed to protected procedure handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RequestContext {
    pub auth: AuthIdentity,
}

impl RequestContext {
    #[must_use]
    pub const fn new(auth: AuthIdentity) -> Self {
        Self { auth }
    }
}

/// Profile of the authenticated actor, as returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentUser {
    pub id: String,
    pub image_url: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl CurrentUser {
    /// `"{first} {last}"`, skipping whichever part is missing.
    #[must_use]
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_string()
    }
}

/// Capability that resolves the actor of the current request.
///
/// `Ok(None)` means nobody is signed in. Errors are provider failures
/// (network, bad credentials) and are distinct from "no user".
pub trait IdentityResolver {
    type Error: std::error::Error + Send + Sync + 'static;

    fn current_user(
        &self,
    ) -> impl Future<Output = Result<Option<CurrentUser>, Self::Error>> + Send;
}
