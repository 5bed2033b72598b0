//! # trellis-auth
//!
//! Authentication glue for Trellis procedure handlers.
//!
//! - [`tenant::validate_org_id`] extracts the active organization from a
//!   request context and fails fast when none is selected.
//! - [`jwks::SessionValidator`] validates Clerk session tokens (`clerk-rs`)
//!   into [`SessionClaims`].
//! - [`users::ClerkUserResolver`] looks up the acting user through the Clerk
//!   Backend API and implements `trellis_core::identity::IdentityResolver`.

pub mod claims;
pub mod error;
pub mod jwks;
pub mod tenant;
pub mod users;

pub use claims::SessionClaims;
pub use error::AuthError;
pub use tenant::validate_org_id;
pub use users::ClerkUserResolver;
