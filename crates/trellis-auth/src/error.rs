use thiserror::Error;
use trellis_core::errors::ErrorCode;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated")]
    NotAuthenticated,

    #[error("organization id not found in request context")]
    MissingTenantContext,

    #[error("JWKS validation failed: {0}")]
    JwksValidation(String),

    #[error("clerk API error: {0}")]
    ClerkApiError(String),
}

impl AuthError {
    /// RPC error code for this failure.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingTenantContext => ErrorCode::BadRequest,
            Self::NotAuthenticated | Self::JwksValidation(_) => ErrorCode::Unauthorized,
            Self::ClerkApiError(_) => ErrorCode::InternalServerError,
        }
    }
}
