//! Tenant context validation.

use trellis_core::identity::RequestContext;

use crate::AuthError;

/// Return the active organization id of the request.
///
/// Handlers call this before touching tenant data so that nothing is mutated
/// or audited without an organization scope.
///
/// # Errors
///
/// Returns `AuthError::MissingTenantContext` if the context carries no
/// organization id, or an empty one.
pub fn validate_org_id(ctx: &RequestContext) -> Result<String, AuthError> {
    match ctx.auth.org_id.as_deref() {
        Some(org_id) if !org_id.is_empty() => Ok(org_id.to_string()),
        _ => Err(AuthError::MissingTenantContext),
    }
}

#[cfg(test)]
mod tests {
    use trellis_core::errors::ErrorCode;
    use trellis_core::identity::AuthIdentity;

    use super::*;

    fn ctx(org_id: Option<&str>) -> RequestContext {
        RequestContext::new(AuthIdentity {
            user_id: Some("user_2xyz".into()),
            org_id: org_id.map(String::from),
            ..Default::default()
        })
    }

    #[test]
    fn returns_org_id_unchanged() {
        assert_eq!(validate_org_id(&ctx(Some("org_2abc"))).unwrap(), "org_2abc");
    }

    #[test]
    fn preserves_exact_string() {
        let org = " org_With-Odd_Case ";
        assert_eq!(validate_org_id(&ctx(Some(org))).unwrap(), org);
    }

    #[test]
    fn missing_org_fails() {
        let err = validate_org_id(&RequestContext::default()).unwrap_err();
        assert!(matches!(err, AuthError::MissingTenantContext));
        assert_eq!(err.code(), ErrorCode::BadRequest);
    }

    #[test]
    fn user_without_org_fails() {
        let err = validate_org_id(&ctx(None)).unwrap_err();
        assert!(matches!(err, AuthError::MissingTenantContext));
    }

    #[test]
    fn empty_org_fails() {
        let err = validate_org_id(&ctx(Some(""))).unwrap_err();
        assert!(matches!(err, AuthError::MissingTenantContext));
    }
}
