//! Guard helpers for call sites that want an error value instead of a bool.
//!
//! Two layers, matching how the application gates access:
//! - the route middleware only checks that a session token *exists* (it never
//!   decodes or validates it),
//! - UI surfaces and handlers consult the permission matrix per role.

use thiserror::Error;
use tracing::debug;

use crate::{Action, Module, Role, matrix};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("not authenticated")]
    NotAuthenticated,

    #[error("forbidden: role '{role}' may not '{action}' on '{module}'")]
    Forbidden {
        role: Role,
        module: Module,
        action: Action,
    },
}

/// Middleware-style presence gate: a non-empty session token exists.
pub fn is_authenticated(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

/// Require a session token to be present.
pub fn require_session(token: Option<&str>) -> Result<(), AccessError> {
    if is_authenticated(token) {
        Ok(())
    } else {
        Err(AccessError::NotAuthenticated)
    }
}

/// Require `role` to hold (`module`, `action`) in the matrix.
pub fn require_permission(role: Role, module: Module, action: Action) -> Result<(), AccessError> {
    if matrix::has_permission(role, module, action) {
        Ok(())
    } else {
        debug!(%role, %module, %action, "permission denied");
        Err(AccessError::Forbidden {
            role,
            module,
            action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_token_is_unauthenticated() {
        assert!(!is_authenticated(None));
        assert!(!is_authenticated(Some("")));
        assert!(is_authenticated(Some("opaque-token")));
    }

    #[test]
    fn require_session_mirrors_the_presence_check() {
        assert_eq!(require_session(None), Err(AccessError::NotAuthenticated));
        assert_eq!(require_session(Some("")), Err(AccessError::NotAuthenticated));
        assert_eq!(require_session(Some("opaque-token")), Ok(()));
    }

    #[test]
    fn require_permission_mirrors_the_matrix() {
        assert_eq!(
            require_permission(Role::Juridico, Module::Juridico, Action::Delete),
            Ok(())
        );
        assert_eq!(
            require_permission(Role::Investidor, Module::Vendas, Action::View),
            Err(AccessError::Forbidden {
                role: Role::Investidor,
                module: Module::Vendas,
                action: Action::View,
            })
        );
    }
}
