//! Legal-document permission vocabulary.
//!
//! The legal subsystem asks questions in its own four-value vocabulary
//! (`legal.read` … `legal.delete`). This layer is a pure translation onto the
//! general (module, action) vocabulary; it never holds a second copy of the
//! matrix, so the two cannot drift.

use serde::{Deserialize, Serialize};

use crate::{Action, Module, Role, matrix};

/// Permission name used by the legal-document subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalPermission {
    #[serde(rename = "legal.read")]
    Read,
    #[serde(rename = "legal.create")]
    Create,
    #[serde(rename = "legal.update")]
    Update,
    #[serde(rename = "legal.delete")]
    Delete,
}

impl LegalPermission {
    pub const ALL: [LegalPermission; 4] = [
        LegalPermission::Read,
        LegalPermission::Create,
        LegalPermission::Update,
        LegalPermission::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LegalPermission::Read => "legal.read",
            LegalPermission::Create => "legal.create",
            LegalPermission::Update => "legal.update",
            LegalPermission::Delete => "legal.delete",
        }
    }

    /// Fail-closed parse of an external string.
    pub fn parse(s: &str) -> Option<LegalPermission> {
        match s {
            "legal.read" => Some(LegalPermission::Read),
            "legal.create" => Some(LegalPermission::Create),
            "legal.update" => Some(LegalPermission::Update),
            "legal.delete" => Some(LegalPermission::Delete),
            _ => None,
        }
    }

    /// The (module, action) pair this alias stands for.
    ///
    /// Total over the four keys; every alias targets the legal module.
    pub fn target(self) -> (Module, Action) {
        let action = match self {
            LegalPermission::Read => Action::View,
            LegalPermission::Create => Action::Create,
            LegalPermission::Update => Action::Edit,
            LegalPermission::Delete => Action::Delete,
        };
        (Module::Juridico, action)
    }
}

impl core::fmt::Display for LegalPermission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Can `role` exercise the legal-subsystem `permission`?
///
/// Translate, then delegate to the matrix. No caching; every call re-derives
/// the answer from the static tables.
pub fn has_legal_permission(role: Role, permission: LegalPermission) -> bool {
    let (module, action) = permission.target();
    matrix::has_permission(role, module, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_names_round_trip() {
        for permission in LegalPermission::ALL {
            assert_eq!(LegalPermission::parse(permission.as_str()), Some(permission));
        }
    }

    #[test]
    fn unknown_alias_fails_closed() {
        assert_eq!(LegalPermission::parse("legal.export"), None);
        assert_eq!(LegalPermission::parse(""), None);
    }

    #[test]
    fn alias_agrees_with_the_matrix_for_every_role() {
        for role in Role::ALL {
            for permission in LegalPermission::ALL {
                let (module, action) = permission.target();
                assert_eq!(
                    has_legal_permission(role, permission),
                    matrix::has_permission(role, module, action),
                    "{role}/{permission}",
                );
            }
        }
    }

    #[test]
    fn juridico_may_delete_but_rh_may_not() {
        assert!(has_legal_permission(Role::Juridico, LegalPermission::Delete));
        assert!(!has_legal_permission(Role::Rh, LegalPermission::Delete));
    }

    #[test]
    fn serde_uses_dotted_names() {
        let json = serde_json::to_string(&LegalPermission::Update).unwrap();
        assert_eq!(json, "\"legal.update\"");
        let permission: LegalPermission = serde_json::from_str("\"legal.read\"").unwrap();
        assert_eq!(permission, LegalPermission::Read);
    }
}
