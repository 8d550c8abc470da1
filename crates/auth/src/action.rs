use serde::{Deserialize, Serialize};

/// Operation kind gated by the permission matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Export,
    Import,
    Approve,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Export,
        Action::Import,
        Action::Approve,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Export => "export",
            Action::Import => "import",
            Action::Approve => "approve",
        }
    }

    /// Fail-closed parse of an external string.
    pub fn parse(s: &str) -> Option<Action> {
        match s {
            "view" => Some(Action::View),
            "create" => Some(Action::Create),
            "edit" => Some(Action::Edit),
            "delete" => Some(Action::Delete),
            "export" => Some(Action::Export),
            "import" => Some(Action::Import),
            "approve" => Some(Action::Approve),
            _ => None,
        }
    }

    /// Display label for buttons and confirmation dialogs.
    pub fn label(self) -> &'static str {
        match self {
            Action::View => "Visualizar",
            Action::Create => "Criar",
            Action::Edit => "Editar",
            Action::Delete => "Excluir",
            Action::Export => "Exportar",
            Action::Import => "Importar",
            Action::Approve => "Aprovar",
        }
    }

    /// Whether the action changes data.
    ///
    /// `view` and `export` are the only non-mutating actions; everything else
    /// writes. [`crate::matrix::is_read_only`] is derived from this.
    pub fn is_mutating(self) -> bool {
        !matches!(self, Action::View | Action::Export)
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::parse(action.as_str()), Some(action));
        }
    }

    #[test]
    fn unknown_action_fails_closed() {
        assert_eq!(Action::parse("archive"), None);
        assert_eq!(Action::parse(""), None);
    }

    #[test]
    fn only_view_and_export_are_non_mutating() {
        let non_mutating: Vec<Action> =
            Action::ALL.into_iter().filter(|a| !a.is_mutating()).collect();
        assert_eq!(non_mutating, vec![Action::View, Action::Export]);
    }
}
