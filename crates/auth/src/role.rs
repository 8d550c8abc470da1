use serde::{Deserialize, Serialize};

/// Role a user holds within one company.
///
/// Roles are a closed set: every authorization decision is made relative to
/// exactly one active role (the role the user holds for the currently selected
/// company). The role→permission mapping lives in [`crate::matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Financeiro,
    Rh,
    Juridico,
    Contador,
    Investidor,
    Company,
}

impl Role {
    /// Every role, for iteration in metadata screens and tests.
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::Financeiro,
        Role::Rh,
        Role::Juridico,
        Role::Contador,
        Role::Investidor,
        Role::Company,
    ];

    /// Wire name, matching what the backend stores on the user-company
    /// association.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Financeiro => "financeiro",
            Role::Rh => "rh",
            Role::Juridico => "juridico",
            Role::Contador => "contador",
            Role::Investidor => "investidor",
            Role::Company => "company",
        }
    }

    /// Parse an external string into a role.
    ///
    /// Fail-closed boundary: anything outside the closed set is `None`, which
    /// callers must treat as "no access". Never panics, never defaults to a
    /// permissive role.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "financeiro" => Some(Role::Financeiro),
            "rh" => Some(Role::Rh),
            "juridico" => Some(Role::Juridico),
            "contador" => Some(Role::Contador),
            "investidor" => Some(Role::Investidor),
            "company" => Some(Role::Company),
            _ => None,
        }
    }

    /// Display label (UI only; carries no authorization semantics).
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Financeiro => "Financeiro",
            Role::Rh => "Recursos Humanos",
            Role::Juridico => "Jurídico",
            Role::Contador => "Contador",
            Role::Investidor => "Investidor",
            Role::Company => "Empresa",
        }
    }

    /// One-line description shown next to the label in role pickers.
    pub fn description(self) -> &'static str {
        match self {
            Role::Admin => "Acesso total a todos os módulos da empresa",
            Role::Financeiro => "Gestão de lançamentos financeiros e contas da empresa",
            Role::Rh => "Gestão de colaboradores e folha de pagamento",
            Role::Juridico => "Gestão de contratos e documentos jurídicos",
            Role::Contador => "Acesso somente leitura aos dados financeiros",
            Role::Investidor => "Acompanhamento de distribuições e relatórios de investimento",
            Role::Company => "Acesso operacional completo aos módulos da empresa",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a role, as role pickers render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    pub label: &'static str,
    pub description: &'static str,
}

impl Role {
    pub fn info(self) -> RoleInfo {
        RoleInfo {
            label: self.label(),
            description: self.description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn unknown_role_fails_closed() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Admin"), None);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Role::Rh).unwrap();
        assert_eq!(json, "\"rh\"");
        let role: Role = serde_json::from_str("\"juridico\"").unwrap();
        assert_eq!(role, Role::Juridico);
    }

    #[test]
    fn unknown_role_is_a_deserialize_error() {
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }
}
