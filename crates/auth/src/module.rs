use serde::{Deserialize, Serialize};

/// Functional area of the application.
///
/// Closed set, fixed at build time. Route paths and navigation entries map
/// one-to-one onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Dashboard,
    Financeiro,
    Rh,
    Juridico,
    Documentos,
    Investidores,
    Vendas,
    Produtos,
    Clientes,
    Relatorios,
    Configuracoes,
    Admin,
}

impl Module {
    pub const ALL: [Module; 12] = [
        Module::Dashboard,
        Module::Financeiro,
        Module::Rh,
        Module::Juridico,
        Module::Documentos,
        Module::Investidores,
        Module::Vendas,
        Module::Produtos,
        Module::Clientes,
        Module::Relatorios,
        Module::Configuracoes,
        Module::Admin,
    ];

    /// Wire name (also the route segment for the module's pages).
    pub fn as_str(self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::Financeiro => "financeiro",
            Module::Rh => "rh",
            Module::Juridico => "juridico",
            Module::Documentos => "documentos",
            Module::Investidores => "investidores",
            Module::Vendas => "vendas",
            Module::Produtos => "produtos",
            Module::Clientes => "clientes",
            Module::Relatorios => "relatorios",
            Module::Configuracoes => "configuracoes",
            Module::Admin => "admin",
        }
    }

    /// Fail-closed parse of an external string (route segment, JSON payload).
    pub fn parse(s: &str) -> Option<Module> {
        match s {
            "dashboard" => Some(Module::Dashboard),
            "financeiro" => Some(Module::Financeiro),
            "rh" => Some(Module::Rh),
            "juridico" => Some(Module::Juridico),
            "documentos" => Some(Module::Documentos),
            "investidores" => Some(Module::Investidores),
            "vendas" => Some(Module::Vendas),
            "produtos" => Some(Module::Produtos),
            "clientes" => Some(Module::Clientes),
            "relatorios" => Some(Module::Relatorios),
            "configuracoes" => Some(Module::Configuracoes),
            "admin" => Some(Module::Admin),
            _ => None,
        }
    }

    /// Display label for navigation and headings.
    pub fn label(self) -> &'static str {
        match self {
            Module::Dashboard => "Dashboard",
            Module::Financeiro => "Financeiro",
            Module::Rh => "Recursos Humanos",
            Module::Juridico => "Jurídico",
            Module::Documentos => "Documentos",
            Module::Investidores => "Investidores",
            Module::Vendas => "Vendas",
            Module::Produtos => "Produtos",
            Module::Clientes => "Clientes",
            Module::Relatorios => "Relatórios",
            Module::Configuracoes => "Configurações",
            Module::Admin => "Administração",
        }
    }
}

impl core::fmt::Display for Module {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for module in Module::ALL {
            assert_eq!(Module::parse(module.as_str()), Some(module));
        }
    }

    #[test]
    fn unknown_module_fails_closed() {
        assert_eq!(Module::parse("estoque"), None);
        assert_eq!(Module::parse(""), None);
    }
}
