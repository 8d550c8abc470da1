//! The static permission matrix and its query functions.
//!
//! The matrix is compiled in: changing permissions is a code change and a
//! redeploy, never a runtime mutation. Every query is a pure read of the
//! `const` tables below, so the evaluator is safe to call from any number of
//! threads without synchronization.
//!
//! Absence of a module entry for a role means "no actions permitted on that
//! module". It is never an error.

use crate::{Action, Module, Role};

// ─────────────────────────────────────────────────────────────────────────────
// Action sets
// ─────────────────────────────────────────────────────────────────────────────

const VIEW: &[Action] = &[Action::View];
const VIEW_CREATE: &[Action] = &[Action::View, Action::Create];
const VIEW_EDIT: &[Action] = &[Action::View, Action::Edit];
const VIEW_EXPORT: &[Action] = &[Action::View, Action::Export];
const CRUD: &[Action] = &[Action::View, Action::Create, Action::Edit, Action::Delete];
const CRUD_EXPORT: &[Action] = &[
    Action::View,
    Action::Create,
    Action::Edit,
    Action::Delete,
    Action::Export,
];
const CRUD_EXPORT_IMPORT: &[Action] = &[
    Action::View,
    Action::Create,
    Action::Edit,
    Action::Delete,
    Action::Export,
    Action::Import,
];
const CRUD_EXPORT_APPROVE: &[Action] = &[
    Action::View,
    Action::Create,
    Action::Edit,
    Action::Delete,
    Action::Export,
    Action::Approve,
];
const CRUD_EXPORT_IMPORT_APPROVE: &[Action] = &[
    Action::View,
    Action::Create,
    Action::Edit,
    Action::Delete,
    Action::Export,
    Action::Import,
    Action::Approve,
];
// company may create/edit legal records but not delete them
const VIEW_CREATE_EDIT_EXPORT: &[Action] =
    &[Action::View, Action::Create, Action::Edit, Action::Export];

// ─────────────────────────────────────────────────────────────────────────────
// Role grants
// ─────────────────────────────────────────────────────────────────────────────

/// A role's (module, actions) entries.
pub type Grants = &'static [(Module, &'static [Action])];

const ADMIN_GRANTS: Grants = &[
    (Module::Dashboard, VIEW_EXPORT),
    (Module::Financeiro, CRUD_EXPORT_IMPORT_APPROVE),
    (Module::Rh, CRUD_EXPORT),
    (Module::Juridico, CRUD_EXPORT),
    (Module::Documentos, CRUD_EXPORT),
    (Module::Investidores, CRUD_EXPORT_APPROVE),
    (Module::Vendas, CRUD_EXPORT_APPROVE),
    (Module::Produtos, CRUD_EXPORT),
    (Module::Clientes, CRUD_EXPORT),
    (Module::Relatorios, VIEW_EXPORT),
    (Module::Configuracoes, VIEW_EDIT),
    (Module::Admin, CRUD),
];

const FINANCEIRO_GRANTS: Grants = &[
    (Module::Dashboard, VIEW),
    (Module::Financeiro, CRUD_EXPORT_IMPORT),
    (Module::Documentos, VIEW),
    (Module::Investidores, VIEW),
    (Module::Vendas, VIEW),
    (Module::Relatorios, VIEW_EXPORT),
];

const RH_GRANTS: Grants = &[
    (Module::Dashboard, VIEW),
    (Module::Rh, CRUD_EXPORT),
    (Module::Documentos, VIEW_CREATE),
    (Module::Relatorios, VIEW_EXPORT),
];

const JURIDICO_GRANTS: Grants = &[
    (Module::Dashboard, VIEW),
    (Module::Juridico, CRUD_EXPORT),
    (Module::Documentos, CRUD),
    (Module::Relatorios, VIEW_EXPORT),
];

const CONTADOR_GRANTS: Grants = &[
    (Module::Dashboard, VIEW),
    (Module::Financeiro, VIEW_EXPORT),
    (Module::Documentos, VIEW),
    (Module::Investidores, VIEW),
    (Module::Relatorios, VIEW_EXPORT),
];

const INVESTIDOR_GRANTS: Grants = &[
    (Module::Dashboard, VIEW),
    (Module::Investidores, VIEW),
    (Module::Relatorios, VIEW_EXPORT),
    (Module::Documentos, VIEW),
];

const COMPANY_GRANTS: Grants = &[
    (Module::Dashboard, VIEW_EXPORT),
    (Module::Financeiro, CRUD_EXPORT_IMPORT),
    (Module::Rh, CRUD_EXPORT),
    (Module::Juridico, VIEW_CREATE_EDIT_EXPORT),
    (Module::Documentos, CRUD_EXPORT),
    (Module::Investidores, CRUD_EXPORT),
    (Module::Vendas, CRUD_EXPORT),
    (Module::Produtos, CRUD_EXPORT),
    (Module::Clientes, CRUD_EXPORT),
    (Module::Relatorios, VIEW_EXPORT),
    (Module::Configuracoes, VIEW_EDIT),
];

// ─────────────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────────────

/// The raw (module, actions) entries for a role.
///
/// Every present entry has at least one action; a module the role cannot touch
/// simply has no entry. Callers must not depend on entry order.
pub fn grants(role: Role) -> Grants {
    match role {
        Role::Admin => ADMIN_GRANTS,
        Role::Financeiro => FINANCEIRO_GRANTS,
        Role::Rh => RH_GRANTS,
        Role::Juridico => JURIDICO_GRANTS,
        Role::Contador => CONTADOR_GRANTS,
        Role::Investidor => INVESTIDOR_GRANTS,
        Role::Company => COMPANY_GRANTS,
    }
}

/// Allowed actions for a role on a module.
///
/// Absence is the empty slice, never an error.
pub fn module_actions(role: Role, module: Module) -> &'static [Action] {
    grants(role)
        .iter()
        .find(|(m, _)| *m == module)
        .map(|(_, actions)| *actions)
        .unwrap_or(&[])
}

/// Can `role` perform `action` on `module`?
pub fn has_permission(role: Role, module: Module, action: Action) -> bool {
    module_actions(role, module).contains(&action)
}

/// Does `role` have any entry for `module` at all?
pub fn can_access_module(role: Role, module: Module) -> bool {
    grants(role).iter().any(|(m, _)| *m == module)
}

/// All modules the role can access, in no guaranteed order.
///
/// Callers that need a stable order for display must sort independently.
pub fn accessible_modules(role: Role) -> Vec<Module> {
    grants(role).iter().map(|(m, _)| *m).collect()
}

/// Convenience predicate for the administrator role.
///
/// Admin's actual power comes from its matrix entry (every module, full action
/// sets), not from this flag; a test pins the two together so they cannot
/// drift.
pub fn is_admin(role: Role) -> bool {
    matches!(role, Role::Admin)
}

/// Whether the role can never mutate data.
///
/// Derived structurally from the matrix rather than from a hardcoded role
/// list: a role is read-only iff none of its module entries contains a
/// mutating action. Over the fixed matrix this is exactly
/// {contador, investidor}.
pub fn is_read_only(role: Role) -> bool {
    grants(role)
        .iter()
        .all(|(_, actions)| actions.iter().all(|a| !a.is_mutating()))
}

impl Role {
    /// Ergonomic form of [`has_permission`] for UI call sites.
    pub fn can(self, module: Module, action: Action) -> bool {
        has_permission(self, module, action)
    }
}
