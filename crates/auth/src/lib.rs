//! `cedro-auth` — pure authorization boundary for the ERP.
//!
//! This crate is intentionally decoupled from HTTP and storage. It holds the
//! static role→module→action permission matrix and answers access-control
//! queries for every UI surface and route guard in the application.
//!
//! All queries are total, deterministic and side-effect free; the tables are
//! compiled in and never change at runtime, so concurrent readers need no
//! synchronization. Anything outside the closed vocabularies fails closed
//! (denied), never open.

pub mod action;
pub mod claims;
pub mod guard;
pub mod legal;
pub mod matrix;
pub mod module;
pub mod role;

pub use action::Action;
pub use claims::{ClaimsError, SessionClaims, validate_claims};
pub use guard::{AccessError, is_authenticated, require_permission, require_session};
pub use legal::{LegalPermission, has_legal_permission};
pub use matrix::{
    accessible_modules, can_access_module, grants, has_permission, is_admin, is_read_only,
    module_actions,
};
pub use module::Module;
pub use role::{Role, RoleInfo};
