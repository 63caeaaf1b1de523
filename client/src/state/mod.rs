//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth_form`, `notifications`,
//! `redirect`) so components depend on small focused models. Each model is
//! plain data; the app wraps them in `RwSignal`s provided through context.

pub mod auth_form;
pub mod notifications;
pub mod redirect;
pub mod session;
