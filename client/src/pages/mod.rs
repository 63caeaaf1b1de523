//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth guard, count loading) and
//! delegates rendering details to `components`.

pub mod create;
pub mod home;
pub mod profile;
