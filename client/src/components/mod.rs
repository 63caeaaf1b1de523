//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (navigation, auth modal, notifications)
//! while reading/writing shared state from Leptos context providers.

pub mod auth_modal;
pub mod nav_bar;
pub mod notification_stack;
pub mod page_view;
