//! Authentication flows: form validation, submit controller, and the
//! session observer.

pub mod controller;
pub mod observer;
pub mod validate;
