//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` is the seam the UI codes against, `firebase` implements it over
//! REST, `auth_channel` fans session transitions out to observers,
//! `firestore` serves landing-page statistics, and `service_errors` holds
//! the user-facing copy for non-auth failures.

pub mod auth_channel;
pub mod auth_error;
pub mod backend;
pub mod firebase;
pub mod firestore;
pub mod service_errors;
pub mod types;
