//! User-facing copy for database and network failures.

#[cfg(test)]
#[path = "service_errors_test.rs"]
mod service_errors_test;

/// Message for a failed database operation, e.g. `"loading works"`.
pub fn firestore_error_message(code: &str, operation: &str) -> String {
    let detail = match code {
        "permission-denied" => "You do not have permission to perform this action.",
        "unavailable" => "Service is currently unavailable. Please try again later.",
        "deadline-exceeded" => "Request timed out. Please try again.",
        "resource-exhausted" => "Too many requests. Please wait a moment and try again.",
        _ => "Please try again later.",
    };
    format!("Error during {operation}. {detail}")
}

/// Message for a generic request failure outside the auth flows.
pub fn network_error_message(code: &str) -> &'static str {
    match code {
        "unavailable" => "Network unavailable. Please check your connection and try again.",
        "permission-denied" => "Permission denied. Please sign in and try again.",
        _ => "An error occurred. Please try again later.",
    }
}
