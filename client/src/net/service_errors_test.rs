use super::*;

#[test]
fn firestore_permission_denied_names_operation() {
    assert_eq!(
        firestore_error_message("permission-denied", "loading works"),
        "Error during loading works. You do not have permission to perform this action."
    );
}

#[test]
fn firestore_unknown_code_uses_default_detail() {
    assert_eq!(
        firestore_error_message("aborted", "operation"),
        "Error during operation. Please try again later."
    );
}

#[test]
fn network_messages() {
    assert_eq!(
        network_error_message("unavailable"),
        "Network unavailable. Please check your connection and try again."
    );
    assert_eq!(
        network_error_message("permission-denied"),
        "Permission denied. Please sign in and try again."
    );
    assert_eq!(network_error_message("internal"), "An error occurred. Please try again later.");
}
