use super::*;

fn user(email: &str, display_name: Option<&str>) -> User {
    User {
        uid: "u1".to_owned(),
        email: email.to_owned(),
        display_name: display_name.map(str::to_owned),
    }
}

#[test]
fn display_label_prefers_display_name() {
    assert_eq!(user("jane@example.com", Some("Jane Doe")).display_label(), "Jane Doe");
}

#[test]
fn display_label_falls_back_to_email_local_part() {
    assert_eq!(user("jane@example.com", None).display_label(), "jane");
}

#[test]
fn display_label_ignores_blank_display_name() {
    assert_eq!(user("sam@example.com", Some("   ")).display_label(), "sam");
}

#[test]
fn email_local_part_without_at_returns_input() {
    assert_eq!(email_local_part("nobody"), "nobody");
}

#[test]
fn user_deserializes_without_display_name() {
    let parsed: User = serde_json::from_str(r#"{"uid":"u9","email":"a@b.co"}"#).unwrap();
    assert_eq!(parsed.display_name, None);
    assert_eq!(parsed.uid, "u9");
}
