use super::*;

fn coordinator() -> (RedirectCoordinator<MemoryIntentStore>, MemoryIntentStore) {
    let store = MemoryIntentStore::default();
    (RedirectCoordinator::new(store.clone()), store)
}

#[test]
fn home_paths() {
    assert!(is_home_path("/"));
    assert!(is_home_path("/index.html"));
    assert!(is_home_path("/site/index.html"));
    assert!(!is_home_path("/create"));
    assert!(!is_home_path(""));
}

#[test]
fn consume_on_home_returns_delayed_create_redirect_once() {
    let (redirect, store) = coordinator();
    redirect.set(RedirectIntent::Create);

    let first = redirect.consume_if_home("/");
    let second = redirect.consume_if_home("/");

    assert_eq!(first, Some(PendingRedirect { path: "/create", delay_ms: 1_000 }));
    assert_eq!(second, None);
    assert_eq!(store.get(), None);
}

#[test]
fn consume_off_home_leaves_token_in_place() {
    let (redirect, store) = coordinator();
    redirect.set(RedirectIntent::Create);

    assert_eq!(redirect.consume_if_home("/profile"), None);

    assert_eq!(store.get().as_deref(), Some("create"));
    // The stale token still fires on a later landing-page sign-in.
    assert!(redirect.consume_if_home("/index.html").is_some());
}

#[test]
fn unknown_token_is_ignored_and_kept() {
    let (redirect, store) = coordinator();
    store.set("profile");

    assert_eq!(redirect.consume_if_home("/"), None);
    assert_eq!(store.get().as_deref(), Some("profile"));
}

#[test]
fn set_overwrites_previous_token() {
    let (redirect, store) = coordinator();
    store.set("something-else");
    redirect.set(RedirectIntent::Create);
    assert_eq!(store.get().as_deref(), Some("create"));
    assert_eq!(redirect.pending(), Some(RedirectIntent::Create));
}

#[test]
fn absent_token_means_no_redirect() {
    let (redirect, _store) = coordinator();
    assert_eq!(redirect.consume_if_home("/"), None);
}

#[test]
fn session_store_is_empty_off_browser() {
    let store = SessionIntentStore;
    store.set("create");
    assert_eq!(store.get(), None);
}
