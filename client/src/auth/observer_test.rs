use std::sync::{Arc, Mutex};

use super::*;
use crate::net::auth_channel::AuthStateChannel;
use crate::net::auth_error::AuthError;
use crate::net::types::User;

/// Backend whose only live part is the auth-state channel.
#[derive(Default)]
struct ChannelBackend {
    channel: AuthStateChannel,
}

impl AuthBackend for ChannelBackend {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<User, AuthError> {
        Err(AuthError::network("unused"))
    }

    async fn create_account(&self, _email: &str, _password: &str) -> Result<User, AuthError> {
        Err(AuthError::network("unused"))
    }

    async fn update_profile(&self, _display_name: &str) -> Result<User, AuthError> {
        Err(AuthError::network("unused"))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }

    fn on_auth_state_changed<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&User>) + Send + Sync + 'static,
    {
        self.channel.subscribe(listener)
    }
}

fn recorder() -> (Arc<Mutex<Vec<SessionState>>>, impl Fn(SessionState) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let seen = seen.clone();
        move |state: SessionState| seen.lock().unwrap().push(state)
    };
    (seen, sink)
}

fn jane() -> User {
    User { uid: "u1".into(), email: "jane@example.com".into(), display_name: None }
}

#[test]
fn nothing_written_before_first_notification() {
    let backend = ChannelBackend::default();
    let (seen, sink) = recorder();
    let _observer = SessionObserver::attach(&backend, sink);

    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn each_notification_resolves_the_mirror() {
    let backend = ChannelBackend::default();
    let (seen, sink) = recorder();
    let _observer = SessionObserver::attach(&backend, sink);

    backend.channel.publish(Some(jane()));
    backend.channel.publish(None);

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec![SessionState::resolved(Some(jane())), SessionState::resolved(None)]);
    assert!(seen.iter().all(|s| !s.loading));
}

#[test]
fn signed_in_user_without_display_name_shows_email_local_part() {
    let backend = ChannelBackend::default();
    let (seen, sink) = recorder();
    let _observer = SessionObserver::attach(&backend, sink);

    backend.channel.publish(Some(jane()));

    let nav = seen.lock().unwrap()[0].nav();
    assert!(!nav.login_visible);
    assert!(nav.user_visible && nav.create_visible);
    assert_eq!(nav.display_name.as_deref(), Some("jane"));
}

#[test]
fn repeated_state_renders_identically() {
    let backend = ChannelBackend::default();
    let (seen, sink) = recorder();
    let _observer = SessionObserver::attach(&backend, sink);

    backend.channel.publish(Some(jane()));
    backend.channel.publish(Some(jane()));

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].nav(), seen[1].nav());
}

#[test]
fn late_attach_replays_current_session() {
    let backend = ChannelBackend::default();
    backend.channel.publish(Some(jane()));

    let (seen, sink) = recorder();
    let _observer = SessionObserver::attach(&backend, sink);

    assert_eq!(*seen.lock().unwrap(), vec![SessionState::resolved(Some(jane()))]);
}

#[test]
fn dropped_observer_stops_receiving() {
    let backend = ChannelBackend::default();
    let (seen, sink) = recorder();
    let observer = SessionObserver::attach(&backend, sink);
    backend.channel.publish(None);

    drop(observer);
    backend.channel.publish(Some(jane()));

    assert_eq!(*seen.lock().unwrap(), vec![SessionState::resolved(None)]);
}

#[test]
fn detach_unregisters_listener() {
    let backend = ChannelBackend::default();
    let (seen, sink) = recorder();
    SessionObserver::attach(&backend, sink).detach();

    backend.channel.publish(Some(jane()));

    assert!(seen.lock().unwrap().is_empty());
}
