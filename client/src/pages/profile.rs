//! Profile page for the signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notification_stack::show_notification;
use crate::net::types::User;
use crate::state::notifications::{NotificationState, Severity};
use crate::state::session::SessionState;
use crate::util::auth::require_auth;
use crate::util::browser::{COPIED_MESSAGE, COPY_FAILED_MESSAGE, copy_to_clipboard};

/// Label/value rows shown for `user`. Rebuilt whole on every session change
/// so a display name set after sign-up replaces the email fallback.
pub fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Name", user.display_label()),
        ("Email", user.email.clone()),
        ("User ID", user.uid.clone()),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    require_auth(session, use_navigate());

    let rows = move || session.with(|s| s.user.as_ref().map(profile_rows).unwrap_or_default());

    let on_copy_id = move |_| {
        let Some(uid) = session.with_untracked(|s| s.user.as_ref().map(|u| u.uid.clone())) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match copy_to_clipboard(&uid).await {
                Ok(()) => show_notification(notifications, COPIED_MESSAGE, Severity::Success),
                Err(e) => {
                    log::error!("clipboard write failed: {e}");
                    show_notification(notifications, COPY_FAILED_MESSAGE, Severity::Error);
                }
            }
        });
    };

    view! {
        <section class="profile">
            <h2>"Your Profile"</h2>
            <dl>
                {move || {
                    rows()
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        })
                        .collect_view()
                }}
            </dl>
            <button class="btn btn-outline-secondary" on:click=on_copy_id>"Copy user ID"</button>
        </section>
    }
}
