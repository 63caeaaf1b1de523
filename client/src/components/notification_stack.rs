//! Stacked, dismissible notification banners.
//!
//! Each banner closes on its button or after `AUTO_DISMISS_MS`, whichever
//! comes first.

use leptos::prelude::*;

use crate::state::notifications::{AUTO_DISMISS_MS, NotificationState, Severity};

/// Push a notification and schedule its expiry.
pub fn show_notification(notifications: RwSignal<NotificationState>, message: &str, severity: Severity) {
    let id = notifications.try_update(|n| n.push(message, severity));
    #[cfg(feature = "csr")]
    {
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(AUTO_DISMISS_MS))).await;
                notifications.try_update(|n| n.expire(id));
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, AUTO_DISMISS_MS);
    }
}

#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="notification-stack">
            <For
                each=move || notifications.get().items
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let class = format!("alert alert-{} alert-dismissible", n.severity.alert_class());
                    view! {
                        <div class=class role="alert">
                            <span>{n.message}</span>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| {
                                    notifications.update(|s| {
                                        s.dismiss(id);
                                    });
                                }
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
