//! Landing page: hero call-to-action and per-category work counts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/` and `/index.html`, the two paths on which a pending
//! redirect intention is consumed after login.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::app::AppAuth;
use crate::components::notification_stack::show_notification;
use crate::components::page_view::page_view;
use crate::config::FirebaseConfig;
use crate::net::firestore::{CATEGORIES, FirestoreError, count_works};
use crate::net::service_errors::{firestore_error_message, network_error_message};
use crate::state::auth_form::{AuthFormState, AuthPanel};
use crate::state::notifications::{NotificationState, Severity};
use crate::state::session::SessionState;
use crate::util::browser::scroll_to_element;
use crate::util::format::works_label;

/// Category card label; blank until the count arrives.
pub fn count_label(count: Option<u64>) -> String {
    count.map(works_label).unwrap_or_default()
}

/// DOM id of a category's count element, e.g. `artCount`.
pub fn count_element_id(category: &str) -> String {
    format!("{}Count", category.to_lowercase())
}

/// Query each category in turn. Failures are logged per category; the first
/// transport failure is also surfaced once as a notification.
async fn load_category_counts(
    config: FirebaseConfig,
    counts: RwSignal<Vec<(&'static str, Option<u64>)>>,
    notifications: RwSignal<NotificationState>,
) {
    let mut warned = false;
    for (idx, category) in CATEGORIES.iter().enumerate() {
        match count_works(&config, category).await {
            Ok(count) => {
                counts.try_update(|c| c[idx].1 = Some(count));
            }
            Err(e) => {
                log::error!("{} ({e})", firestore_error_message(e.code(), &format!("loading {category} count")));
                if !warned && matches!(e, FirestoreError::Network(_)) {
                    warned = true;
                    show_notification(notifications, network_error_message(e.code()), Severity::Error);
                }
            }
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let form = expect_context::<RwSignal<AuthFormState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let controller = expect_context::<AppAuth>();
    let page = page_view();

    let counts = RwSignal::new(CATEGORIES.iter().map(|c| (*c, None)).collect::<Vec<_>>());

    #[cfg(feature = "csr")]
    {
        let config = controller.backend().config().clone();
        leptos::task::spawn_local(load_category_counts(config, counts, notifications));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (load_category_counts, notifications);
    }

    let on_get_started = move |_| {
        if session.with_untracked(|s| controller.get_started(s, &page)) {
            form.update(|f| f.open_with(AuthPanel::SignIn));
        }
    };
    let on_explore = move |_| {
        scroll_to_element("categories");
    };

    view! {
        <section class="hero">
            <h1>"MINDORA.ART"</h1>
            <p class="lead">"Share your art, science, literature, and audio with the world."</p>
            <div class="hero-actions">
                <button class="btn btn-primary btn-lg" on:click=on_get_started>"Get Started"</button>
                <button class="btn btn-outline-light btn-lg" on:click=on_explore>"Explore"</button>
            </div>
        </section>

        <section id="categories" class="categories">
            <For
                each=move || counts.get()
                key=|(category, count)| (*category, *count)
                children=move |(category, count)| {
                    view! {
                        <div class="category-card">
                            <h3>{category}</h3>
                            <span id=count_element_id(category) class="category-count">{count_label(count)}</span>
                        </div>
                    }
                }
            />
        </section>
    }
}
