//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::controller::AuthController;
use crate::auth::observer::SessionObserver;
use crate::components::{
    auth_modal::AuthModal, nav_bar::NavBar, notification_stack::NotificationStack,
    notification_stack::show_notification,
};
use crate::config::FirebaseConfig;
use crate::net::firebase::FirebaseAuth;
use crate::pages::{create::CreatePage, home::HomePage, profile::ProfilePage};
use crate::state::auth_form::AuthFormState;
use crate::state::notifications::NotificationState;
use crate::state::redirect::{RedirectCoordinator, SessionIntentStore};
use crate::state::session::SessionState;
use crate::util::connection::{current_status, startup_notice, watch_connection};

/// Auth controller shared through context.
pub type AppAuth = Arc<AuthController<FirebaseAuth, SessionIntentStore>>;

/// Root application component.
///
/// Provides all shared state contexts, attaches the session observer, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let notifications = RwSignal::new(NotificationState::default());
    let auth_form = RwSignal::new(AuthFormState::default());

    provide_context(session);
    provide_context(notifications);
    provide_context(auth_form);

    let backend = FirebaseAuth::new(FirebaseConfig::from_build_env());
    let observer = SessionObserver::attach(&backend, move |state| {
        session.try_set(state);
    });
    on_cleanup(move || observer.detach());

    #[cfg(feature = "csr")]
    {
        let backend = backend.clone();
        leptos::task::spawn_local(async move { backend.restore().await });
    }

    let controller: AppAuth = Arc::new(AuthController::new(backend, RedirectCoordinator::new(SessionIntentStore)));
    provide_context(controller);

    if let Some((message, severity)) = startup_notice(current_status()) {
        show_notification(notifications, message, severity);
    }
    watch_connection(move |status| {
        let (message, severity) = status.notice();
        show_notification(notifications, message, severity);
    });

    view! {
        <Title text="MINDORA.ART"/>

        <Router>
            <NavBar/>
            <NotificationStack/>
            <AuthModal/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("index.html") view=HomePage/>
                    <Route path=StaticSegment("create") view=CreatePage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
