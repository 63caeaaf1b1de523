//! `AuthView` implementation over the app's reactive state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components hand a `PageView` to the auth controller. Banner, loading, and
//! modal changes land in the `AuthFormState` signal; notifications go to the
//! stack; navigation goes through the router.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::notification_stack::show_notification;
use crate::auth::controller::AuthView;
use crate::state::auth_form::AuthFormState;
use crate::state::notifications::{NotificationState, Severity};

#[derive(Clone)]
pub struct PageView<N> {
    form: RwSignal<AuthFormState>,
    notifications: RwSignal<NotificationState>,
    navigate: N,
}

impl<N> PageView<N>
where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(form: RwSignal<AuthFormState>, notifications: RwSignal<NotificationState>, navigate: N) -> Self {
        Self { form, notifications, navigate }
    }
}

/// Build from the signals in context; must run under the router.
pub fn page_view() -> PageView<impl Fn(&str, NavigateOptions) + Clone + 'static> {
    PageView::new(
        expect_context::<RwSignal<AuthFormState>>(),
        expect_context::<RwSignal<NotificationState>>(),
        leptos_router::hooks::use_navigate(),
    )
}

impl<N> AuthView for PageView<N>
where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn show_error(&self, message: &str) {
        self.form.try_update(|f| f.error = Some(message.to_owned()));
    }

    fn begin_loading(&self, message: &str) {
        self.form.try_update(|f| f.begin_loading(message));
    }

    fn end_loading(&self) {
        self.form.try_update(AuthFormState::end_loading);
    }

    fn close_modal(&self) {
        self.form.try_update(AuthFormState::close);
    }

    fn notify(&self, message: &str, severity: Severity) {
        show_notification(self.notifications, message, severity);
    }

    fn navigate(&self, path: &str, delay_ms: u32) {
        if delay_ms == 0 {
            (self.navigate)(path, NavigateOptions::default());
            return;
        }
        #[cfg(feature = "csr")]
        {
            let navigate = self.navigate.clone();
            let path = path.to_owned();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
                navigate(&path, NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            (self.navigate)(path, NavigateOptions::default());
        }
    }
}
