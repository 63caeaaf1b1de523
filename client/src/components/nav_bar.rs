//! Top navigation with auth-dependent entries.

use leptos::prelude::*;
use leptos_router::components::A;

use super::page_view::page_view;
use crate::app::AppAuth;
use crate::state::auth_form::{AuthFormState, AuthPanel};
use crate::state::session::SessionState;
use crate::util::browser::current_path;
use crate::util::device::is_mobile_device;

fn display_when(visible: bool) -> &'static str {
    if visible { "" } else { "none" }
}

/// Brand, page links, and the login entry or signed-in user menu. Entry
/// visibility comes from `SessionState::nav`, so it always reflects the
/// latest auth-state notification.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = expect_context::<RwSignal<AuthFormState>>();
    let controller = expect_context::<AppAuth>();
    let page = page_view();

    let nav = Memo::new(move |_| session.with(SessionState::nav));
    let compact = is_mobile_device();
    let menu_open = RwSignal::new(false);

    let on_login = move |_| form.update(|f| f.open_with(AuthPanel::SignIn));
    let on_sign_out = move |_| {
        menu_open.set(false);
        let controller = controller.clone();
        let page = page.clone();
        leptos::task::spawn_local(async move {
            let _ = controller.sign_out(&page, &current_path()).await;
        });
    };

    view! {
        <nav class="navbar navbar-expand-lg" class:navbar--compact=compact>
            <A href="/" attr:class="navbar-brand">"MINDORA.ART"</A>
            <ul class="navbar-nav">
                <li class="nav-item">
                    <A href="/" attr:class="nav-link">"Home"</A>
                </li>
                <li class="nav-item" style:display=move || display_when(nav.with(|n| n.create_visible))>
                    <A href="/create" attr:class="nav-link">"Create"</A>
                </li>
                <li class="nav-item" style:display=move || display_when(nav.with(|n| n.login_visible))>
                    <button class="btn btn-outline-primary" on:click=on_login>"Login"</button>
                </li>
                <li class="nav-item dropdown" style:display=move || display_when(nav.with(|n| n.user_visible))>
                    <button class="nav-link dropdown-toggle" on:click=move |_| menu_open.update(|o| *o = !*o)>
                        {move || nav.with(|n| n.display_name.clone().unwrap_or_default())}
                    </button>
                    <ul class="dropdown-menu" class:show=move || menu_open.get()>
                        <li>
                            <A href="/profile" attr:class="dropdown-item">"Profile"</A>
                        </li>
                        <li>
                            <button class="dropdown-item" on:click=on_sign_out>"Sign Out"</button>
                        </li>
                    </ul>
                </li>
            </ul>
        </nav>
    }
}
