//! Login / registration modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs are typed `NodeRef`s read at submit time and handed to the auth
//! controller as a snapshot. Both panels stay mounted so the consent
//! checkbox is always bound; an unbound checkbox surfaces as an integrity
//! error instead of a silent pass.

use leptos::html::Input;
use leptos::prelude::*;

use super::page_view::page_view;
use crate::app::AppAuth;
use crate::auth::validate::{SignInForm, SignUpForm};
use crate::state::auth_form::{AuthFormState, AuthPanel};
use crate::util::browser::current_path;

fn input_value(node: NodeRef<Input>) -> String {
    node.get_untracked().map(|el| el.value()).unwrap_or_default()
}

fn display_when(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[component]
pub fn AuthModal() -> impl IntoView {
    let form = expect_context::<RwSignal<AuthFormState>>();
    let controller = expect_context::<AppAuth>();
    let page = page_view();

    let sign_in_email = NodeRef::<Input>::new();
    let sign_in_password = NodeRef::<Input>::new();
    let sign_up_name = NodeRef::<Input>::new();
    let sign_up_email = NodeRef::<Input>::new();
    let sign_up_password = NodeRef::<Input>::new();
    let consent = NodeRef::<Input>::new();

    // Every reset clears the inputs and unticks consent.
    Effect::new(move || {
        form.with(|f| f.reset_seq);
        for node in [sign_in_email, sign_in_password, sign_up_name, sign_up_email, sign_up_password] {
            if let Some(el) = node.get_untracked() {
                el.set_value("");
            }
        }
        if let Some(el) = consent.get_untracked() {
            el.set_checked(false);
        }
    });

    let on_sign_in = {
        let controller = controller.clone();
        let page = page.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if form.with_untracked(AuthFormState::is_busy) {
                return;
            }
            let snapshot = SignInForm { email: input_value(sign_in_email), password: input_value(sign_in_password) };
            let controller = controller.clone();
            let page = page.clone();
            leptos::task::spawn_local(async move {
                controller.sign_in(&page, snapshot, &current_path()).await;
            });
        }
    };

    let on_sign_up = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(AuthFormState::is_busy) {
            return;
        }
        let snapshot = SignUpForm {
            name: input_value(sign_up_name),
            email: input_value(sign_up_email),
            password: input_value(sign_up_password),
            consent: consent.get_untracked().map(|el| el.checked()),
        };
        let controller = controller.clone();
        let page = page.clone();
        leptos::task::spawn_local(async move {
            controller.sign_up(&page, snapshot, &current_path()).await;
        });
    };

    let on_close = move |_| form.update(AuthFormState::close);
    let show_sign_up = move |_| form.update(|f| f.show_panel(AuthPanel::SignUp));
    let show_sign_in = move |_| form.update(|f| f.show_panel(AuthPanel::SignIn));
    let busy = move || form.with(AuthFormState::is_busy);

    view! {
        <div class="modal" style:display=move || display_when(form.with(|f| f.open)) tabindex="-1">
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">
                            {move || match form.with(|f| f.panel) {
                                AuthPanel::SignIn => "Sign In",
                                AuthPanel::SignUp => "Create Account",
                            }}
                        </h5>
                        <button type="button" class="btn-close" aria-label="Close" on:click=on_close></button>
                    </div>
                    <div class="modal-body">
                        <div
                            class="alert alert-danger"
                            style:display=move || display_when(form.with(|f| f.error.is_some()))
                        >
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </div>

                        <form
                            style:display=move || display_when(form.with(|f| f.panel == AuthPanel::SignIn))
                            on:submit=on_sign_in
                        >
                            <input node_ref=sign_in_email type="email" class="form-control" placeholder="Email"/>
                            <input
                                node_ref=sign_in_password
                                type="password"
                                class="form-control"
                                placeholder="Password"
                            />
                            <button type="submit" class="btn btn-primary w-100" disabled=busy>
                                {move || form.with(|f| f.button_label(AuthPanel::SignIn))}
                            </button>
                            <p class="auth-toggle">
                                "Don't have an account? "
                                <a href="#" on:click=move |ev| {
                                    ev.prevent_default();
                                    show_sign_up(ev);
                                }>"Sign up"</a>
                            </p>
                        </form>

                        <form
                            style:display=move || display_when(form.with(|f| f.panel == AuthPanel::SignUp))
                            on:submit=on_sign_up
                        >
                            <input node_ref=sign_up_name type="text" class="form-control" placeholder="Display name"/>
                            <input node_ref=sign_up_email type="email" class="form-control" placeholder="Email"/>
                            <input
                                node_ref=sign_up_password
                                type="password"
                                class="form-control"
                                placeholder="Password (min. 6 characters)"
                            />
                            <label class="form-check">
                                <input node_ref=consent type="checkbox" class="form-check-input"/>
                                " I agree to the "
                                <a href="/privacy.html" target="_blank">"Privacy Policy"</a>
                            </label>
                            <button type="submit" class="btn btn-primary w-100" disabled=busy>
                                {move || form.with(|f| f.button_label(AuthPanel::SignUp))}
                            </button>
                            <p class="auth-toggle">
                                "Already have an account? "
                                <a href="#" on:click=move |ev| {
                                    ev.prevent_default();
                                    show_sign_in(ev);
                                }>"Sign in"</a>
                            </p>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
