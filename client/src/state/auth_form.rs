//! Auth modal state: active panel, error banner, and submit-button loading.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

pub const SIGN_IN_LABEL: &str = "Sign In";
pub const CREATE_ACCOUNT_LABEL: &str = "Create Account";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPanel {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub open: bool,
    pub panel: AuthPanel,
    pub error: Option<String>,
    /// Spinner text while a request is in flight; `None` when idle.
    pub loading: Option<String>,
    /// Bumped on every reset so the view can clear its inputs.
    pub reset_seq: u64,
}

impl AuthFormState {
    pub fn show_panel(&mut self, panel: AuthPanel) {
        self.panel = panel;
        self.error = None;
    }

    pub fn begin_loading(&mut self, message: &str) {
        self.loading = Some(message.to_owned());
    }

    pub fn end_loading(&mut self) {
        self.loading = None;
    }

    pub fn is_busy(&self) -> bool {
        self.loading.is_some()
    }

    /// Both submit buttons share the loading state, as one request at a time
    /// may be in flight from the modal.
    pub fn button_label(&self, panel: AuthPanel) -> String {
        match (&self.loading, panel) {
            (Some(message), _) => message.clone(),
            (None, AuthPanel::SignIn) => SIGN_IN_LABEL.to_owned(),
            (None, AuthPanel::SignUp) => CREATE_ACCOUNT_LABEL.to_owned(),
        }
    }

    pub fn open_with(&mut self, panel: AuthPanel) {
        self.open = true;
        self.show_panel(panel);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.reset();
    }

    /// Closing the modal: back to the sign-in panel with clean inputs.
    pub fn reset(&mut self) {
        self.panel = AuthPanel::SignIn;
        self.error = None;
        self.loading = None;
        self.reset_seq += 1;
    }
}
