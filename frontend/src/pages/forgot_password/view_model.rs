use crate::{api::ApiError, config::contact};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
}

/// There is no reset endpoint; a valid request is answered with directions
/// to the faculty office.
pub fn reset_notice(username: &str, email: &str) -> Result<String, ApiError> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() && email.is_empty() {
        return Err(ApiError::validation("Please enter your username or email"));
    }
    if !email.is_empty() && !email.contains('@') {
        return Err(ApiError::validation("Please enter a valid email address"));
    }
    let who = if username.is_empty() { email } else { username };
    Ok(format!(
        "Password resets for {} are handled by the faculty office. Contact {} with your staff details.",
        who,
        contact::EMAIL
    ))
}

impl ForgotPasswordViewModel {
    pub fn submit(&self) {
        match reset_notice(&self.username.get_untracked(), &self.email.get_untracked()) {
            Ok(notice) => {
                self.error.set(None);
                self.notice.set(Some(notice));
            }
            Err(err) => {
                self.notice.set(None);
                self.error.set(Some(err));
            }
        }
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    ForgotPasswordViewModel {
        username: create_rw_signal(String::new()),
        email: create_rw_signal(String::new()),
        error: create_rw_signal(None),
        notice: create_rw_signal(None),
    }
}
