use super::utils::{login_failure, validate_login};
use crate::{
    api::{ApiError, LoginRequest},
    state::{auth, session::{Role, Session}},
    utils::navigation,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub role: RwSignal<Option<Role>>,
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<Session, ApiError>>,
}

impl LoginViewModel {
    /// Validates the form and dispatches the login. Returns whether a request
    /// was sent.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        match validate_login(
            self.role.get_untracked(),
            &self.username.get_untracked(),
            &self.password.get_untracked(),
        ) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let role = create_rw_signal(None::<Role>);
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(session) => {
                    error.set(None);
                    password.set(String::new());
                    navigation::navigate_to(session.dashboard_path());
                }
                Err(err) => {
                    log::warn!("login failed: {}", err);
                    error.set(Some(login_failure(err)));
                }
            }
        }
    });

    LoginViewModel {
        role,
        username,
        password,
        error,
        login_action,
    }
}
