use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    pages::login::repository::LoginRepository,
    router,
    state::session::{Session, SessionStore},
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = use_session_store();
    let ctx = create_signal(AuthState {
        session: store.load(),
    });
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>()
        .or_else(|| use_context::<ApiClient>().map(|api| api.session_store().clone()))
        .unwrap_or_else(SessionStore::platform_default)
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    store: &SessionStore,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, ApiError> {
    let response = repo.login(&request).await?;
    let username = if response.user_id.trim().is_empty() {
        request.user_id
    } else {
        response.user_id
    };
    let session = Session {
        username,
        user_type: response.user_type,
        token: response.token,
        email: response.email.filter(|email| !email.trim().is_empty()),
    };
    store.save(&session).map_err(ApiError::unknown)?;
    set_auth_state.update(|state| state.session = Some(session.clone()));
    Ok(session)
}

pub fn logout(store: &SessionStore, set_auth_state: WriteSignal<AuthState>) {
    store.clear();
    set_auth_state.set(AuthState::default());
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let store = api.session_store().clone();
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        let store = store.clone();
        async move { login_request(payload, &repo, &store, set_auth).await }
    })
}

/// Clears the session and returns to the landing page.
pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let store = use_session_store();
    Callback::new(move |_| {
        logout(&store, set_auth);
        navigation::navigate_to(router::HOME);
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[component]
    fn SessionProbe() -> impl IntoView {
        let (auth, _) = use_auth();
        move || {
            auth.get()
                .session
                .map(|session| session.username)
                .unwrap_or_else(|| "anonymous".to_string())
        }
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated());
            assert!(snapshot.session.is_none());
        });
    }

    #[test]
    fn auth_provider_restores_persisted_session() {
        let html = render_to_string(|| {
            let store = SessionStore::in_memory();
            store
                .save(&Session {
                    username: "nimal".into(),
                    user_type: "admin".into(),
                    token: "t".into(),
                    email: None,
                })
                .unwrap();
            provide_context(store);
            view! { <AuthProvider><SessionProbe /></AuthProvider> }
        });
        assert!(html.contains("nimal"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn request(user: &str) -> LoginRequest {
        LoginRequest {
            user_id: user.into(),
            password: "secret".into(),
            usertype: "Admin".into(),
        }
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state_and_store() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({
                "message": "Login successful",
                "userId": "nimal",
                "email": "nimal@eng.ruh.ac.lk",
                "userType": "admin",
                "token": "jwt-1",
                "status": "SUCCESS"
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let store = SessionStore::in_memory();
        let api = ApiClient::new_with_base_url(server.url("/api")).with_session_store(store.clone());
        let repo = LoginRepository::new_with_client(Rc::new(api));

        let session = login_request(request("nimal"), &repo, &store, set_state)
            .await
            .unwrap();
        assert_eq!(session.dashboard_path(), "/admin-dashboard");
        assert_eq!(store.token().as_deref(), Some("jwt-1"));
        assert!(state.get().is_authenticated());

        logout(&store, set_state);
        assert!(!state.get().is_authenticated());
        assert!(store.load().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_keeps_store_empty() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401)
                .json_body(json!({ "message": "Invalid credentials", "status": "ERROR" }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let store = SessionStore::in_memory();
        let api = ApiClient::new_with_base_url(server.url("/api")).with_session_store(store.clone());
        let repo = LoginRepository::new_with_client(Rc::new(api));

        let err = login_request(request("nimal"), &repo, &store, set_state)
            .await
            .unwrap_err();
        assert_eq!(err.error, "Invalid credentials");
        assert_eq!(err.code, "UNAUTHORIZED");
        assert!(store.load().is_none());
        assert!(!state.get().is_authenticated());
        runtime.dispose();
    }
}
