use super::{
    repository::AccountsRepository,
    utils::{provisioning_outcome, AccountFormState, AccountKind},
};
use crate::{
    api::{AddUserRequest, ApiClient, ApiError, StatusResponse},
    components::forms::MessageState,
};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::rc::Rc;

pub const PANEL_CLOSE_DELAY_MS: u32 = 2000;

#[derive(Clone, Copy)]
pub struct AccountViewModel {
    pub kind: AccountKind,
    pub form: RwSignal<AccountFormState>,
    pub messages: RwSignal<MessageState>,
    pub panel_open: RwSignal<bool>,
    pub add_action: Action<AddUserRequest, Result<StatusResponse, ApiError>>,
}

impl AccountViewModel {
    pub fn open(&self) {
        self.messages.update(MessageState::clear);
        self.panel_open.set(true);
    }

    pub fn close(&self) {
        self.panel_open.set(false);
    }

    pub fn submit(&self) -> bool {
        if self.add_action.pending().get_untracked() {
            return false;
        }
        match self.form.get_untracked().to_request(self.kind) {
            Ok(request) => {
                self.messages.update(MessageState::clear);
                self.add_action.dispatch(request);
                true
            }
            Err(err) => {
                self.messages.update(|state| state.set_error(err.error));
                false
            }
        }
    }
}

pub fn use_account_view_model(kind: AccountKind) -> AccountViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AccountsRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(AccountFormState::new(kind));
    let messages = create_rw_signal(MessageState::default());
    let panel_open = create_rw_signal(false);

    let add_action = create_action(move |request: &AddUserRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move { repo.add_user(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = add_action.value().get() {
            match provisioning_outcome(kind, &result) {
                Ok(message) => {
                    log::info!("{}", message);
                    messages.update(|state| state.set_success(message));
                    form.update(|state| state.reset(kind));
                    spawn_local(async move {
                        TimeoutFuture::new(PANEL_CLOSE_DELAY_MS).await;
                        panel_open.set(false);
                        messages.update(MessageState::clear);
                    });
                }
                Err(message) => {
                    log::warn!("{}: {}", kind.failure_message(), message);
                    messages.update(|state| state.set_error(message));
                }
            }
        }
    });

    AccountViewModel {
        kind,
        form,
        messages,
        panel_open,
        add_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::session::SessionStore;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invalid_form_sets_error_without_request() {
        let server = MockServer::start();
        with_runtime(|| {
            provide_context(
                ApiClient::new_with_base_url(server.url("/api"))
                    .with_session_store(SessionStore::in_memory()),
            );
            let vm = use_account_view_model(AccountKind::Teacher);
            vm.form.update(|form| {
                form.username = "nimal".into();
                form.password = "pw".into();
            });
            assert!(!vm.submit());
            assert_eq!(
                vm.messages.get().error.as_deref(),
                Some("Please fill in all fields")
            );
        });
        assert!(server.received_requests().is_empty());
    }

    #[tokio::test]
    async fn repository_posts_add_user_with_bearer_token() {
        let server = MockServer::start_async().await;
        let created = server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/add-user")
                .header("authorization", "Bearer test-token");
            then.status(200).json_body(serde_json::json!({
                "message": "User added successfully",
                "userId": "nimal",
                "status": "SUCCESS"
            }));
        });
        let store = SessionStore::in_memory();
        store
            .save(&crate::test_support::helpers::session("superadmin"))
            .unwrap();
        let api = ApiClient::new_with_base_url(server.url("/api")).with_session_store(store);
        let repo = AccountsRepository::new_with_client(Rc::new(api));

        let form = AccountFormState {
            username: "nimal".into(),
            email: "nimal@eng.ruh.ac.lk".into(),
            password: "Secret#1".into(),
            ..AccountFormState::new(AccountKind::Administrator)
        };
        let response = repo
            .add_user(form.to_request(AccountKind::Administrator).unwrap())
            .await
            .unwrap();
        assert!(response.is_success());
        created.assert_hits(1);
    }
}
