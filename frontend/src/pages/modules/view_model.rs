use super::{
    repository::ModulesRepository,
    utils::{lo_number, validate_description, validate_module, validate_outcome},
};
use crate::{
    api::{ApiClient, ApiError, LearningOutcome, LearningOutcomePayload, Module, ModulePayload},
    router,
    state::{
        auth::{use_auth, use_session_store},
        session::{Role, SessionStore},
    },
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ModulesViewModel {
    pub role: Memo<Option<Role>>,
    pub modules_reload: RwSignal<u32>,
    pub modules_resource: Resource<u32, Result<Vec<Module>, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub editing: RwSignal<Option<Module>>,
    pub edit_name: RwSignal<String>,
    pub pending_delete: RwSignal<Option<Module>>,
    pub update_action: Action<ModulePayload, Result<Module, ApiError>>,
    pub delete_action: Action<String, Result<String, ApiError>>,
    pub open_module: RwSignal<Option<Module>>,
    pub outcomes_reload: RwSignal<u32>,
    pub outcomes_resource:
        Resource<(Option<String>, u32), Result<Vec<LearningOutcome>, ApiError>>,
    pub outcome_error: RwSignal<Option<ApiError>>,
    pub pending_outcome_delete: RwSignal<Option<LearningOutcome>>,
    pub create_outcome_action:
        Action<(String, LearningOutcomePayload), Result<LearningOutcome, ApiError>>,
    pub update_outcome_action: Action<(String, String), Result<LearningOutcome, ApiError>>,
    pub delete_outcome_action: Action<String, Result<(), ApiError>>,
    store: StoredValue<SessionStore>,
}

fn bump(signal: RwSignal<u32>) {
    signal.update(|value| *value = value.wrapping_add(1));
}

/// Re-fetches the open module's outcomes after a successful change; a failure
/// leaves the list and the forms as they are.
fn settle_outcome_change(
    result: Result<(), ApiError>,
    error: RwSignal<Option<ApiError>>,
    reload: RwSignal<u32>,
) {
    match result {
        Ok(()) => {
            error.set(None);
            bump(reload);
        }
        Err(err) => {
            log::warn!("Learning outcome change failed: {}", err);
            error.set(Some(err));
        }
    }
}

impl ModulesViewModel {
    pub fn can_manage_modules(&self) -> bool {
        self.role.get().map(Role::can_manage_modules).unwrap_or(false)
    }

    pub fn can_manage_outcomes(&self) -> bool {
        self.role.get().map(Role::can_manage_outcomes).unwrap_or(false)
    }

    pub fn start_edit(&self, module: Module) {
        self.error.set(None);
        self.edit_name.set(module.module_name.clone());
        self.editing.set(Some(module));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
    }

    pub fn save_edit(&self) -> bool {
        let Some(module) = self.editing.get_untracked() else {
            return false;
        };
        match validate_module(&module.module_id, &self.edit_name.get_untracked()) {
            Ok(payload) => {
                self.update_action.dispatch(payload);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }

    pub fn request_delete(&self, module: Module) {
        self.pending_delete.set(Some(module));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(module) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(module.module_id);
        }
        self.pending_delete.set(None);
    }

    pub fn open(&self, module: Module) {
        self.outcome_error.set(None);
        self.open_module.set(Some(module));
    }

    pub fn close(&self) {
        self.open_module.set(None);
    }

    pub fn create_outcome(&self, payload: LearningOutcomePayload) -> bool {
        let Some(module) = self.open_module.get_untracked() else {
            return false;
        };
        match validate_outcome(&payload) {
            Ok(payload) => {
                self.outcome_error.set(None);
                self.create_outcome_action
                    .dispatch((module.module_id, payload));
                true
            }
            Err(err) => {
                self.outcome_error.set(Some(err));
                false
            }
        }
    }

    pub fn update_outcome(&self, lo_id: String, description: String) -> bool {
        match validate_description(&description) {
            Ok(description) => {
                self.outcome_error.set(None);
                self.update_outcome_action.dispatch((lo_id, description));
                true
            }
            Err(err) => {
                self.outcome_error.set(Some(err));
                false
            }
        }
    }

    pub fn request_outcome_delete(&self, outcome: LearningOutcome) {
        self.pending_outcome_delete.set(Some(outcome));
    }

    pub fn cancel_outcome_delete(&self) {
        self.pending_outcome_delete.set(None);
    }

    pub fn confirm_outcome_delete(&self) {
        if let Some(outcome) = self.pending_outcome_delete.get_untracked() {
            self.delete_outcome_action.dispatch(outcome.id);
        }
        self.pending_outcome_delete.set(None);
    }

    /// Remembers the LO number for the upload form and opens the LO page.
    pub fn select_outcome(&self, outcome: LearningOutcome) {
        self.store
            .with_value(|store| store.set_current_lo_number(&lo_number(&outcome.id, &outcome.lo_id)));
        navigation::navigate_to(&router::lo_detail_path(&outcome.id));
    }
}

pub fn use_modules_view_model() -> ModulesViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ModulesRepository::new_with_client(Rc::new(api));
    let store = store_value(use_session_store());

    let role = create_memo(move |_| auth.with(|state| state.session.as_ref().and_then(|s| s.role())));
    let modules_reload = create_rw_signal(0u32);
    let error = create_rw_signal(None::<ApiError>);
    let editing = create_rw_signal(None::<Module>);
    let edit_name = create_rw_signal(String::new());
    let pending_delete = create_rw_signal(None::<Module>);
    let open_module = create_rw_signal(None::<Module>);
    let outcomes_reload = create_rw_signal(0u32);
    let outcome_error = create_rw_signal(None::<ApiError>);
    let pending_outcome_delete = create_rw_signal(None::<LearningOutcome>);

    let repo_for_modules = repository.clone();
    let modules_resource = create_resource(
        move || modules_reload.get(),
        move |_| {
            let repo = repo_for_modules.clone();
            async move { repo.fetch_modules().await }
        },
    );

    let repo_for_outcomes = repository.clone();
    let outcomes_resource = create_resource(
        move || {
            (
                open_module.with(|module| module.as_ref().map(|m| m.module_id.clone())),
                outcomes_reload.get(),
            )
        },
        move |(module_id, _)| {
            let repo = repo_for_outcomes.clone();
            async move {
                match module_id {
                    Some(module_id) => repo.fetch_outcomes(module_id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let repo_for_update = repository.clone();
    let update_action = create_action(move |payload: &ModulePayload| {
        let repo = repo_for_update.clone();
        let payload = payload.clone();
        async move { repo.update_module(payload).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |module_id: &String| {
        let repo = repo_for_delete.clone();
        let module_id = module_id.clone();
        async move { repo.delete_module(module_id).await }
    });

    let repo_for_create_outcome = repository.clone();
    let create_outcome_action =
        create_action(move |(module_id, payload): &(String, LearningOutcomePayload)| {
            let repo = repo_for_create_outcome.clone();
            let module_id = module_id.clone();
            let payload = payload.clone();
            async move { repo.create_outcome(module_id, payload).await }
        });

    let repo_for_update_outcome = repository.clone();
    let update_outcome_action = create_action(move |(lo_id, description): &(String, String)| {
        let repo = repo_for_update_outcome.clone();
        let lo_id = lo_id.clone();
        let description = description.clone();
        async move { repo.update_outcome(lo_id, description).await }
    });

    let repo_for_delete_outcome = repository;
    let delete_outcome_action = create_action(move |lo_id: &String| {
        let repo = repo_for_delete_outcome.clone();
        let lo_id = lo_id.clone();
        async move { repo.delete_outcome(lo_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    editing.set(None);
                    bump(modules_reload);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(message) => {
                    log::info!("{}", message);
                    error.set(None);
                    bump(modules_reload);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = create_outcome_action.value().get() {
            settle_outcome_change(result.map(|_| ()), outcome_error, outcomes_reload);
        }
    });

    create_effect(move |_| {
        if let Some(result) = update_outcome_action.value().get() {
            settle_outcome_change(result.map(|_| ()), outcome_error, outcomes_reload);
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_outcome_action.value().get() {
            settle_outcome_change(result, outcome_error, outcomes_reload);
        }
    });

    ModulesViewModel {
        role,
        modules_reload,
        modules_resource,
        error,
        editing,
        edit_name,
        pending_delete,
        update_action,
        delete_action,
        open_module,
        outcomes_reload,
        outcomes_resource,
        outcome_error,
        pending_outcome_delete,
        create_outcome_action,
        update_outcome_action,
        delete_outcome_action,
        store,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::{module, outcome, provide_session, session};
    use crate::test_support::ssr::with_runtime;

    fn client(server: &MockServer) -> ApiClient {
        let store = SessionStore::in_memory();
        store.save(&session("admin")).unwrap();
        ApiClient::new_with_base_url(server.url("/api")).with_session_store(store)
    }

    #[test]
    fn rejected_rename_keeps_dialog_open_without_request() {
        let server = MockServer::start();
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_session(Some("admin"));
            provide_context(client(&server));
            let vm = use_modules_view_model();
            assert!(vm.can_manage_modules());
            assert!(!vm.can_manage_outcomes());

            vm.start_edit(module("SE101", "Software Engineering"));
            vm.edit_name.set("   ".into());
            assert!(!vm.save_edit());
            assert!(vm.editing.get().is_some());
            assert_eq!(
                vm.error.get().map(|e| e.error).as_deref(),
                Some("Module name is required")
            );
        });
        assert!(server.received_requests().is_empty());
    }

    #[test]
    fn blank_outcome_is_rejected_before_request() {
        let server = MockServer::start();
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_session(Some("lecture"));
            provide_context(client(&server));
            let vm = use_modules_view_model();
            assert!(vm.can_manage_outcomes());

            vm.open(module("SE101", "Software Engineering"));
            let accepted = vm.create_outcome(LearningOutcomePayload {
                lo_id: "LO4".into(),
                lo_description: " ".into(),
            });
            assert!(!accepted);
            assert!(!vm.update_outcome("SE101_LO1".into(), String::new()));
            assert_eq!(
                vm.outcome_error.get().map(|e| e.code).as_deref(),
                Some("VALIDATION_ERROR")
            );
        });
        assert!(server.received_requests().is_empty());
    }

    #[test]
    fn cancelling_delete_clears_pending_target() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_session(Some("superadmin"));
            let vm = use_modules_view_model();
            vm.request_delete(module("SE101", "Software Engineering"));
            assert!(vm.pending_delete.get().is_some());
            vm.cancel_delete();
            assert!(vm.pending_delete.get().is_none());

            vm.request_outcome_delete(outcome("SE101_LO1", "LO1", "Apply design patterns"));
            vm.cancel_outcome_delete();
            assert!(vm.pending_outcome_delete.get().is_none());
        });
    }

    #[tokio::test]
    async fn repository_uses_module_and_outcome_endpoints() {
        let server = MockServer::start_async().await;
        let updated = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/modules/SE101")
                .header("authorization", "Bearer test-token");
            then.status(200).json_body(serde_json::json!({
                "moduleId": "SE101",
                "moduleName": "Software Design"
            }));
        });
        let deleted = server.mock(|when, then| {
            when.method(DELETE).path("/api/modules/SE101");
            then.status(200).body("Module deleted successfully");
        });
        let listed = server.mock(|when, then| {
            when.method(GET).path("/api/lospos/module/SE101");
            then.status(200).json_body(serde_json::json!([
                {"id": "SE101_LO1", "loId": "LO1", "loDescription": "Apply design patterns"}
            ]));
        });
        let repo = ModulesRepository::new_with_client(Rc::new(client(&server)));

        let module = repo
            .update_module(ModulePayload {
                module_id: "SE101".into(),
                module_name: "Software Design".into(),
            })
            .await
            .unwrap();
        assert_eq!(module.module_name, "Software Design");
        assert_eq!(
            repo.delete_module("SE101".into()).await.unwrap(),
            "Module deleted successfully"
        );
        let outcomes = repo.fetch_outcomes("SE101".into()).await.unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].lo_id, "LO1");

        updated.assert_hits(1);
        deleted.assert_hits(1);
        listed.assert_hits(1);
    }
}
