use super::utils::{
    failure_message, import_outcome, resolve_assignment, AssignmentChoice, UploadForm,
    UploadRequest, REDIRECT_DELAY_MS,
};
use crate::{
    api::{ApiClient, ApiError, ImportResponse, LearningOutcome, MarksUpload},
    components::forms::MessageState,
    pages::{lo_detail::repository::OutcomeRepository, modules::utils::lo_number as short_lo_number},
    state::auth::use_session_store,
    utils::{
        files::{accept_file, SelectedFile},
        navigation,
    },
};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::rc::Rc;

/// Creates the batch/year assignment when the LO has none, records it on
/// `outcome`, then imports the mark sheet into it.
pub async fn upload_results(
    repository: &OutcomeRepository,
    outcome: &mut LearningOutcome,
    lo_number: &str,
    request: UploadRequest,
) -> Result<ImportResponse, ApiError> {
    let choice = resolve_assignment(
        &outcome.assignments,
        &outcome.id,
        lo_number,
        &request.batch,
        &request.academic_year,
    );
    let assignment_id = match choice {
        AssignmentChoice::Existing(id) => id,
        AssignmentChoice::Create(new) => {
            log::info!("Creating assignment {} for {}", new.assignment_id, outcome.id);
            let created = repository.create_assignment(&outcome.id, &new).await?;
            let assignment = new.into_assignment(created);
            let id = assignment.assignment_id.clone();
            outcome.record_assignment(assignment);
            id
        }
    };

    let bytes = request.file.read_bytes().await.map_err(ApiError::unknown)?;
    repository
        .import_marks(
            &assignment_id,
            MarksUpload {
                file_name: request.file.name.clone(),
                bytes,
                batch: request.batch,
                lo_number: lo_number.to_string(),
                academic_year: request.academic_year,
            },
        )
        .await
}

#[derive(Clone, Copy)]
pub struct AddResultsViewModel {
    pub lo_id: Signal<String>,
    pub lo_number: Signal<String>,
    pub outcome: RwSignal<Option<LearningOutcome>>,
    pub form: RwSignal<UploadForm>,
    pub messages: RwSignal<MessageState>,
    pub drag_active: RwSignal<bool>,
    pub upload_action: Action<UploadRequest, Result<ImportResponse, ApiError>>,
}

impl AddResultsViewModel {
    /// Same gate for the picker and the drop zone; a rejected file leaves the
    /// current selection alone.
    pub fn select_file(&self, file: Option<SelectedFile>) {
        let Some(file) = file else {
            return;
        };
        match accept_file(file) {
            Ok(file) => {
                self.messages.update(MessageState::clear);
                self.form.update(|form| form.file = Some(file));
            }
            Err(message) => self.messages.update(|state| state.set_error(message)),
        }
    }

    pub fn clear_file(&self) {
        self.form.update(|form| form.file = None);
    }

    pub fn can_submit(&self) -> bool {
        !self.upload_action.pending().get() && self.form.with(UploadForm::is_complete)
    }

    pub fn submit(&self) -> bool {
        if self.upload_action.pending().get_untracked() {
            return false;
        }
        match self.form.with_untracked(UploadForm::validate) {
            Ok(request) => {
                self.messages.update(MessageState::clear);
                self.upload_action.dispatch(request);
                true
            }
            Err(err) => {
                self.messages.update(|state| state.set_error(err.error));
                false
            }
        }
    }
}

pub fn use_add_results_view_model(lo_id: Signal<String>) -> AddResultsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = OutcomeRepository::new_with_client(Rc::new(api));
    let store = use_session_store();

    let outcome = create_rw_signal(None::<LearningOutcome>);
    let form = create_rw_signal(UploadForm::default());
    let messages = create_rw_signal(MessageState::default());
    let drag_active = create_rw_signal(false);

    let remembered = store.current_lo_number();
    let lo_number = Signal::derive(move || {
        remembered.clone().unwrap_or_else(|| {
            let id = lo_id.get();
            let short = outcome.with(|lo| lo.as_ref().map(|lo| lo.lo_id.clone()));
            short_lo_number(&id, &short.unwrap_or_default())
        })
    });

    let repo_for_fetch = repository.clone();
    let outcome_resource = create_resource(
        move || lo_id.get(),
        move |id| {
            let repo = repo_for_fetch.clone();
            async move { repo.fetch_outcome(id).await }
        },
    );

    create_effect(move |_| match outcome_resource.get() {
        Some(Ok(lo)) => outcome.set(Some(lo)),
        Some(Err(err)) => log::warn!("Could not load learning outcome: {}", err),
        None => {}
    });

    let upload_action = create_action(move |request: &UploadRequest| {
        let repo = repository.clone();
        let request = request.clone();
        let id = lo_id.get_untracked();
        let number = lo_number.get_untracked();
        let mut current = outcome.get_untracked().unwrap_or_else(|| LearningOutcome {
            id,
            ..LearningOutcome::default()
        });
        async move {
            let result = upload_results(&repo, &mut current, &number, request).await;
            outcome.set(Some(current));
            result
        }
    });

    create_effect(move |_| {
        let Some(result) = upload_action.value().get() else {
            return;
        };
        let verdict = result
            .map_err(|err| {
                log::error!("Upload flow failed: {}", err);
                failure_message(&err)
            })
            .and_then(|response| import_outcome(&response));
        match verdict {
            Ok(message) => {
                messages.update(|state| state.set_success(message));
                spawn_local(async move {
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigation::navigate_back();
                });
            }
            Err(message) => messages.update(|state| state.set_error(message)),
        }
    });

    AddResultsViewModel {
        lo_id,
        lo_number,
        outcome,
        form,
        messages,
        drag_active,
        upload_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::session::SessionStore;
    use crate::test_support::helpers::{outcome, session};
    use crate::test_support::ssr::with_runtime;
    use crate::utils::files::REJECTED_FILE_MESSAGE;

    fn request(batch: &str, year: &str) -> UploadRequest {
        UploadRequest {
            batch: batch.into(),
            academic_year: year.into(),
            file: SelectedFile::from_bytes("marks.xlsx", b"PK\x03\x04".to_vec()),
        }
    }

    #[tokio::test]
    async fn repeated_upload_reuses_created_assignment() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/assignments/SE101_LO1/add")
                .header("authorization", "Bearer test-token");
            then.status(200).json_body(serde_json::json!({
                "assignmentId": "SE101_LO1-22-2023-24",
                "assignmentName": "LO 1 - 2023/24 (Batch 22)",
                "academicYear": "2023/24",
                "batch": "22"
            }));
        });
        let import = server.mock(|when, then| {
            when.method(POST)
                .path("/api/assignments/SE101_LO1-22-2023-24/import-marks-obe");
            then.status(200).json_body(serde_json::json!({
                "message": "Marks imported successfully (OBE Format)",
                "assignmentId": "SE101_LO1-22-2023-24",
                "status": "SUCCESS"
            }));
        });
        let store = SessionStore::in_memory();
        store.save(&session("lecture")).unwrap();
        let api = ApiClient::new_with_base_url(server.url("/api")).with_session_store(store);
        let repo = OutcomeRepository::new_with_client(Rc::new(api));
        let mut lo = outcome("SE101_LO1", "LO1", "Apply design patterns");

        for _ in 0..2 {
            let response = upload_results(&repo, &mut lo, "1", request("22", "2023/24"))
                .await
                .unwrap();
            assert_eq!(import_outcome(&response), Ok("Results uploaded successfully!".into()));
        }

        create.assert_hits(1);
        import.assert_hits(2);
        assert_eq!(lo.assignments.len(), 1);
        assert_eq!(lo.assignments[0].assignment_id, "SE101_LO1-22-2023-24");
    }

    #[tokio::test]
    async fn failed_assignment_creation_skips_import() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/assignments/SE101_LO1/add");
            then.status(400).json_body(serde_json::json!({"message": "LO not found"}));
        });
        let import = server.mock(|when, then| {
            when.method(POST)
                .path("/api/assignments/SE101_LO1-22-2023-24/import-marks-obe");
            then.status(200).body("ok");
        });
        let api = ApiClient::new_with_base_url(server.url("/api"))
            .with_session_store(SessionStore::in_memory());
        let repo = OutcomeRepository::new_with_client(Rc::new(api));
        let mut lo = outcome("SE101_LO1", "LO1", "Apply design patterns");

        let err = upload_results(&repo, &mut lo, "1", request("22", "2023/24"))
            .await
            .unwrap_err();
        assert_eq!(failure_message(&err), "LO not found");
        assert!(lo.assignments.is_empty());
        import.assert_hits(0);
    }

    #[test]
    fn rejected_file_keeps_selection_empty() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let store = SessionStore::in_memory();
            provide_context(store.clone());
            provide_context(
                ApiClient::new_with_base_url("http://unused.test/api").with_session_store(store),
            );
            let vm = use_add_results_view_model(Signal::derive(|| "SE101_LO1".to_string()));

            vm.select_file(Some(SelectedFile::from_bytes("report.pdf", vec![0])));
            assert!(vm.form.get().file.is_none());
            assert_eq!(vm.messages.get().error.as_deref(), Some(REJECTED_FILE_MESSAGE));

            vm.select_file(Some(SelectedFile::from_bytes("marks.CSV", vec![0])));
            assert_eq!(vm.form.get().file.map(|f| f.name).as_deref(), Some("marks.CSV"));
            assert!(vm.messages.get().error.is_none());
        });
    }

    #[test]
    fn submit_requires_batch_first() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let store = SessionStore::in_memory();
            store.set_current_lo_number("1");
            provide_context(store.clone());
            provide_context(
                ApiClient::new_with_base_url("http://unused.test/api").with_session_store(store),
            );
            let vm = use_add_results_view_model(Signal::derive(|| "SE101_LO1".to_string()));
            assert_eq!(vm.lo_number.get(), "1");
            assert!(!vm.can_submit());
            assert!(!vm.submit());
            assert_eq!(vm.messages.get().error.as_deref(), Some("Please select a batch"));
        });
    }
}
