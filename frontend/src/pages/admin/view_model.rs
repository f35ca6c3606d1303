use crate::{
    api::{ApiClient, ApiError, Module, ModulePayload},
    components::forms::MessageState,
    pages::{
        accounts::view_model::PANEL_CLOSE_DELAY_MS,
        modules::{repository::ModulesRepository, utils::validate_module},
    },
};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleFormState {
    pub module_id: String,
    pub module_name: String,
}

#[derive(Clone, Copy)]
pub struct CreateModuleViewModel {
    pub form: RwSignal<ModuleFormState>,
    pub messages: RwSignal<MessageState>,
    pub panel_open: RwSignal<bool>,
    pub create_action: Action<ModulePayload, Result<Module, ApiError>>,
}

impl CreateModuleViewModel {
    pub fn open(&self) {
        self.messages.update(MessageState::clear);
        self.panel_open.set(true);
    }

    pub fn close(&self) {
        self.panel_open.set(false);
    }

    /// Validates locally and dispatches only a well-formed module.
    pub fn submit(&self) -> bool {
        if self.create_action.pending().get_untracked() {
            return false;
        }
        let form = self.form.get_untracked();
        match validate_module(&form.module_id, &form.module_name) {
            Ok(payload) => {
                self.messages.update(MessageState::clear);
                self.create_action.dispatch(payload);
                true
            }
            Err(err) => {
                self.messages.update(|state| state.set_error(err.error));
                false
            }
        }
    }
}

const CREATE_FAILED: &str = "Failed to create module";

pub fn create_failure_message(err: &ApiError) -> String {
    err.reported_message().unwrap_or(CREATE_FAILED).to_string()
}

pub fn use_create_module_view_model() -> CreateModuleViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ModulesRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(ModuleFormState::default());
    let messages = create_rw_signal(MessageState::default());
    let panel_open = create_rw_signal(false);

    let create_action = create_action(move |payload: &ModulePayload| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move { repo.create_module(payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(module) => {
                    log::info!("Module {} created", module.module_id);
                    messages.update(|state| state.set_success("Module created successfully!"));
                    form.set(ModuleFormState::default());
                    spawn_local(async move {
                        TimeoutFuture::new(PANEL_CLOSE_DELAY_MS).await;
                        panel_open.set(false);
                        messages.update(MessageState::clear);
                    });
                }
                Err(err) => {
                    log::warn!("Failed to create module: {}", err);
                    messages.update(|state| state.set_error(create_failure_message(&err)));
                }
            }
        }
    });

    CreateModuleViewModel {
        form,
        messages,
        panel_open,
        create_action,
    }
}
