use crate::api::{
    ApiClient, ApiError, LearningOutcome, LearningOutcomePayload, Module, ModulePayload,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ModulesRepository {
    client: Rc<ApiClient>,
}

impl ModulesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_modules(&self) -> Result<Vec<Module>, ApiError> {
        self.client.list_modules().await
    }

    pub async fn create_module(&self, payload: ModulePayload) -> Result<Module, ApiError> {
        self.client.create_module(&payload).await
    }

    pub async fn update_module(&self, payload: ModulePayload) -> Result<Module, ApiError> {
        self.client.update_module(&payload.module_id, &payload).await
    }

    pub async fn delete_module(&self, module_id: String) -> Result<String, ApiError> {
        self.client.delete_module(&module_id).await
    }

    pub async fn fetch_outcomes(&self, module_id: String) -> Result<Vec<LearningOutcome>, ApiError> {
        self.client.list_outcomes(&module_id).await
    }

    pub async fn create_outcome(
        &self,
        module_id: String,
        payload: LearningOutcomePayload,
    ) -> Result<LearningOutcome, ApiError> {
        self.client.create_outcome(&module_id, &payload).await
    }

    pub async fn update_outcome(
        &self,
        lo_id: String,
        description: String,
    ) -> Result<LearningOutcome, ApiError> {
        self.client.update_outcome(&lo_id, &description).await
    }

    pub async fn delete_outcome(&self, lo_id: String) -> Result<(), ApiError> {
        self.client.delete_outcome(&lo_id).await
    }
}
