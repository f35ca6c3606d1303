use crate::api::{
    ApiClient, ApiError, Assignment, ImportResponse, LearningOutcome, MarksUpload, NewAssignment,
    TrendMap,
};
use std::rc::Rc;

/// Calls made on behalf of a single learning outcome.
#[derive(Clone)]
pub struct OutcomeRepository {
    client: Rc<ApiClient>,
}

impl OutcomeRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_outcome(&self, lo_id: String) -> Result<LearningOutcome, ApiError> {
        self.client.get_outcome(&lo_id).await
    }

    pub async fn create_assignment(
        &self,
        lo_id: &str,
        assignment: &NewAssignment,
    ) -> Result<Option<Assignment>, ApiError> {
        self.client.create_assignment(lo_id, assignment).await
    }

    pub async fn import_marks(
        &self,
        assignment_id: &str,
        upload: MarksUpload,
    ) -> Result<ImportResponse, ApiError> {
        self.client.import_marks(assignment_id, upload).await
    }

    pub async fn fetch_trend(&self, module_id: &str) -> Result<TrendMap, ApiError> {
        self.client.lo_trend(module_id).await
    }
}
