use serde_json::json;

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, LearningOutcome, LearningOutcomePayload},
};

impl ApiClient {
    pub async fn list_outcomes(&self, module_id: &str) -> Result<Vec<LearningOutcome>, ApiError> {
        let url = self
            .endpoint(&format!("/lospos/module/{}", encode_segment(module_id)))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn get_outcome(&self, lo_id: &str) -> Result<LearningOutcome, ApiError> {
        let url = self
            .endpoint(&format!("/lospos/{}", encode_segment(lo_id)))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn create_outcome(
        &self,
        module_id: &str,
        payload: &LearningOutcomePayload,
    ) -> Result<LearningOutcome, ApiError> {
        let url = self
            .endpoint(&format!("/lospos/{}/add", encode_segment(module_id)))
            .await;
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        self.map_json_response(response).await
    }

    pub async fn update_outcome(
        &self,
        lo_id: &str,
        description: &str,
    ) -> Result<LearningOutcome, ApiError> {
        let url = self
            .endpoint(&format!("/lospos/{}", encode_segment(lo_id)))
            .await;
        let body = json!({ "loDescription": description });
        let response = self.send(self.http_client().put(url).json(&body)).await?;
        self.map_json_response(response).await
    }

    pub async fn delete_outcome(&self, lo_id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/lospos/{}", encode_segment(lo_id)))
            .await;
        let response = self.send(self.http_client().delete(url)).await?;
        self.map_text_response(response).await.map(|_| ())
    }
}
