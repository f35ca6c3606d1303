use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, Module, ModulePayload},
};

impl ApiClient {
    pub async fn list_modules(&self) -> Result<Vec<Module>, ApiError> {
        let url = self.endpoint("/modules/all").await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn create_module(&self, payload: &ModulePayload) -> Result<Module, ApiError> {
        let url = self.endpoint("/modules/create").await;
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        self.map_json_response(response).await
    }

    pub async fn update_module(
        &self,
        module_id: &str,
        payload: &ModulePayload,
    ) -> Result<Module, ApiError> {
        let url = self
            .endpoint(&format!("/modules/{}", encode_segment(module_id)))
            .await;
        let response = self.send(self.http_client().put(url).json(payload)).await?;
        self.map_json_response(response).await
    }

    /// The backend answers deletes with a plain-text confirmation.
    pub async fn delete_module(&self, module_id: &str) -> Result<String, ApiError> {
        let url = self
            .endpoint(&format!("/modules/{}", encode_segment(module_id)))
            .await;
        let response = self.send(self.http_client().delete(url)).await?;
        self.map_text_response(response).await
    }
}
