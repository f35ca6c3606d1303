use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, TrendMap},
};

impl ApiClient {
    pub async fn lo_trend(&self, module_id: &str) -> Result<TrendMap, ApiError> {
        let url = self
            .endpoint(&format!(
                "/obe/analysis/trend/lo/{}",
                encode_segment(module_id)
            ))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }
}
