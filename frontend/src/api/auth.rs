use super::{
    client::ApiClient,
    types::{AddUserRequest, ApiError, LoginRequest, LoginResponse, StatusResponse},
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = self.send(self.http_client().post(url).json(request)).await?;
        let login: LoginResponse = self.map_json_response(response).await?;
        if login.token.trim().is_empty() {
            return Err(ApiError::unknown(
                login
                    .message
                    .unwrap_or_else(|| "Login response did not include a token".to_string()),
            ));
        }
        Ok(login)
    }

    pub async fn add_user(&self, request: &AddUserRequest) -> Result<StatusResponse, ApiError> {
        let url = self.endpoint("/auth/add-user").await;
        let response = self.send(self.http_client().post(url).json(request)).await?;
        self.map_json_response(response).await
    }
}
