use crate::api::{AddUserRequest, ApiClient, ApiError, StatusResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AccountsRepository {
    client: Rc<ApiClient>,
}

impl AccountsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn add_user(&self, request: AddUserRequest) -> Result<StatusResponse, ApiError> {
        self.client.add_user(&request).await
    }
}
