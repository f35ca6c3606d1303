use crate::{
    api::{ApiError, LoginRequest},
    state::session::Role,
};

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

pub const ROLE_OPTIONS: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::Lecturer];

/// Checks the form before anything is sent. Role, username and password are
/// all required.
pub fn validate_login(
    role: Option<Role>,
    username: &str,
    password: &str,
) -> Result<LoginRequest, ApiError> {
    let role = role.ok_or_else(|| ApiError::validation("Please select your role"))?;
    if username.trim().is_empty() {
        return Err(ApiError::validation("Please enter your username"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password"));
    }
    Ok(LoginRequest {
        user_id: username.trim().to_string(),
        password: password.to_string(),
        usertype: role.wire_value().to_string(),
    })
}

/// Keeps backend and validation messages; anything else becomes the generic
/// login failure.
pub fn login_failure(mut err: ApiError) -> ApiError {
    if err.reported_message().is_none() {
        err.error = LOGIN_FAILED.to_string();
    }
    err
}
