use crate::{
    api::{AddUserRequest, ApiError, StatusResponse},
    state::session::Role,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Created by a super admin; always an `Admin` account.
    Administrator,
    /// Created by an admin; a lecturer unless promoted in the form.
    Teacher,
}

impl AccountKind {
    pub fn panel_title(self) -> &'static str {
        match self {
            AccountKind::Administrator => "Add Administrator",
            AccountKind::Teacher => "Add Teacher",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AccountKind::Administrator => "Admin added successfully!",
            AccountKind::Teacher => "Teacher added successfully!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            AccountKind::Administrator => "Failed to add admin",
            AccountKind::Teacher => "Failed to add teacher",
        }
    }

    fn default_role(self) -> Role {
        match self {
            AccountKind::Administrator => Role::Admin,
            AccountKind::Teacher => Role::Lecturer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFormState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub account_type: Role,
}

impl AccountFormState {
    pub fn new(kind: AccountKind) -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            account_type: kind.default_role(),
        }
    }

    pub fn reset(&mut self, kind: AccountKind) {
        *self = Self::new(kind);
    }

    pub fn to_request(&self, kind: AccountKind) -> Result<AddUserRequest, ApiError> {
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            return Err(ApiError::validation("Please fill in all fields"));
        }
        if !self.email.contains('@') {
            return Err(ApiError::validation("Please enter a valid email address"));
        }
        let role = match kind {
            AccountKind::Administrator => Role::Admin,
            AccountKind::Teacher => self.account_type,
        };
        Ok(AddUserRequest {
            user_id: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            usertype: role.wire_value().to_string(),
        })
    }
}

/// Success message, or the message to show for a failed provisioning call.
pub fn provisioning_outcome(
    kind: AccountKind,
    result: &Result<StatusResponse, ApiError>,
) -> Result<String, String> {
    match result {
        Ok(response) if response.is_success() => Ok(kind.success_message().to_string()),
        Ok(response) => Err(response
            .message
            .clone()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| kind.failure_message().to_string())),
        Err(err) => Err(err
            .reported_message()
            .unwrap_or(kind.failure_message())
            .to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(kind: AccountKind) -> AccountFormState {
        AccountFormState {
            username: "nimal".into(),
            email: "nimal@eng.ruh.ac.lk".into(),
            password: "Secret#1".into(),
            ..AccountFormState::new(kind)
        }
    }

    #[test]
    fn all_fields_are_required_and_email_needs_at_sign() {
        let mut form = AccountFormState::new(AccountKind::Teacher);
        assert!(form.to_request(AccountKind::Teacher).is_err());

        form = filled(AccountKind::Teacher);
        form.email = "nimal.eng.ruh.ac.lk".into();
        let err = form.to_request(AccountKind::Teacher).unwrap_err();
        assert_eq!(err.error, "Please enter a valid email address");
    }

    #[test]
    fn teacher_defaults_to_lecture_and_admin_is_fixed() {
        let request = filled(AccountKind::Teacher)
            .to_request(AccountKind::Teacher)
            .unwrap();
        assert_eq!(request.usertype, "Lecture");

        let mut promoted = filled(AccountKind::Teacher);
        promoted.account_type = Role::Admin;
        assert_eq!(promoted.to_request(AccountKind::Teacher).unwrap().usertype, "Admin");

        let mut admin = filled(AccountKind::Administrator);
        admin.account_type = Role::Lecturer;
        assert_eq!(
            admin.to_request(AccountKind::Administrator).unwrap().usertype,
            "Admin"
        );
    }

    #[test]
    fn outcome_prefers_backend_message() {
        let ok = Ok(StatusResponse {
            status: Some("SUCCESS".into()),
            ..Default::default()
        });
        assert_eq!(
            provisioning_outcome(AccountKind::Teacher, &ok),
            Ok("Teacher added successfully!".to_string())
        );

        let rejected = Err(ApiError::from_response_body(
            400,
            r#"{"message":"Failed to add user: User ID already exists"}"#,
        ));
        assert_eq!(
            provisioning_outcome(AccountKind::Administrator, &rejected),
            Err("Failed to add user: User ID already exists".to_string())
        );

        let offline = Err(ApiError::network("Request failed: connection refused"));
        assert_eq!(
            provisioning_outcome(AccountKind::Administrator, &offline),
            Err("Failed to add admin".to_string())
        );

        let forbidden = Err(ApiError::from_response_body(403, ""));
        assert_eq!(
            provisioning_outcome(AccountKind::Teacher, &forbidden),
            Err("Failed to add teacher".to_string())
        );

        let error_only = Err(ApiError::from_response_body(400, r#"{"error":"Bad Request"}"#));
        assert_eq!(
            provisioning_outcome(AccountKind::Administrator, &error_only),
            Err("Failed to add admin".to_string())
        );

        let not_success = Ok(StatusResponse::default());
        assert_eq!(
            provisioning_outcome(AccountKind::Teacher, &not_success),
            Err("Failed to add teacher".to_string())
        );
    }
}
