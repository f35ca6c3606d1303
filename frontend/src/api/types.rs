use chrono::NaiveDateTime;
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub password: String,
    pub usertype: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_type: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddUserRequest {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub email: String,
    pub password: String,
    pub usertype: String,
}

/// Envelope used by the auth endpoints: `{message, status, userId?}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status
            .as_deref()
            .map(|status| status.eq_ignore_ascii_case("SUCCESS"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub module_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub module_name: String,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub los_pos_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModulePayload {
    pub module_id: String,
    pub module_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningOutcome {
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub lo_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub lo_description: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub module_id: Option<String>,
    #[serde(default)]
    pub module_code: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub updated_at: Option<NaiveDateTime>,
}

impl LearningOutcome {
    pub fn owning_module(&self) -> Option<&str> {
        self.module_id
            .as_deref()
            .or(self.module_code.as_deref())
            .filter(|id| !id.trim().is_empty())
    }

    pub fn description(&self) -> &str {
        if self.lo_description.trim().is_empty() {
            self.name.as_deref().unwrap_or_default()
        } else {
            &self.lo_description
        }
    }

    pub fn record_assignment(&mut self, assignment: Assignment) {
        if self
            .assignments
            .iter()
            .all(|existing| existing.assignment_id != assignment.assignment_id)
        {
            self.assignments.push(assignment);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LearningOutcomePayload {
    pub lo_id: String,
    pub lo_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub assignment_id: String,
    #[serde(default)]
    pub assignment_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub academic_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub batch: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub assignment_id: String,
    pub assignment_name: String,
    pub academic_year: String,
    pub batch: String,
}

impl NewAssignment {
    /// Local record for an assignment the backend just accepted, keeping the
    /// batch/year pair even when the response omits them.
    pub fn into_assignment(self, created: Option<Assignment>) -> Assignment {
        let created = created.unwrap_or_else(|| Assignment {
            assignment_id: self.assignment_id.clone(),
            assignment_name: None,
            academic_year: None,
            batch: None,
            file_name: None,
        });
        Assignment {
            assignment_id: if created.assignment_id.is_empty() {
                self.assignment_id
            } else {
                created.assignment_id
            },
            assignment_name: created.assignment_name.or(Some(self.assignment_name)),
            academic_year: created.academic_year.or(Some(self.academic_year)),
            batch: created.batch.or(Some(self.batch)),
            file_name: created.file_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarksUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub batch: String,
    pub lo_number: String,
    pub academic_year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub assignment_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendStatus {
    Improved,
    Declined,
    #[default]
    Stable,
    Baseline,
    #[serde(other)]
    Unknown,
}

impl TrendStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TrendStatus::Improved => "IMPROVED",
            TrendStatus::Declined => "DECLINED",
            TrendStatus::Stable => "STABLE",
            TrendStatus::Baseline => "BASELINE",
            TrendStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub year: String,
    pub average: f64,
    #[serde(default)]
    pub status: TrendStatus,
    #[serde(default)]
    pub delta: Option<f64>,
}

/// Trend series keyed by `"{loId} - {name}"`.
pub type TrendMap = BTreeMap<String, Vec<TrendPoint>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Backend,
    Validation,
    Decode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

const STATUS_FALLBACK_PREFIX: &str = "Request failed with status";

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "NETWORK_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    /// Builds an error from a non-success response body. JSON bodies
    /// contribute `message` (and `error` as details); plain text is used as-is.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let code = match status {
            401 => "UNAUTHORIZED",
            403 => "FORBIDDEN",
            404 => "NOT_FOUND",
            400..=499 => "REQUEST_REJECTED",
            _ => "SERVER_ERROR",
        }
        .to_string();

        let trimmed = body.trim();
        let (message, details) = match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Object(map)) => {
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                let details = map.get("error").cloned();
                (message, details)
            }
            Ok(Value::String(text)) => (Some(text), None),
            Ok(_) => (None, None),
            Err(_) if !trimmed.is_empty() => (Some(trimmed.to_string()), None),
            Err(_) => (None, None),
        };

        Self {
            error: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("{} {}", STATUS_FALLBACK_PREFIX, status)),
            code,
            details,
        }
    }

    /// Text the user should see verbatim: backend messages and validation
    /// errors. `None` when only a status line or transport failure is known.
    pub fn reported_message(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::Backend if !self.error.starts_with(STATUS_FALLBACK_PREFIX) => {
                Some(&self.error)
            }
            ErrorKind::Validation => Some(&self.error),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code.as_str() {
            "NETWORK_ERROR" => ErrorKind::Transport,
            "VALIDATION_ERROR" => ErrorKind::Validation,
            "UNKNOWN" => ErrorKind::Decode,
            _ => ErrorKind::Backend,
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// Batches arrive as either "22" or 22 depending on the backend version.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text.parse::<NaiveDateTime>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use serde_json::json;

    #[wasm_bindgen_test]
    fn learning_outcome_tolerates_backend_shapes() {
        let lo: LearningOutcome = serde_json::from_value(json!({
            "id": "SE101_LO2",
            "loId": "LO2",
            "loDescription": null,
            "name": "Design software components",
            "moduleCode": "SE101",
            "assignments": null,
            "createdAt": [2025, 1, 2, 10, 0],
            "updatedAt": "2025-01-02T10:00:00.123456"
        }))
        .unwrap();

        assert_eq!(lo.description(), "Design software components");
        assert_eq!(lo.owning_module(), Some("SE101"));
        assert!(lo.assignments.is_empty());
        assert!(lo.created_at.is_none());
        assert!(lo.updated_at.is_some());
    }

    #[wasm_bindgen_test]
    fn module_id_field_wins_over_module_code() {
        let lo: LearningOutcome = serde_json::from_value(json!({
            "id": "x",
            "moduleId": "EE201",
            "moduleCode": "SE101"
        }))
        .unwrap();
        assert_eq!(lo.owning_module(), Some("EE201"));
    }

    #[wasm_bindgen_test]
    fn assignment_batch_accepts_numbers() {
        let assignment: Assignment = serde_json::from_value(json!({
            "assignmentId": "LO1-22-2023-24",
            "academicYear": "2023/24",
            "batch": 22
        }))
        .unwrap();
        assert_eq!(assignment.batch.as_deref(), Some("22"));
    }

    #[wasm_bindgen_test]
    fn trend_status_handles_baseline_and_unknown() {
        let points: Vec<TrendPoint> = serde_json::from_value(json!([
            { "year": "2023/24", "average": 61.5, "status": "BASELINE" },
            { "year": "2024/25", "average": 70.0, "status": "IMPROVED", "delta": 13.8 },
            { "year": "2025/26", "average": 70.0, "status": "SIDEWAYS", "delta": 0.0 }
        ]))
        .unwrap();
        assert_eq!(points[0].status, TrendStatus::Baseline);
        assert!(points[0].delta.is_none());
        assert_eq!(points[1].status, TrendStatus::Improved);
        assert_eq!(points[2].status, TrendStatus::Unknown);
    }

    #[wasm_bindgen_test]
    fn error_body_prefers_json_message() {
        let err = ApiError::from_response_body(
            400,
            r#"{"message":"Failed to import student marks (OBE Format)","error":"bad row","status":"ERROR"}"#,
        );
        assert_eq!(err.error, "Failed to import student marks (OBE Format)");
        assert_eq!(err.code, "REQUEST_REJECTED");
        assert_eq!(err.details, Some(json!("bad row")));
        assert_eq!(err.kind(), ErrorKind::Backend);
    }

    #[wasm_bindgen_test]
    fn error_body_falls_back_to_raw_text_then_status() {
        let err = ApiError::from_response_body(403, "Access Denied: Only Admin can create modules");
        assert_eq!(err.error, "Access Denied: Only Admin can create modules");
        assert_eq!(err.code, "FORBIDDEN");

        let err = ApiError::from_response_body(500, "   ");
        assert_eq!(err.error, "Request failed with status 500");
        assert_eq!(err.code, "SERVER_ERROR");
    }

    #[wasm_bindgen_test]
    fn status_response_success_is_case_insensitive() {
        let resp = StatusResponse {
            status: Some("success".into()),
            ..Default::default()
        };
        assert!(resp.is_success());
        assert!(!StatusResponse::default().is_success());
    }

    #[wasm_bindgen_test]
    fn new_assignment_fills_missing_fields_from_request() {
        let request = NewAssignment {
            assignment_id: "LO1-22-2023-24".into(),
            assignment_name: "LO 1 - 2023/24 (Batch 22)".into(),
            academic_year: "2023/24".into(),
            batch: "22".into(),
        };
        let created = Assignment {
            assignment_id: "LO1-22-2023-24".into(),
            assignment_name: Some("LO 1 - 2023/24 (Batch 22)".into()),
            academic_year: None,
            batch: None,
            file_name: None,
        };
        let local = request.into_assignment(Some(created));
        assert_eq!(local.academic_year.as_deref(), Some("2023/24"));
        assert_eq!(local.batch.as_deref(), Some("22"));
    }

    #[wasm_bindgen_test]
    fn reported_message_skips_status_lines_and_transport_errors() {
        let rejected = ApiError::from_response_body(400, r#"{"message":"LO not found"}"#);
        assert_eq!(rejected.reported_message(), Some("LO not found"));
        assert_eq!(ApiError::from_response_body(403, "").reported_message(), None);
        assert_eq!(ApiError::network("offline").reported_message(), None);
        assert_eq!(
            ApiError::validation("Please select a batch").reported_message(),
            Some("Please select a batch")
        );
    }
}
