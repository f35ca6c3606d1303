use crate::{
    api::{ApiError, Assignment, ImportResponse, NewAssignment},
    utils::files::SelectedFile,
};

pub const BATCH_OPTIONS: [&str; 6] = ["20", "21", "22", "23", "24", "25"];
pub const ACADEMIC_YEARS: [&str; 4] = ["2022/23", "2023/24", "2024/25", "2025/26"];
pub const REDIRECT_DELAY_MS: u32 = 1500;
pub const UPLOAD_SUCCESS: &str = "Results uploaded successfully!";
pub const UPLOAD_FAILED: &str = "Failed to process results";

/// Id used when no assignment exists yet for the batch and year,
/// e.g. `SE101_LO1-22-2023-24`.
pub fn generated_assignment_id(lo_id: &str, batch: &str, academic_year: &str) -> String {
    format!("{}-{}-{}", lo_id, batch, academic_year.replacen('/', "-", 1))
}

pub fn assignment_name(lo_number: &str, academic_year: &str, batch: &str) -> String {
    format!("LO {} - {} (Batch {})", lo_number, academic_year, batch)
}

#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub batch: String,
    pub academic_year: String,
    pub file: Option<SelectedFile>,
}

#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub batch: String,
    pub academic_year: String,
    pub file: SelectedFile,
}

impl UploadForm {
    pub fn is_complete(&self) -> bool {
        !self.batch.is_empty() && !self.academic_year.is_empty() && self.file.is_some()
    }

    /// Checks batch, then academic year, then file.
    pub fn validate(&self) -> Result<UploadRequest, ApiError> {
        if !BATCH_OPTIONS.contains(&self.batch.as_str()) {
            return Err(ApiError::validation("Please select a batch"));
        }
        if !ACADEMIC_YEARS.contains(&self.academic_year.as_str()) {
            return Err(ApiError::validation("Please select an academic year"));
        }
        let file = self
            .file
            .clone()
            .ok_or_else(|| ApiError::validation("Please select a file"))?;
        Ok(UploadRequest {
            batch: self.batch.clone(),
            academic_year: self.academic_year.clone(),
            file,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentChoice {
    Existing(String),
    Create(NewAssignment),
}

pub fn resolve_assignment(
    assignments: &[Assignment],
    lo_id: &str,
    lo_number: &str,
    batch: &str,
    academic_year: &str,
) -> AssignmentChoice {
    let generated = generated_assignment_id(lo_id, batch, academic_year);
    let existing = assignments.iter().find(|a| {
        (a.academic_year.as_deref() == Some(academic_year) && a.batch.as_deref() == Some(batch))
            || a.assignment_id == generated
    });
    match existing {
        Some(assignment) => AssignmentChoice::Existing(assignment.assignment_id.clone()),
        None => AssignmentChoice::Create(NewAssignment {
            assignment_id: generated,
            assignment_name: assignment_name(lo_number, academic_year, batch),
            academic_year: academic_year.to_string(),
            batch: batch.to_string(),
        }),
    }
}

/// A 2xx import can still report `status: "ERROR"`.
pub fn import_outcome(response: &ImportResponse) -> Result<String, String> {
    let failed = response
        .status
        .as_deref()
        .is_some_and(|status| status.eq_ignore_ascii_case("error"));
    if failed {
        Err(response
            .message
            .clone()
            .unwrap_or_else(|| UPLOAD_FAILED.to_string()))
    } else {
        Ok(UPLOAD_SUCCESS.to_string())
    }
}

pub fn failure_message(err: &ApiError) -> String {
    err.reported_message()
        .unwrap_or(UPLOAD_FAILED)
        .to_string()
}
