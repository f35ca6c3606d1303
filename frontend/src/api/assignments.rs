use reqwest::multipart::{Form, Part};

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, Assignment, ImportResponse, MarksUpload, NewAssignment},
};

const SPREADSHEET_MIME: &str = "application/octet-stream";

impl ApiClient {
    /// Registers an assignment under an LO. Returns `None` when the backend
    /// accepts the request but its body is not an assignment record.
    pub async fn create_assignment(
        &self,
        lo_id: &str,
        assignment: &NewAssignment,
    ) -> Result<Option<Assignment>, ApiError> {
        let url = self
            .endpoint(&format!("/assignments/{}/add", encode_segment(lo_id)))
            .await;
        let form = Form::new()
            .text("assignmentId", assignment.assignment_id.clone())
            .text("assignmentName", assignment.assignment_name.clone())
            .text("academicYear", assignment.academic_year.clone())
            .text("batch", assignment.batch.clone());
        let response = self.send(self.http_client().post(url).multipart(form)).await?;
        let body = self.map_text_response(response).await?;
        Ok(serde_json::from_str::<Assignment>(&body).ok())
    }

    pub async fn import_marks(
        &self,
        assignment_id: &str,
        upload: MarksUpload,
    ) -> Result<ImportResponse, ApiError> {
        let url = self
            .endpoint(&format!(
                "/assignments/{}/import-marks-obe",
                encode_segment(assignment_id)
            ))
            .await;
        let file = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(SPREADSHEET_MIME)
            .map_err(|e| ApiError::unknown(format!("Invalid upload part: {}", e)))?;
        let form = Form::new()
            .part("excelFile", file)
            .text("batch", upload.batch)
            .text("loNumber", upload.lo_number)
            .text("academicYear", upload.academic_year);
        let response = self.send(self.http_client().post(url).multipart(form)).await?;
        let body = self.map_text_response(response).await?;
        Ok(serde_json::from_str::<ImportResponse>(&body).unwrap_or_else(|_| ImportResponse {
            message: Some(body.trim().to_string()).filter(|m| !m.is_empty()),
            ..ImportResponse::default()
        }))
    }
}
