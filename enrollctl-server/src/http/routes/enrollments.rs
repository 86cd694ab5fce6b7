//! Enrollment creation endpoint
//!
//! `POST /enrollments` takes the same payload as `POST /insert-data-payload`
//! and shares its handler logic.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::{EnrolledStudent, EnrollmentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::ingest::EnrollmentPayload;
use crate::models::EnrollmentRequest;

pub(crate) const INSERTED: &str = "Data inserted successfully";

/// Enrollment response
#[derive(Serialize)]
pub struct EnrollmentResponse {
    pub message: &'static str,
    pub student_id: i64,
    pub subject_ids: Vec<i64>,
}

impl From<EnrolledStudent> for EnrollmentResponse {
    fn from(e: EnrolledStudent) -> Self {
        Self {
            message: INSERTED,
            student_id: e.student.id,
            subject_ids: e.subject_ids(),
        }
    }
}

/// Validate a payload and enroll it in one transaction.
pub(crate) async fn enroll_payload(
    pool: &SqlitePool,
    payload: EnrollmentPayload,
) -> Result<EnrollmentResponse, ApiError> {
    let request = EnrollmentRequest::try_from(payload)?;
    let enrolled = EnrollmentRepo::new(pool).enroll(&request).await?;
    Ok(EnrollmentResponse::from(enrolled))
}

/// POST /enrollments - enroll one student in a list of subjects
async fn create_enrollment(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<EnrollmentPayload>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    Ok(Json(enroll_payload(&state.pool, payload).await?))
}

/// Enrollment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/enrollments", post(create_enrollment))
}
