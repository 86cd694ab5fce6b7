//! Bulk ingest endpoints: JSON payload and CSV upload

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::{routing::post, Json, Router};
use serde::Serialize;

use super::enrollments::{enroll_payload, EnrollmentResponse, INSERTED};
use crate::db::EnrollmentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::ingest::{parse_enrollments, EnrollmentPayload};
use crate::models::ValidationError;

/// Multipart field carrying the CSV document
const FILE_FIELD: &str = "file";

/// CSV ingest response
#[derive(Serialize)]
pub struct CsvIngestResponse {
    pub message: &'static str,
    /// Number of rows enrolled (one student each)
    pub students: usize,
}

/// POST /insert-data-payload
async fn insert_data_payload(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<EnrollmentPayload>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    Ok(Json(enroll_payload(&state.pool, payload).await?))
}

/// POST /insert-data-csv - multipart upload, field `file`
///
/// The whole file is one transaction: a bad row or a failed insert leaves
/// the database untouched.
async fn insert_data_csv(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CsvIngestResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        ApiError::Validation(ValidationError::Malformed {
            input: "multipart upload",
            reason: rejection.body_text(),
        })
    })?;

    let data = read_file_field(&mut multipart).await?;
    let requests = parse_enrollments(&data)?;
    let enrolled = EnrollmentRepo::new(&state.pool)
        .enroll_batch(&requests)
        .await?;

    Ok(Json(CsvIngestResponse {
        message: INSERTED,
        students: enrolled.len(),
    }))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<Bytes, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            if let Some(file_name) = field.file_name() {
                tracing::debug!(file_name, "receiving CSV upload");
            }
            return Ok(field.bytes().await?);
        }
    }

    Err(ApiError::Validation(ValidationError::Empty { field: FILE_FIELD }))
}

/// Ingest routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/insert-data-payload", post(insert_data_payload))
        .route("/insert-data-csv", post(insert_data_csv))
}
