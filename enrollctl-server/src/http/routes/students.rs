//! Student endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{EnrollmentRepo, Student, StudentRepo, Subject};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiQuery, StudentId};
use crate::http::server::AppState;
use crate::models::{NewStudent, OffsetLimit, OffsetLimitParams, StudentPayload};

/// Student response
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            age: s.age,
        }
    }
}

/// Subject response
#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub id: i64,
    pub subject_id: i64,
}

impl From<Subject> for SubjectResponse {
    fn from(s: Subject) -> Self {
        Self {
            id: s.id,
            subject_id: s.subject_id,
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /students - list students by id, `skip`/`limit` window
async fn list_students(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<OffsetLimitParams>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let page = OffsetLimit::try_from(params)?;
    let students = StudentRepo::new(&state.pool).list(page).await?;
    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

/// GET /students/{id}
async fn get_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = StudentRepo::new(&state.pool).get(id).await?;
    Ok(Json(StudentResponse::from(student)))
}

/// PUT /students/{id} - overwrite name and age
async fn update_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
    ApiJson(payload): ApiJson<StudentPayload>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = NewStudent::try_from(payload)?;
    let updated = StudentRepo::new(&state.pool).update(id, &student).await?;
    Ok(Json(StudentResponse::from(updated)))
}

/// DELETE /students/{id}
async fn delete_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
) -> Result<Json<MessageResponse>, ApiError> {
    StudentRepo::new(&state.pool).delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Student deleted successfully",
    }))
}

/// GET /students/{id}/subjects
async fn list_student_subjects(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
) -> Result<Json<Vec<SubjectResponse>>, ApiError> {
    let subjects = EnrollmentRepo::new(&state.pool)
        .subjects_for_student(id)
        .await?;
    Ok(Json(subjects.into_iter().map(SubjectResponse::from).collect()))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", get(list_students))
        .route("/students/", get(list_students))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/students/{id}/subjects", get(list_student_subjects))
}
