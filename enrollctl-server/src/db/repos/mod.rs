//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool; cheap to construct per request
//! - Returns `DbError::NotFound` for missing primary keys
//! - Uses transactions for multi-step operations

pub mod enrollments;
pub mod students;

pub use enrollments::{EnrolledStudent, EnrollmentRepo, Subject};
pub use students::{Student, StudentRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A write was attempted and rolled back.
    #[error("{operation} failed: {source}")]
    WriteFailure {
        operation: &'static str,
        source: sqlx::Error,
    },
}

impl DbError {
    /// Map a driver error raised inside a write into `WriteFailure`.
    pub(crate) fn write(operation: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::WriteFailure { operation, source }
    }

    pub(crate) fn student_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "student",
            id: id.to_string(),
        }
    }
}
