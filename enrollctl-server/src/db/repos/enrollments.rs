//! Enrollment repository
//!
//! Writes a student, one subject row per requested subject, and one join
//! row per (student, subject) pair inside a single transaction. Subject
//! rows are never reused: enrolling twice with `subject_id = 5` creates two
//! subject rows tagged 5.

use sqlx::{FromRow, SqliteConnection, SqlitePool};
use tracing::{debug, info, warn};

use super::{DbError, Student, StudentRepo};
use crate::models::EnrollmentRequest;

/// Subject record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Subject {
    pub id: i64,
    pub subject_id: i64,
}

/// Result of one committed enrollment, subjects in request order
#[derive(Debug, Clone)]
pub struct EnrolledStudent {
    pub student: Student,
    pub subjects: Vec<Subject>,
}

impl EnrolledStudent {
    /// Row ids of the subjects created for this enrollment.
    pub fn subject_ids(&self) -> Vec<i64> {
        self.subjects.iter().map(|s| s.id).collect()
    }
}

/// Enrollment repository
pub struct EnrollmentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EnrollmentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Enroll one student in the requested subjects (atomic).
    ///
    /// Either the student, all its subject rows, and all join rows are
    /// committed, or nothing is.
    pub async fn enroll(&self, request: &EnrollmentRequest) -> Result<EnrolledStudent, DbError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(DbError::write("begin enrollment"))?;

        let enrolled = insert_enrollment(&mut tx, request)
            .await
            .inspect_err(|e| warn!(error = %e, "enrollment rolled back"))?;

        tx.commit()
            .await
            .map_err(DbError::write("commit enrollment"))?;

        info!(
            student_id = enrolled.student.id,
            subjects = enrolled.subjects.len(),
            "enrollment committed"
        );
        Ok(enrolled)
    }

    /// Enroll every request in one transaction.
    ///
    /// Used for bulk ingest: a failure on any request rolls back all of
    /// them, including the ones that were already inserted.
    pub async fn enroll_batch(
        &self,
        requests: &[EnrollmentRequest],
    ) -> Result<Vec<EnrolledStudent>, DbError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(DbError::write("begin batch enrollment"))?;

        let mut enrolled = Vec::with_capacity(requests.len());
        for (index, request) in requests.iter().enumerate() {
            let record = insert_enrollment(&mut tx, request)
                .await
                .inspect_err(|e| warn!(index, error = %e, "batch enrollment rolled back"))?;
            enrolled.push(record);
        }

        tx.commit()
            .await
            .map_err(DbError::write("commit batch enrollment"))?;

        info!(students = enrolled.len(), "batch enrollment committed");
        Ok(enrolled)
    }

    /// Subjects linked to a student through the join table, by subject row id.
    pub async fn subjects_for_student(&self, student_id: i64) -> Result<Vec<Subject>, DbError> {
        // Distinguish "no such student" from "student with no subjects"
        StudentRepo::new(self.pool).get(student_id).await?;

        let subjects: Vec<Subject> = sqlx::query_as(
            r#"
            SELECT s.id, s.subject_id
            FROM enrollments e
            JOIN subjects s ON s.id = e.subject_id
            WHERE e.student_id = ?
            ORDER BY s.id
            "#,
        )
        .bind(student_id)
        .fetch_all(self.pool)
        .await?;

        Ok(subjects)
    }
}

/// Insert sequence for one request, on a connection already inside a transaction.
async fn insert_enrollment(
    conn: &mut SqliteConnection,
    request: &EnrollmentRequest,
) -> Result<EnrolledStudent, DbError> {
    let student: Student = sqlx::query_as(
        "INSERT INTO students (name, age) VALUES (?, ?) RETURNING id, name, age",
    )
    .bind(request.student.name.as_str())
    .bind(request.student.age.get())
    .fetch_one(&mut *conn)
    .await
    .map_err(DbError::write("insert student"))?;

    let mut subjects = Vec::with_capacity(request.subjects.len());
    for tag in &request.subjects {
        let subject: Subject = sqlx::query_as(
            "INSERT INTO subjects (subject_id) VALUES (?) RETURNING id, subject_id",
        )
        .bind(tag.get())
        .fetch_one(&mut *conn)
        .await
        .map_err(DbError::write("insert subject"))?;

        sqlx::query("INSERT INTO enrollments (student_id, subject_id) VALUES (?, ?)")
            .bind(student.id)
            .bind(subject.id)
            .execute(&mut *conn)
            .await
            .map_err(DbError::write("insert enrollment"))?;

        debug!(student_id = student.id, subject_row = subject.id, "subject linked");
        subjects.push(subject);
    }

    Ok(EnrolledStudent { student, subjects })
}
