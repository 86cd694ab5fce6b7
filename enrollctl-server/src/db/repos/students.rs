//! Student repository
//!
//! Point lookups and mutations by primary key. Students are created by
//! `EnrollmentRepo`; deleting one does not touch its enrollment rows.

use sqlx::{FromRow, SqlitePool};
use tracing::info;

use super::DbError;
use crate::models::{NewStudent, OffsetLimit};

/// Student record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List students ordered by id ascending.
    pub async fn list(&self, page: OffsetLimit) -> Result<Vec<Student>, DbError> {
        let students: Vec<Student> = sqlx::query_as(
            r#"
            SELECT id, name, age
            FROM students
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(students)
    }

    /// Get a single student by id.
    pub async fn get(&self, id: i64) -> Result<Student, DbError> {
        sqlx::query_as("SELECT id, name, age FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::student_not_found(id))
    }

    /// Overwrite name and age, returning the stored record.
    pub async fn update(&self, id: i64, student: &NewStudent) -> Result<Student, DbError> {
        let updated: Option<Student> = sqlx::query_as(
            r#"
            UPDATE students
            SET name = ?, age = ?
            WHERE id = ?
            RETURNING id, name, age
            "#,
        )
        .bind(student.name.as_str())
        .bind(student.age.get())
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(DbError::write("update student"))?;

        let updated = updated.ok_or_else(|| DbError::student_not_found(id))?;
        info!(student_id = id, "student updated");
        Ok(updated)
    }

    /// Delete a student. Enrollment rows pointing at it are left in place.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(DbError::write("delete student"))?;

        if result.rows_affected() == 0 {
            return Err(DbError::student_not_found(id));
        }

        info!(student_id = id, "student deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::testing::{count_rows, test_pool};
    use crate::db::EnrollmentRepo;
    use crate::models::{EnrollmentRequest, SubjectTag};

    async fn seed(pool: &SqlitePool, name: &str, age: i64, subjects: &[i64]) -> Student {
        let request = EnrollmentRequest::new(
            NewStudent::new(name, age).unwrap(),
            subjects.iter().copied().map(SubjectTag).collect(),
        );
        EnrollmentRepo::new(pool).enroll(&request).await.unwrap().student
    }

    #[tokio::test]
    async fn get_returns_created_record() {
        let pool = test_pool().await;
        let created = seed(&pool, "Ann", 20, &[]).await;

        let fetched = StudentRepo::new(&pool).get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let err = StudentRepo::new(&pool).get(99).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "student", ref id } if id == "99"));
    }

    #[tokio::test]
    async fn list_orders_by_id_and_applies_window() {
        let pool = test_pool().await;
        for (i, name) in ["Ann", "Ben", "Cid", "Dee", "Eve"].iter().enumerate() {
            seed(&pool, name, 20 + i as i64, &[]).await;
        }
        let repo = StudentRepo::new(&pool);

        let all = repo.list(OffsetLimit::default()).await.unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Ben", "Cid", "Dee", "Eve"]);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        let page = repo.list(OffsetLimit::new(1, 2).unwrap()).await.unwrap();
        let names: Vec<&str> = page.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ben", "Cid"]);

        let past_end = repo.list(OffsetLimit::new(10, 5).unwrap()).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn update_then_get_returns_new_fields() {
        let pool = test_pool().await;
        let created = seed(&pool, "Ann", 20, &[]).await;
        let repo = StudentRepo::new(&pool);

        let changed = NewStudent::new("Annabel", 21).unwrap();
        let updated = repo.update(created.id, &changed).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Annabel");
        assert_eq!(updated.age, 21);

        assert_eq!(repo.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = test_pool().await;
        let changed = NewStudent::new("Nobody", 1).unwrap();
        let err = StudentRepo::new(&pool).update(5, &changed).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(count_rows(&pool, "students").await, 0);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let pool = test_pool().await;
        let created = seed(&pool, "Ann", 20, &[]).await;
        let repo = StudentRepo::new(&pool);

        repo.delete(created.id).await.unwrap();
        assert!(matches!(
            repo.get(created.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            repo.delete(created.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn delete_leaves_enrollment_rows() {
        let pool = test_pool().await;
        let created = seed(&pool, "Ann", 20, &[5, 6]).await;

        StudentRepo::new(&pool).delete(created.id).await.unwrap();

        assert_eq!(count_rows(&pool, "students").await, 0);
        assert_eq!(count_rows(&pool, "subjects").await, 2);
        assert_eq!(count_rows(&pool, "enrollments").await, 2);
    }
}
