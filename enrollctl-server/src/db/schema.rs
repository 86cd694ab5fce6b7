//! Table definitions for students, subjects, and enrollments
//!
//! Every statement is idempotent, so this runs on each startup.

use sqlx::SqlitePool;
use tracing::info;

/// Create the three tables and their indexes if absent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            age INTEGER NOT NULL
        );
    "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_students_name ON students(name)")
        .execute(pool)
        .await?;

    // subject_id is a free tag, not a key into any catalog
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_id INTEGER NOT NULL
        );
    "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS enrollments (
            student_id INTEGER REFERENCES students(id),
            subject_id INTEGER REFERENCES subjects(id)
        );
    "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_enrollments_student ON enrollments(student_id)",
    )
    .execute(pool)
    .await?;

    info!("database migrations complete");
    Ok(())
}
