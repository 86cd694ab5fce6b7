//! Offline CSV import
//!
//! Same decoding and single-transaction write as `POST /insert-data-csv`,
//! reading the file from disk instead of a multipart upload.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use enrollctl_server::db::{create_pool, run_migrations, EnrollmentRepo};
use enrollctl_server::ingest::parse_enrollments;

use crate::config::EnrollctlConfig;

/// Arguments for the import command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// CSV file with student_name, age, subject_id columns
    pub file: PathBuf,

    /// Database URL, e.g. sqlite://enrollctl.db (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Import a CSV file, one enrollment per row
pub async fn run_import(args: ImportArgs, config: &EnrollctlConfig) -> Result<()> {
    let data = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    // Decode before connecting so a bad file never touches the database
    let requests = parse_enrollments(&data)
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;

    let database_url = config.database_url(args.database_url);
    let pool = create_pool(&database_url)
        .await
        .with_context(|| format!("Failed to create database pool for {}", database_url))?;
    run_migrations(&pool)
        .await
        .context("Failed to create database tables")?;

    let enrolled = EnrollmentRepo::new(&pool)
        .enroll_batch(&requests)
        .await
        .context("Import rolled back")?;

    let subjects: usize = enrolled.iter().map(|e| e.subjects.len()).sum();
    println!(
        "Imported {} students ({} subject enrollments) from {}",
        enrolled.len(),
        subjects,
        args.file.display()
    );

    pool.close().await;
    Ok(())
}
