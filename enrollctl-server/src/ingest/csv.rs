//! CSV upload decoding
//!
//! Expected header: `student_name,age,subject_id` (any column order, extra
//! columns ignored). Each data row is its own single-subject enrollment:
//! rows are not grouped by student name.

use ::csv::{ReaderBuilder, StringRecord, Trim};

use crate::models::{Age, EnrollmentRequest, NewStudent, StudentName, SubjectTag};

const STUDENT_NAME: &str = "student_name";
const AGE: &str = "age";
const SUBJECT_ID: &str = "subject_id";

/// CSV decoding error
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("line {line}: invalid {column}: {reason}")]
    InvalidField {
        line: u64,
        column: &'static str,
        reason: String,
    },

    #[error("malformed CSV: {0}")]
    Malformed(#[from] ::csv::Error),
}

/// Column positions resolved from the header row
struct Columns {
    name: usize,
    age: usize,
    subject_id: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, CsvError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(CsvError::MissingColumn { column })
        };

        Ok(Self {
            name: find(STUDENT_NAME)?,
            age: find(AGE)?,
            subject_id: find(SUBJECT_ID)?,
        })
    }
}

/// Decode a whole CSV document into one enrollment request per data row.
///
/// Fails on the first bad row; nothing is returned for partial input.
pub fn parse_enrollments(data: &[u8]) -> Result<Vec<EnrollmentRequest>, CsvError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(data);
    let columns = Columns::resolve(reader.headers()?)?;

    let mut requests = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        requests.push(parse_row(&record, &columns, line)?);
    }

    tracing::debug!(rows = requests.len(), "decoded CSV enrollments");
    Ok(requests)
}

fn parse_row(
    record: &StringRecord,
    columns: &Columns,
    line: u64,
) -> Result<EnrollmentRequest, CsvError> {
    let invalid = |column: &'static str, reason: String| CsvError::InvalidField {
        line,
        column,
        reason,
    };

    let name = record.get(columns.name).unwrap_or_default();
    let age = parse_int(record.get(columns.age).unwrap_or_default())
        .map_err(|reason| invalid(AGE, reason))?;
    let subject_id = parse_int(record.get(columns.subject_id).unwrap_or_default())
        .map_err(|reason| invalid(SUBJECT_ID, reason))?;

    let student = NewStudent {
        name: StudentName::new(name).map_err(|e| invalid(STUDENT_NAME, e.to_string()))?,
        age: Age::new(age).map_err(|e| invalid(AGE, e.to_string()))?,
    };

    Ok(EnrollmentRequest::single(student, SubjectTag(subject_id)))
}

fn parse_int(raw: &str) -> Result<i64, String> {
    if raw.is_empty() {
        return Err("value is empty".to_owned());
    }
    raw.parse::<i64>()
        .map_err(|e| format!("'{}' is not an integer ({})", raw, e))
}
