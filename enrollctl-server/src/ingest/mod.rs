//! Ingress decoding: external formats into `EnrollmentRequest`
//!
//! Nothing here touches the database. Every input is fully decoded and
//! validated before a write starts.

pub mod csv;
pub mod payload;

pub use self::csv::{parse_enrollments, CsvError};
pub use payload::{EnrollmentPayload, SubjectPayload};
