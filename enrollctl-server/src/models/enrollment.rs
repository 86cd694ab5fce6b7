//! Canonical enrollment request shared by every ingress path

use super::NewStudent;

/// Subject tag attached to an enrollment.
///
/// Not a key into any catalog: the same value may appear on any number of
/// subject rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectTag(pub i64);

impl SubjectTag {
    pub fn get(self) -> i64 {
        self.0
    }
}

/// One student plus the subjects to enroll them in, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRequest {
    pub student: NewStudent,
    pub subjects: Vec<SubjectTag>,
}

impl EnrollmentRequest {
    pub fn new(student: NewStudent, subjects: Vec<SubjectTag>) -> Self {
        Self { student, subjects }
    }

    /// Request for a single student enrolled in a single subject.
    pub fn single(student: NewStudent, subject: SubjectTag) -> Self {
        Self {
            student,
            subjects: vec![subject],
        }
    }
}
