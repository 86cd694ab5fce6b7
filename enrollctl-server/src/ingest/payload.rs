//! Structured JSON payload for enrollment

use serde::Deserialize;

use crate::models::{EnrollmentRequest, NewStudent, StudentPayload, SubjectTag, ValidationError};

/// Subject entry in a payload
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectPayload {
    pub subject_id: i64,
}

/// `{student: {name, age}, subjects: [{subject_id}, ...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentPayload {
    pub student: StudentPayload,
    pub subjects: Vec<SubjectPayload>,
}

impl TryFrom<EnrollmentPayload> for EnrollmentRequest {
    type Error = ValidationError;

    fn try_from(payload: EnrollmentPayload) -> Result<Self, Self::Error> {
        let student = NewStudent::try_from(payload.student)?;
        let subjects = payload
            .subjects
            .into_iter()
            .map(|s| SubjectTag(s.subject_id))
            .collect();
        Ok(Self::new(student, subjects))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<EnrollmentRequest, ValidationError> {
        let payload: EnrollmentPayload = serde_json::from_str(json).expect("valid json");
        EnrollmentRequest::try_from(payload)
    }

    #[test]
    fn decodes_payload_in_order() {
        let request = decode(
            r#"{"student":{"name":"Ann","age":20},"subjects":[{"subject_id":5},{"subject_id":3},{"subject_id":5}]}"#,
        )
        .unwrap();

        assert_eq!(request.student.name.as_str(), "Ann");
        assert_eq!(request.student.age.get(), 20);
        assert_eq!(
            request.subjects,
            vec![SubjectTag(5), SubjectTag(3), SubjectTag(5)]
        );
    }

    #[test]
    fn empty_subject_list_is_valid() {
        let request = decode(r#"{"student":{"name":"Ann","age":20},"subjects":[]}"#).unwrap();
        assert!(request.subjects.is_empty());
    }

    #[test]
    fn rejects_negative_age() {
        let err = decode(r#"{"student":{"name":"Ann","age":-1},"subjects":[]}"#).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "age", .. }));
    }

    #[test]
    fn type_mismatch_fails_to_deserialize() {
        let result: Result<EnrollmentPayload, _> = serde_json::from_str(
            r#"{"student":{"name":"Ann","age":"twenty"},"subjects":[]}"#,
        );
        assert!(result.is_err());

        let result: Result<EnrollmentPayload, _> =
            serde_json::from_str(r#"{"student":{"name":"Ann","age":20}}"#);
        assert!(result.is_err());
    }
}
