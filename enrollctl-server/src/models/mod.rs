//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod enrollment;
pub mod pagination;
pub mod student;
pub mod validation;

pub use enrollment::{EnrollmentRequest, SubjectTag};
pub use pagination::{OffsetLimit, OffsetLimitParams};
pub use student::{Age, NewStudent, StudentName, StudentPayload};
pub use validation::ValidationError;
