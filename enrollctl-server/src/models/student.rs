//! Student name and age validation

use serde::Deserialize;

use super::ValidationError;

/// Maximum length for student names, matching the VARCHAR(255) bound
const MAX_NAME_LEN: usize = 255;

/// Validated student name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentName(String);

impl StudentName {
    /// Create a new student name.
    ///
    /// # Rules
    /// - Must not be blank (whitespace only counts as empty)
    /// - Stored exactly as given
    /// - Max 255 characters
    ///
    /// # Example
    /// ```
    /// use enrollctl_server::models::StudentName;
    ///
    /// assert!(StudentName::new("Ann").is_ok());
    /// assert!(StudentName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if s.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StudentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated, non-negative age
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age(i64);

impl Age {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::OutOfRange {
                field: "age",
                min: 0,
                value,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// A student that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: StudentName,
    pub age: Age,
}

impl NewStudent {
    pub fn new(name: &str, age: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            name: StudentName::new(name)?,
            age: Age::new(age)?,
        })
    }
}

/// Student fields as they arrive over the wire
#[derive(Debug, Clone, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub age: i64,
}

impl TryFrom<StudentPayload> for NewStudent {
    type Error = ValidationError;

    fn try_from(payload: StudentPayload) -> Result<Self, Self::Error> {
        Self::new(&payload.name, payload.age)
    }
}
