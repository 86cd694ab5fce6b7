//! Offset/limit pagination for list endpoints

use serde::Deserialize;

use super::ValidationError;

/// Default rows per request
const DEFAULT_LIMIT: u32 = 10;

/// Pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetLimit {
    /// Rows to skip
    pub skip: u32,
    /// Rows to return, at least 1
    pub limit: u32,
}

impl OffsetLimit {
    /// Create a window; `limit` must be positive.
    pub fn new(skip: u32, limit: u32) -> Result<Self, ValidationError> {
        if limit == 0 {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 1,
                value: 0,
            });
        }
        Ok(Self { skip, limit })
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        i64::from(self.skip)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

impl Default for OffsetLimit {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for pagination
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OffsetLimitParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl TryFrom<OffsetLimitParams> for OffsetLimit {
    type Error = ValidationError;

    fn try_from(params: OffsetLimitParams) -> Result<Self, Self::Error> {
        Self::new(
            params.skip.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = OffsetLimit::try_from(OffsetLimitParams::default()).unwrap();
        assert_eq!(p, OffsetLimit::default());
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), 10);
    }

    #[test]
    fn honors_large_limit() {
        let p = OffsetLimit::try_from(OffsetLimitParams {
            skip: None,
            limit: Some(150),
        })
        .unwrap();
        assert_eq!(p.limit(), 150);
        assert_eq!(OffsetLimit::new(0, 25).unwrap().limit, 25);
    }

    #[test]
    fn rejects_zero_limit() {
        let err = OffsetLimit::try_from(OffsetLimitParams {
            skip: Some(3),
            limit: Some(0),
        })
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "limit",
                min: 1,
                value: 0
            }
        );
    }

    #[test]
    fn keeps_skip() {
        let p = OffsetLimit::try_from(OffsetLimitParams {
            skip: Some(40),
            limit: None,
        })
        .unwrap();
        assert_eq!(p.offset(), 40);
    }
}
