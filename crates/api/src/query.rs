//! Query parameter types for API handlers.

use rocklms_core::course::CourseStatus;
use rocklms_core::error::CoreError;
use serde::Deserialize;

/// Query parameters for `GET /courses` (`?status=DRAFT`).
#[derive(Debug, Default, Deserialize)]
pub struct CourseListParams {
    pub status: Option<String>,
}

impl CourseListParams {
    /// Parse the optional status filter. A blank value means no filter.
    pub fn status_filter(&self) -> Result<Option<CourseStatus>, CoreError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(status: Option<&str>) -> CourseListParams {
        CourseListParams {
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn missing_or_blank_status_means_no_filter() {
        assert_eq!(params(None).status_filter().unwrap(), None);
        assert_eq!(params(Some("  ")).status_filter().unwrap(), None);
    }

    #[test]
    fn status_is_parsed() {
        assert_eq!(
            params(Some("published")).status_filter().unwrap(),
            Some(CourseStatus::Published)
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(params(Some("retired")).status_filter().is_err());
    }
}
