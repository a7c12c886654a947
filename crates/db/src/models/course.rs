//! Course row model.

use rocklms_core::course::{Course, CourseStatus};
use rocklms_core::error::CoreError;
use rocklms_core::types::{DbId, StatusId, Timestamp};
use sqlx::FromRow;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow)]
pub struct CourseRow {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub status_id: StatusId,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<CourseRow> for Course {
    type Error = CoreError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        Ok(Course {
            id: Some(row.id),
            title: row.title,
            description: row.description,
            duration: row.duration,
            status: CourseStatus::try_from(row.status_id)?,
            published_at: row.published_at,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;

    fn row(status_id: StatusId) -> CourseRow {
        let now = Utc::now();
        CourseRow {
            id: 5,
            title: Some("Intro".into()),
            description: None,
            duration: Some(30),
            status_id,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_converts_to_course() {
        let course = Course::try_from(row(2)).unwrap();
        assert_eq!(course.id, Some(5));
        assert_eq!(course.status, CourseStatus::Published);
        assert_eq!(course.duration, Some(30));
        assert!(course.created_at.is_some());
    }

    #[test]
    fn unknown_status_id_fails_conversion() {
        assert_matches!(Course::try_from(row(42)), Err(CoreError::Validation(_)));
    }
}
