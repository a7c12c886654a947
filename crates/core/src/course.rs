//! Course entity and its lifecycle rules.
//!
//! A course starts as a draft, can be edited and published while it is not
//! archived, and can be archived from any state. Archived courses are
//! read-only apart from deletion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, StatusId, Timestamp};

/// Entity name used in `NotFound` errors.
pub const COURSE_ENTITY: &str = "Course";

/// Minimum duration (minutes) a course needs before it can be published.
pub const MIN_PUBLISHABLE_DURATION: i32 = 1;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Course lifecycle status.
///
/// Discriminants match the seed data order (1-based) of the
/// `course_statuses` lookup table.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    Draft = 1,
    Published = 2,
    Archived = 3,
}

impl CourseStatus {
    /// All statuses in seed order.
    pub const ALL: [CourseStatus; 3] = [
        CourseStatus::Draft,
        CourseStatus::Published,
        CourseStatus::Archived,
    ];

    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Upper-case name used on the wire and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            CourseStatus::Draft => "DRAFT",
            CourseStatus::Published => "PUBLISHED",
            CourseStatus::Archived => "ARCHIVED",
        }
    }
}

impl From<CourseStatus> for StatusId {
    fn from(value: CourseStatus) -> Self {
        value as StatusId
    }
}

impl TryFrom<StatusId> for CourseStatus {
    type Error = CoreError;

    fn try_from(value: StatusId) -> Result<Self, Self::Error> {
        CourseStatus::ALL
            .into_iter()
            .find(|s| s.id() == value)
            .ok_or_else(|| CoreError::Validation(format!("Unknown course status id {value}")))
    }
}

impl FromStr for CourseStatus {
    type Err = CoreError;

    /// Parse a status name case-insensitively (`draft`, `DRAFT`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid course status '{s}'. Must be one of: DRAFT, PUBLISHED, ARCHIVED"
                ))
            })
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A learning course record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    /// Assigned by the persistence layer; `None` until first saved.
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Length of the course in minutes.
    pub duration: Option<i32>,
    pub status: CourseStatus,
    /// Set on every transition to `PUBLISHED`, never cleared.
    pub published_at: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// Input for creating a course. No field is validated until publication.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
}

/// Partial update. Only fields that are `Some` are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
}

impl CourseChanges {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.duration.is_none()
    }
}

impl Course {
    /// Build an unsaved draft course.
    pub fn new(input: NewCourse) -> Self {
        Self {
            id: None,
            title: input.title,
            description: input.description,
            duration: input.duration,
            status: CourseStatus::Draft,
            published_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Archived courses cannot be edited.
    pub fn can_be_edited(&self) -> bool {
        self.status != CourseStatus::Archived
    }

    /// Apply the present fields of `changes`.
    ///
    /// Fails with `InvalidState` on an archived course even when `changes`
    /// is empty.
    pub fn apply_changes(&mut self, changes: CourseChanges) -> Result<(), CoreError> {
        if !self.can_be_edited() {
            return Err(CoreError::InvalidState("Cannot edit archived course".into()));
        }
        if let Some(title) = changes.title {
            self.title = Some(title);
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(duration) = changes.duration {
            self.duration = Some(duration);
        }
        Ok(())
    }

    /// Check that the course may move to `PUBLISHED`.
    ///
    /// Rules are checked in order: non-blank title, duration of at least
    /// [`MIN_PUBLISHABLE_DURATION`], not archived.
    pub fn validate_for_publication(&self) -> Result<(), CoreError> {
        if self.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
            return Err(CoreError::InvalidState(
                "Cannot publish course: title is required".into(),
            ));
        }
        if self.duration.map_or(true, |d| d < MIN_PUBLISHABLE_DURATION) {
            return Err(CoreError::InvalidState(
                "Cannot publish course: duration must be greater than 0".into(),
            ));
        }
        if self.status == CourseStatus::Archived {
            return Err(CoreError::InvalidState("Cannot publish archived course".into()));
        }
        Ok(())
    }

    /// Validate and move to `PUBLISHED`, stamping `published_at` with `now`.
    pub fn publish(&mut self, now: Timestamp) -> Result<(), CoreError> {
        self.validate_for_publication()?;
        self.status = CourseStatus::Published;
        self.published_at = Some(now);
        Ok(())
    }

    /// Move to `ARCHIVED` from any state.
    pub fn archive(&mut self) {
        self.status = CourseStatus::Archived;
    }
}
