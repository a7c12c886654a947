//! Repository layer.
//!
//! Each repository wraps a `PgPool` and implements the matching
//! persistence trait from `rocklms_core`.

pub mod course_repo;

pub use course_repo::PgCourseRepository;
