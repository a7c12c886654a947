//! RockLMS domain core.
//!
//! Holds the course entity, its lifecycle rules, and the service that
//! orchestrates them over a [`course_service::CourseRepository`]. This crate
//! has no database dependency so the rules can be exercised in isolation.

pub mod course;
pub mod course_service;
pub mod error;
pub mod types;
