//! Request handlers.
//!
//! Handlers delegate to the services held in [`crate::state::AppState`] and
//! map errors via [`crate::error::AppError`].

pub mod course;
