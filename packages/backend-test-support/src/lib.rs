//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: logging
//! initialization and assertions on problem-details error bodies.

pub mod logging;
pub mod problem_details;

pub use problem_details::assert_problem_details;
