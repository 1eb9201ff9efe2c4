//! # Trivia REST API Module
//!
//! HTTP handlers for the trivia domain: category listing, paginated question
//! listing, search, creation, deletion, per-category listing and quiz play.
//! Every failure is rendered through [`ApiError`] as
//! `{"success": false, "error": <code>, "message": <text>}`.

pub mod errors;
pub mod pagination;
pub mod request;
pub mod response;
pub mod routes;
pub mod state;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use pagination::{PageWindow, QUESTIONS_PER_PAGE};
pub use routes::trivia_routes;
pub use state::TriviaState;
