//! trivia - A question bank and quiz API
//!
//! Categories and questions live in a [`store::TriviaStore`]; the
//! [`rest_api`] handlers expose them over HTTP and [`quiz`] serves random
//! unseen questions.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod quiz;
pub mod rest_api;
pub mod store;
