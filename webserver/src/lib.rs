//! HTTP front end for the mentorship service
//!
//! Validates requests, hands them to the mentorship engine and renders
//! results and errors as JSON.

pub mod error;
pub mod state;
pub mod types;
pub mod validation;
pub mod web;
pub mod webserver_impl;

pub use error::{ApiError, ErrorBody, WebServerError, WebServerResult};
pub use state::AppState;
pub use types::*;
pub use webserver_impl::WebServer;
