//! Shared types for the mentorship service
//!
//! Holds what both the core and the request layer need: identifier
//! newtypes, registration commands, the shared error type and the
//! tracing setup used by every binary.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{NewMentor, NewStudent};
