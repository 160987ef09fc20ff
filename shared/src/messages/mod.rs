//! Command payloads handed from the request layer to the core
//!
//! The request layer validates and normalizes raw input before building
//! these; the core treats their contents as already trimmed and escaped.

pub mod registration;

pub use registration::{NewMentor, NewStudent};
