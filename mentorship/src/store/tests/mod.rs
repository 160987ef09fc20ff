//! Repository tests
//!
//! Each backend has its own test file; both share the fixtures and helpers
//! below.

pub mod helpers;
