//! Common test utilities for mentorship test suites

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{TestHelpers, World};
