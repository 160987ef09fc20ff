//! HTTP request handling

pub mod handlers;
