//! Request validation
//!
//! Collects every field failure for a request instead of stopping at the
//! first one. Text fields are trimmed, checked, then HTML-escaped before
//! they reach the core.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ApiError;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("valid email regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Replace HTML-significant characters with entities
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn is_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Required free-text field
    pub fn text(&mut self, field: &str, value: Option<&str>) -> String {
        let trimmed = value.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            self.reject(field, "must not be empty");
        }
        escape_html(trimmed)
    }

    /// Required email field
    pub fn email(&mut self, field: &str, value: Option<&str>) -> String {
        let trimmed = value.map(str::trim).unwrap_or_default();
        if !is_email(trimmed) {
            self.reject(field, "must be a valid email address");
        }
        escape_html(trimmed)
    }

    /// Required non-empty list of identifiers
    pub fn id_list<T: FromStr>(&mut self, field: &str, values: Option<&[String]>) -> Vec<T> {
        let values = values.unwrap_or_default();
        if values.is_empty() {
            self.reject(field, "must be a non-empty array");
            return Vec::new();
        }

        let mut parsed = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            match value.parse() {
                Ok(id) => parsed.push(id),
                Err(_) => self.reject(&format!("{field}[{index}]"), "must be a valid UUID"),
            }
        }
        parsed
    }

    /// Fail with every collected error, if any
    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(self.errors))
        }
    }
}
