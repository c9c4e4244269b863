use serde::{Deserialize, Serialize};
use std::fmt;

use crate::form::REQUIRED_FIELDS_MESSAGE;

pub const CODE_REQUIRED_FIELDS: &str = "VALIDATION_REQUIRED_FIELDS";
pub const CODE_FORM_NOT_OPEN: &str = "FORM_NOT_OPEN";
pub const CODE_SEVERITY_UNKNOWN: &str = "PARSE_SEVERITY_UNKNOWN";
pub const CODE_SORT_ORDER_UNKNOWN: &str = "PARSE_SORT_ORDER_UNKNOWN";
pub const CODE_SEED_TIMESTAMP_INVALID: &str = "SEED_TIMESTAMP_INVALID";

/// Error returned by the dashboard core. `message` is what the UI shows inline.
///
/// `code` is one of the `CODE_*` constants; `details` carries the offending input when there
/// is one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl AppError {
    fn coded(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn with_value(mut self, value: impl fmt::Display) -> Self {
        self.details = Some(format!("value={value}"));
        self
    }

    /// Submit attempted with an empty title or description, or no severity.
    pub fn required_fields() -> Self {
        Self::coded(CODE_REQUIRED_FIELDS, REQUIRED_FIELDS_MESSAGE)
    }

    pub fn form_not_open() -> Self {
        Self::coded(CODE_FORM_NOT_OPEN, "Incident form is not open")
    }

    pub fn unknown_severity(label: &str) -> Self {
        Self::coded(CODE_SEVERITY_UNKNOWN, "Unknown severity label").with_value(label)
    }

    pub fn unknown_sort_order(label: &str) -> Self {
        Self::coded(CODE_SORT_ORDER_UNKNOWN, "Unknown sort order").with_value(label)
    }

    pub fn seed_timestamp_invalid(id: i64, raw: &str) -> Self {
        let mut err = Self::coded(CODE_SEED_TIMESTAMP_INVALID, "Invalid demo seed timestamp");
        err.details = Some(format!("id={id}; value={raw}"));
        err
    }

    /// True for errors the entry form shows inline and the user can fix by editing.
    pub fn is_validation(&self) -> bool {
        self.code == CODE_REQUIRED_FIELDS
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}
