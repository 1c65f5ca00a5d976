//! Validation error records and reports.
//!
//! This module provides [`ErrorRecord`] for single validation failures as
//! emitted by a schema validator, and [`Report`] for an ordered collection
//! of them. Both are plain data: the reporter reads them, never mutates them.

use serde_json::Value;

/// A single validation failure.
///
/// `ErrorRecord` carries everything the reporter needs to render a message:
/// - **code**: Machine-readable error code selecting the message template
/// - **path**: Where in the data structure the error occurred (optional)
/// - **message**: Human-readable description from the validator (optional)
/// - **description**: Annotation of the target property (optional)
/// - **params**: Positional values for `{params[N]}` placeholders
/// - **inner**: Nested sub-failures (e.g. alternatives that all failed)
///
/// The `path` is kept as a raw [`Value`] rather than a string because
/// validators have been observed to emit non-string paths (such as an empty
/// array); rendering degrades to an empty display value in that case instead
/// of failing.
///
/// # Example
///
/// ```rust
/// use debrief::ErrorRecord;
///
/// let error = ErrorRecord::new("ENUM_MISMATCH")
///     .with_param("invalid_value")
///     .with_path("#/elements")
///     .with_description("The elements");
///
/// assert_eq!(error.code, "ENUM_MISMATCH");
/// assert_eq!(error.params.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    /// Error code selecting the template (e.g. `ENUM_MISMATCH`).
    pub code: String,
    /// Slash-delimited locator (e.g. `#/users/0/email`), or any raw value.
    pub path: Option<Value>,
    /// Free-text description of the failure.
    pub message: Option<String>,
    /// Free-text annotation of the target property.
    pub description: Option<String>,
    /// Ordered positional substitution values.
    pub params: Vec<Value>,
    /// Nested sub-failures; empty when there are none.
    pub inner: Vec<ErrorRecord>,
}

impl ErrorRecord {
    /// Creates a record with the given code and no other fields set.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            path: None,
            message: None,
            description: None,
            params: Vec::new(),
            inner: Vec::new(),
        }
    }

    /// Sets the path from a locator string and returns self for chaining.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(Value::String(path.into()));
        self
    }

    /// Sets the path from a raw value, preserving whatever shape the
    /// validator emitted.
    pub fn with_raw_path(mut self, path: Value) -> Self {
        self.path = Some(path);
        self
    }

    /// Sets the message and returns self for chaining.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the description and returns self for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends one positional param and returns self for chaining.
    pub fn with_param(mut self, param: impl Into<Value>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Replaces the positional params and returns self for chaining.
    pub fn with_params(mut self, params: Vec<Value>) -> Self {
        self.params = params;
        self
    }

    /// Sets the nested sub-failures and returns self for chaining.
    pub fn with_inner(mut self, inner: Vec<ErrorRecord>) -> Self {
        self.inner = inner;
        self
    }
}

/// An ordered collection of validation failures.
///
/// A `Report` is what a validator hands over after checking a document:
/// zero or more top-level [`ErrorRecord`]s, in the order they were found.
///
/// # Example
///
/// ```rust
/// use debrief::{ErrorRecord, Report};
///
/// let report = Report::new(vec![
///     ErrorRecord::new("INVALID_TYPE").with_path("#/age"),
///     ErrorRecord::new("INVALID_FORMAT").with_path("#/email"),
/// ]);
///
/// assert_eq!(report.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    /// The top-level errors, in validator order.
    pub errors: Vec<ErrorRecord>,
}

impl Report {
    /// Creates a report from a list of errors.
    pub fn new(errors: Vec<ErrorRecord>) -> Self {
        Self { errors }
    }

    /// Creates a report containing a single error.
    pub fn single(error: ErrorRecord) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Returns the number of top-level errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if the report contains no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns an iterator over the top-level errors.
    pub fn iter(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.errors.iter()
    }

    /// Appends an error to the report.
    pub fn push(&mut self, error: ErrorRecord) {
        self.errors.push(error);
    }
}

impl From<Vec<ErrorRecord>> for Report {
    fn from(errors: Vec<ErrorRecord>) -> Self {
        Self::new(errors)
    }
}

impl From<ErrorRecord> for Report {
    fn from(error: ErrorRecord) -> Self {
        Self::single(error)
    }
}

// ErrorRecord and Report are Send + Sync since all fields are owned data
// (String, Vec, serde_json::Value). Asserted so this stays true if the
// types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorRecord>();
    assert_sync::<ErrorRecord>();
    assert_send::<Report>();
    assert_sync::<Report>();
};
