//! Interoperability with raw validator output.
//!
//! Schema validators hand their reports over as JSON. This module converts
//! that raw shape (an object with an `errors` array) into the typed
//! [`Report`] / [`ErrorRecord`] model, normalizing the loosely-shaped parts
//! on the way in: a scalar `params` becomes a one-element sequence, and
//! `path` is copied verbatim whatever its shape, since rendering handles
//! non-string paths defensively.

use serde_json::Value;

use crate::record::{ErrorRecord, Report};

/// Errors that can occur while parsing raw validator output.
#[derive(Debug, thiserror::Error)]
pub enum ReportParseError {
    /// The top-level value has no `errors` array.
    #[error("report has no 'errors' array")]
    MissingErrors,

    /// An entry in an `errors` array is not an object.
    #[error("error at index {0} is not an object")]
    NotAnObject(usize),

    /// An error entry has no string `code` field.
    #[error("error at index {0} is missing a string 'code' field")]
    MissingCode(usize),

    /// An error entry's `message` or `description` is not a string.
    #[error("error at index {index} has a non-string '{field}' field")]
    NonStringField { index: usize, field: &'static str },

    /// An error entry's `inner` field is present but not an array.
    #[error("error at index {0} has a non-array 'inner' field")]
    InvalidInner(usize),
}

/// Parses a raw validator report.
///
/// # Errors
///
/// Returns a [`ReportParseError`] when the value is not shaped like a
/// report (see the individual variants).
///
/// # Example
///
/// ```rust
/// use debrief::{report_from_value, Reporter};
/// use serde_json::json;
///
/// let raw = json!({
///     "errors": [{
///         "code": "ENUM_MISMATCH",
///         "params": ["invalid_value"],
///         "path": "#/elements",
///         "description": "The elements"
///     }]
/// });
///
/// let report = report_from_value(&raw)?;
/// let message = Reporter::new().extract_message(&report);
/// assert!(message.contains("Invalid property \"invalid_value\""));
/// # Ok::<(), debrief::ReportParseError>(())
/// ```
pub fn report_from_value(value: &Value) -> Result<Report, ReportParseError> {
    let errors = value
        .get("errors")
        .and_then(Value::as_array)
        .ok_or(ReportParseError::MissingErrors)?;

    let records = errors
        .iter()
        .enumerate()
        .map(|(index, entry)| record_from_value_at(entry, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Report::new(records))
}

/// Parses a single raw error object.
///
/// # Errors
///
/// Returns a [`ReportParseError`] when the value is not an object, has no
/// string `code`, or carries malformed `message`/`description`/`inner`
/// fields. Reported indices refer to position zero since the record stands
/// alone here.
pub fn record_from_value(value: &Value) -> Result<ErrorRecord, ReportParseError> {
    record_from_value_at(value, 0)
}

fn record_from_value_at(value: &Value, index: usize) -> Result<ErrorRecord, ReportParseError> {
    let object = value
        .as_object()
        .ok_or(ReportParseError::NotAnObject(index))?;

    let code = object
        .get("code")
        .and_then(Value::as_str)
        .ok_or(ReportParseError::MissingCode(index))?;

    let message = optional_string(object.get("message"), index, "message")?;
    let description = optional_string(object.get("description"), index, "description")?;

    let params = match object.get("params") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries.clone(),
        Some(scalar) => vec![scalar.clone()],
    };

    let inner = match object.get("inner") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(inner_index, entry)| record_from_value_at(entry, inner_index))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ReportParseError::InvalidInner(index)),
    };

    let mut record = ErrorRecord::new(code);
    record.path = object.get("path").cloned();
    record.message = message;
    record.description = description;
    record.params = params;
    record.inner = inner;
    Ok(record)
}

fn optional_string(
    value: Option<&Value>,
    index: usize,
    field: &'static str,
) -> Result<Option<String>, ReportParseError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ReportParseError::NonStringField { index, field }),
    }
}
