//! The message reporter: renders validation reports into readable text.
//!
//! This module provides the [`Reporter`] type that holds the merged
//! configuration (message templates, field extractors, context message) and
//! turns a [`Report`] into a single human-readable string.

use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use crate::extract::{default_extractors, Extractor, ExtractorArgs};
use crate::record::{ErrorRecord, Report};
use crate::template::{strip_markers, substitute_field, CONTEXT_PLACEHOLDER};

/// Template used when an error code has no dedicated entry.
pub const DEFAULT_CODE: &str = "DEFAULT";

/// Separator between distinct top-level messages.
const ALSO_SEPARATOR: &str = " (also) ";

/// Fixed substitution fields, processed in this order before positional
/// params. Order matters: removing an optional section can swallow
/// placeholders of fields processed later.
const FIXED_FIELDS: [&str; 4] = ["path", "description", "message", "inner"];

const DEFAULT_CONTEXT_MESSAGE: &str = "An error occurred";

const DEFAULT_TEMPLATES: [(&str, &str); 3] = [
    (
        DEFAULT_CODE,
        "{context} '{message}'{^path} on property {path}{^description} ({description}){$description}{$path}.",
    ),
    (
        "ENUM_MISMATCH",
        "{context} 'Invalid property \"{params[0]}\"'{^path} on property {path}{^description} ({description}){$description}{$path}.",
    ),
    (
        "OBJECT_DEPENDENCY_KEY",
        "{context} 'Property {params[0]} is mandatory if property {params[1]} is included'.",
    ),
];

/// Renders validation reports into human-readable messages.
///
/// A `Reporter` is built once with its configuration and is immutable
/// afterwards; rendering is a pure function of the report, the context, and
/// that configuration, so a reporter can be shared freely across threads.
///
/// Construction seeds built-in defaults (templates for `DEFAULT`,
/// `ENUM_MISMATCH`, and `OBJECT_DEPENDENCY_KEY`; extractors for `path`,
/// `message`, `description`, and `params`; a generic context message) and
/// the `with_*` methods override one key at a time, leaving every other
/// default in place.
///
/// # Example
///
/// ```rust
/// use debrief::{ErrorRecord, Report, Reporter};
///
/// let reporter = Reporter::new()
///     .with_template("INVALID_TYPE", "{path} has an invalid type. Error: {message}")
///     .with_context_message("Validation failed");
///
/// let report = Report::single(
///     ErrorRecord::new("INVALID_TYPE")
///         .with_path("#/items/0")
///         .with_message("Expected type number but found type string"),
/// );
///
/// assert_eq!(
///     reporter.extract_message(&report),
///     "items[0] has an invalid type. Error: Expected type number but found type string"
/// );
/// ```
#[derive(Clone)]
pub struct Reporter {
    templates: IndexMap<String, String>,
    extractors: IndexMap<String, Extractor>,
    context_message: String,
}

impl Reporter {
    /// Creates a reporter with the built-in default configuration.
    pub fn new() -> Self {
        let templates = DEFAULT_TEMPLATES
            .iter()
            .map(|(code, template)| (code.to_string(), template.to_string()))
            .collect();

        Self {
            templates,
            extractors: default_extractors(),
            context_message: DEFAULT_CONTEXT_MESSAGE.to_string(),
        }
    }

    /// Sets the template for one error code, keeping all other templates.
    pub fn with_template(
        mut self,
        code: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.templates.insert(code.into(), template.into());
        self
    }

    /// Sets the extractor for one field, keeping all other extractors.
    pub fn with_extractor<F>(mut self, field: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&ExtractorArgs<'_>) -> String + Send + Sync + 'static,
    {
        self.extractors.insert(field.into(), Arc::new(extractor));
        self
    }

    /// Sets the text substituted for the `{context}` placeholder.
    pub fn with_context_message(mut self, message: impl Into<String>) -> Self {
        self.context_message = message.into();
        self
    }

    /// Renders a report into one string, with no call context.
    ///
    /// Equivalent to [`extract_message_with`](Self::extract_message_with)
    /// passing `Value::Null` as the context.
    pub fn extract_message(&self, report: &Report) -> String {
        self.extract_message_with(report, &Value::Null)
    }

    /// Renders a report into one string.
    ///
    /// Each top-level error renders through its template; duplicate rendered
    /// strings are suppressed (first occurrence keeps its position) and the
    /// survivors join with `" (also) "`. The context value is handed to
    /// every extractor invocation, including within recursive inner-error
    /// rendering.
    pub fn extract_message_with(&self, report: &Report, context: &Value) -> String {
        self.render_errors(&report.errors, context)
    }

    /// Renders a single error record.
    ///
    /// This is the building block `extract_message` applies to every
    /// top-level record and, recursively, to nested `inner` records.
    pub fn format_record(&self, error: &ErrorRecord, context: &Value) -> String {
        let template = self
            .templates
            .get(error.code.as_str())
            .or_else(|| self.templates.get(DEFAULT_CODE))
            .cloned()
            .unwrap_or_default();

        // Inner errors render as a sub-report with the same context; the
        // joined result becomes the {inner} display value.
        let inner = if error.inner.is_empty() {
            String::new()
        } else {
            self.render_errors(&error.inner, context)
        };

        let mut current = template;
        for field in FIXED_FIELDS {
            let value = match field {
                "inner" => inner.clone(),
                _ => self.fixed_display(field, error, context),
            };
            current = substitute_field(current, field, field, &value);
        }

        for (index, entry) in error.params.iter().enumerate() {
            let value = self.param_display(entry, index, context);
            let placeholder_name = format!("params[{index}]");
            current = substitute_field(current, &placeholder_name, "params", &value);
        }

        let current = current.replace(CONTEXT_PLACEHOLDER, &self.context_message);
        strip_markers(&current)
    }

    fn render_errors(&self, errors: &[ErrorRecord], context: &Value) -> String {
        let mut distinct: IndexSet<String> = IndexSet::new();
        for error in errors {
            distinct.insert(self.format_record(error, context));
        }
        distinct.into_iter().collect::<Vec<_>>().join(ALSO_SEPARATOR)
    }

    /// Display value for a fixed field: empty when the record has no
    /// non-empty value, otherwise whatever the field's extractor returns.
    fn fixed_display(&self, field: &str, error: &ErrorRecord, context: &Value) -> String {
        let owned;
        let raw = match field {
            "path" => match &error.path {
                Some(path) => path,
                None => return String::new(),
            },
            "message" => match &error.message {
                Some(message) => {
                    owned = Value::String(message.clone());
                    &owned
                }
                None => return String::new(),
            },
            "description" => match &error.description {
                Some(description) => {
                    owned = Value::String(description.clone());
                    &owned
                }
                None => return String::new(),
            },
            _ => return String::new(),
        };

        if raw.is_null() || raw.as_str().is_some_and(str::is_empty) {
            return String::new();
        }

        match self.extractors.get(field) {
            Some(extractor) => extractor(&ExtractorArgs {
                raw,
                index: None,
                context,
            }),
            None => String::new(),
        }
    }

    fn param_display(&self, entry: &Value, index: usize, context: &Value) -> String {
        match self.extractors.get("params") {
            Some(extractor) => extractor(&ExtractorArgs {
                raw: entry,
                index: Some(index),
                context,
            }),
            None => String::new(),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("templates", &self.templates.keys().collect::<Vec<_>>())
            .field("extractors", &self.extractors.keys().collect::<Vec<_>>())
            .field("context_message", &self.context_message)
            .finish()
    }
}

// Reporter is Send + Sync: templates and the context message are owned
// strings, extractors are Arc<dyn Fn + Send + Sync>.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Reporter>();
    assert_sync::<Reporter>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_seeded() {
        let reporter = Reporter::new();
        for code in ["DEFAULT", "ENUM_MISMATCH", "OBJECT_DEPENDENCY_KEY"] {
            assert!(reporter.templates.contains_key(code), "missing template: {code}");
        }
        for field in ["path", "message", "description", "params"] {
            assert!(
                reporter.extractors.contains_key(field),
                "missing extractor: {field}"
            );
        }
        assert_eq!(reporter.context_message, "An error occurred");
    }

    #[test]
    fn test_with_template_overrides_single_key() {
        let reporter = Reporter::new().with_template("ENUM_MISMATCH", "custom");

        assert_eq!(reporter.templates["ENUM_MISMATCH"], "custom");
        // Other defaults stay intact
        assert!(reporter.templates["DEFAULT"].starts_with("{context}"));
    }

    #[test]
    fn test_with_extractor_overrides_single_key() {
        let reporter = Reporter::new().with_extractor("description", |_| "fixed".to_string());

        assert_eq!(reporter.extractors.len(), 4);
        let raw = serde_json::json!("anything");
        let args = ExtractorArgs {
            raw: &raw,
            index: None,
            context: &Value::Null,
        };
        assert_eq!(reporter.extractors["description"](&args), "fixed");
        assert_eq!(reporter.extractors["message"](&args), "anything");
    }

    #[test]
    fn test_with_context_message() {
        let reporter = Reporter::new().with_context_message("Error!!!");
        assert_eq!(reporter.context_message, "Error!!!");
    }

    #[test]
    fn test_empty_report_renders_empty() {
        let reporter = Reporter::new();
        assert_eq!(reporter.extract_message(&Report::default()), "");
    }

    #[test]
    fn test_unknown_code_falls_back_to_default_template() {
        let reporter = Reporter::new();
        let report = Report::single(
            ErrorRecord::new("NEVER_HEARD_OF_IT").with_message("something failed"),
        );
        assert_eq!(
            reporter.extract_message(&report),
            "An error occurred 'something failed'."
        );
    }

    #[test]
    fn test_debug_lists_configuration() {
        let debug = format!("{:?}", Reporter::new());
        assert!(debug.contains("DEFAULT"));
        assert!(debug.contains("path"));
        assert!(debug.contains("An error occurred"));
    }
}
