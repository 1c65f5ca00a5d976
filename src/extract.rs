//! Field extractors that turn raw error fields into display strings.
//!
//! An extractor is a function from a raw field value (plus the positional
//! index for params and the caller-supplied context) to the string that gets
//! substituted into a template. The built-in extractors cover `path`,
//! `message`, `description`, and `params`; callers can override any of them
//! per key via `Reporter::with_extractor`.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

/// Arguments handed to an extractor.
pub struct ExtractorArgs<'a> {
    /// The raw field value from the error record.
    pub raw: &'a Value,
    /// The positional index, set only for `params[N]` fields.
    pub index: Option<usize>,
    /// The opaque context value supplied to the `extract_message` call.
    pub context: &'a Value,
}

/// A field extractor: raw value in, display string out.
///
/// Extractors are stored behind `Arc` so a [`crate::Reporter`] stays cheap
/// to clone and safe to share across threads.
pub type Extractor = Arc<dyn Fn(&ExtractorArgs<'_>) -> String + Send + Sync>;

/// Renders a raw value as display text.
///
/// Strings render without quotes, `null` renders as empty (which downstream
/// triggers optional-section removal), and everything else renders as its
/// JSON text.
///
/// # Example
///
/// ```rust
/// use debrief::display_value;
/// use serde_json::json;
///
/// assert_eq!(display_value(&json!("verify_email")), "verify_email");
/// assert_eq!(display_value(&json!(42)), "42");
/// assert_eq!(display_value(&json!(null)), "");
/// ```
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Normalizes a validator locator into property-access notation.
///
/// The leading two-character marker (conventionally `#/`) is dropped,
/// `/`-delimited segments become `.`-delimited property access, and an
/// all-numeric segment becomes array-index notation:
///
/// ```rust
/// use debrief::normalize_path;
/// use serde_json::json;
///
/// assert_eq!(normalize_path(&json!("#/parent/child/letterA")), "parent.child.letterA");
/// assert_eq!(normalize_path(&json!("#/items/0")), "items[0]");
/// ```
///
/// Non-string values (validators have been seen emitting an empty array
/// here) produce an empty string rather than an error.
pub fn normalize_path(raw: &Value) -> String {
    let Some(path) = raw.as_str() else {
        return String::new();
    };
    let trimmed = path.get(2..).unwrap_or("");

    let mut out = String::with_capacity(trimmed.len());
    for (i, segment) in trimmed.split('/').enumerate() {
        let numeric = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
        if i > 0 && numeric {
            out.push('[');
            out.push_str(segment);
            out.push(']');
        } else {
            if i > 0 {
                out.push('.');
            }
            out.push_str(segment);
        }
    }
    out
}

/// The built-in extractor set, keyed by field name.
pub(crate) fn default_extractors() -> IndexMap<String, Extractor> {
    let mut extractors: IndexMap<String, Extractor> = IndexMap::new();
    extractors.insert(
        "path".to_string(),
        Arc::new(|args: &ExtractorArgs<'_>| normalize_path(args.raw)),
    );
    extractors.insert(
        "message".to_string(),
        Arc::new(|args: &ExtractorArgs<'_>| display_value(args.raw)),
    );
    extractors.insert(
        "description".to_string(),
        Arc::new(|args: &ExtractorArgs<'_>| display_value(args.raw)),
    );
    extractors.insert(
        "params".to_string(),
        Arc::new(|args: &ExtractorArgs<'_>| display_value(args.raw)),
    );
    extractors
}
