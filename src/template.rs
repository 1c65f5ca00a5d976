//! Message template substitution.
//!
//! A template is a literal string containing `{field}` placeholders and
//! optional sections delimited by `{^field}` open markers and `{$field}`
//! close markers. Substitution replaces a placeholder with its display
//! value; when the value is empty, the enclosing optional section is removed
//! instead, so templates can carry punctuation and connective text that only
//! appears when the field does.
//!
//! Marker pairing is deliberately best effort: the open marker is the
//! nearest one at or before the placeholder, the close marker the nearest
//! one after it. Templates with unpaired or out-of-order markers are never
//! rejected; the text is left intact and stray markers are stripped at the
//! end. Templates with multiple optional sections naming the same field rely
//! on this nearest-marker behavior.

use std::sync::OnceLock;

use regex::Regex;

/// The token replaced by the reporter's configured context message.
pub const CONTEXT_PLACEHOLDER: &str = "{context}";

fn marker_pattern() -> &'static Regex {
    static MARKERS: OnceLock<Regex> = OnceLock::new();
    MARKERS.get_or_init(|| Regex::new(r"\{[\^$][a-zA-Z]+\}").expect("marker pattern is valid"))
}

/// Substitutes one field into a template.
///
/// `placeholder_name` is the token between braces (`path`, `params[0]`),
/// `section_name` the name used by the surrounding optional-section markers
/// (`params[N]` placeholders share the `params` section name).
///
/// With a non-empty value the first `{placeholder_name}` occurrence is
/// replaced. With an empty value the optional section enclosing the
/// placeholder is removed (up to but not including the close marker, which
/// the final [`strip_markers`] pass consumes); if no section encloses it,
/// the bare placeholder itself is removed.
pub fn substitute_field(
    current: String,
    placeholder_name: &str,
    section_name: &str,
    value: &str,
) -> String {
    let placeholder = format!("{{{placeholder_name}}}");

    if !value.is_empty() {
        return current.replacen(&placeholder, value, 1);
    }

    let Some(at) = current.find(&placeholder) else {
        return current;
    };
    let after = at + placeholder.len();

    let open = format!("{{^{section_name}}}");
    let close = format!("{{${section_name}}}");

    let start = current
        .match_indices(open.as_str())
        .map(|(i, _)| i)
        .take_while(|&i| i <= at)
        .last();
    let end = current[after..].find(close.as_str()).map(|i| after + i);

    match (start, end) {
        (Some(start), Some(end)) if start < end => {
            let mut out = String::with_capacity(current.len());
            out.push_str(&current[..start]);
            out.push_str(&current[end..]);
            out
        }
        _ => {
            let mut out = current;
            out.replace_range(at..after, "");
            out
        }
    }
}

/// Removes any optional-section markers left over after substitution,
/// leaving surrounding literal text untouched.
pub fn strip_markers(current: &str) -> String {
    marker_pattern().replace_all(current, "").into_owned()
}
