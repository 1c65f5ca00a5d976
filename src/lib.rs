//! # Debrief
//!
//! Formats structured validation errors into human-readable messages.
//!
//! ## Overview
//!
//! JSON-schema validators report failures as structured records: an error
//! code, a locator path, positional params, and sometimes nested inner
//! errors. Debrief turns such a report into a single readable string using
//! per-code message templates with placeholder substitution, optional
//! sections that disappear when a field is absent, and recursive rendering
//! of inner errors.
//!
//! ## Core Types
//!
//! - [`ErrorRecord`]: A single validation failure (code, path, message,
//!   description, params, inner errors)
//! - [`Report`]: An ordered collection of error records
//! - [`Reporter`]: Holds the merged configuration and renders reports
//!
//! ## Example
//!
//! ```rust
//! use debrief::{ErrorRecord, Report, Reporter};
//!
//! let reporter = Reporter::new();
//!
//! let report = Report::single(
//!     ErrorRecord::new("ENUM_MISMATCH")
//!         .with_param("invalid_value")
//!         .with_path("#/elements")
//!         .with_description("The elements"),
//! );
//!
//! assert_eq!(
//!     reporter.extract_message(&report),
//!     r#"An error occurred 'Invalid property "invalid_value"' on property elements (The elements)."#
//! );
//! ```
//!
//! ## Templates
//!
//! A template is literal text with `{field}` placeholders (`{path}`,
//! `{message}`, `{description}`, `{inner}`, `{params[N]}`, `{context}`) and
//! optional sections delimited by `{^field}` / `{$field}` markers. When a
//! field has no display value, the enclosing optional section is removed in
//! full, so connective text like `" on property "` only appears when the
//! path does. Templates and field extractors are overridable per key at
//! construction time; unspecified keys keep the built-in defaults.

pub mod extract;
pub mod interop;
pub mod record;
pub mod reporter;
pub mod template;

pub use extract::{display_value, normalize_path, Extractor, ExtractorArgs};
pub use interop::{record_from_value, report_from_value, ReportParseError};
pub use record::{ErrorRecord, Report};
pub use reporter::{Reporter, DEFAULT_CODE};
