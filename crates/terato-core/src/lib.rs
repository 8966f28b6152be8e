//! Core library for terato, a style linter for Spanish prose.
//!
//! Words are read one at a time and checked against a bounded window of the
//! words before them. Findings are grouped by page.
//!
//! # Modules
//!
//! - [`checks`] - The individual checks and their findings
//! - [`registry`] - Which checks run
//! - [`lint`] - The engine driving a run
//! - [`report`] - Page-grouped findings and their rendering
//! - [`source`] - Word sources (plain text, Markdown)
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use terato_core::{CheckRegistry, Linter, TextSource};
//!
//! let linter = Linter::new(&CheckRegistry::all());
//! let report = linter.run(TextSource::new("Sacudió la cabeza.").words());
//!
//! assert_eq!(report.total_findings, 1);
//! println!("{report}");
//! ```
#![deny(unsafe_code)]

pub mod checks;
pub mod config;
pub mod error;
pub mod history;
pub mod lint;
pub mod markdown;
pub mod registry;
pub mod report;
pub mod source;
pub mod text;
pub mod word_lists;

pub use checks::{Check, Finding, FindingKind};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult, LintError, LintResult};
pub use history::WordHistory;
pub use lint::{DEFAULT_CONTEXT_WORDS, LintSession, Linter};
pub use registry::{CheckRegistry, Selection};
pub use report::{FindingsAggregator, LintReport, Page, PageFindings};
pub use source::{SourceWord, TextSource};
