//! formcheck core
//!
//! Pattern-based form validation that runs entirely against a small set of
//! DOM capabilities. The browser binding lives in `formcheck-wasm`; this crate
//! holds the rule table, configuration and the coordinator so the same logic
//! can be exercised on the host with an in-memory document.

pub mod config;
pub mod coordinator;
pub mod dom;
pub mod error;
pub mod rules;

pub use config::{FieldSpec, FormConfig, StatusMessages, StyleClasses};
pub use coordinator::{FieldOutcome, TrackedField, ValidationCoordinator, ValidationReport};
pub use dom::{Document, Element, FormEvent, Interaction, Listener};
pub use error::{ConfigError, DomError};
pub use rules::{validate_field, PatternRule};
