// File: src/error.rs
// Purpose: Error types for configuration and DOM binding

use thiserror::Error;

use crate::dom::FormEvent;

/// Errors raised while building a coordinator from its configuration.
///
/// These are all startup errors. Once a coordinator exists, validation never
/// fails: bad input is reported through the UI, not through `Result`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no element matches selector `{selector}`")]
    MissingElement { selector: String },

    #[error("form configuration tracks no fields")]
    NoFields,

    #[error("unknown validation rule `{0}` (expected name, phone or email)")]
    UnknownRule(String),

    #[error("invalid form configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors raised by a DOM backend while wiring listeners.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("failed to bind {event} listener: {message}")]
    Listener { event: FormEvent, message: String },
}
