// File: src/rules.rs
// Purpose: Declarative pattern table used to validate raw field values

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

// Character classes are spelled out as ASCII so `\w`/`\d` behave the way the
// browser's regex engine treats them, not as Unicode classes.

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\([0-9]{3}\)[0-9]{3}-[0-9]{4}$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_.\-]+)@([A-Za-z0-9_\-]+)((\.[A-Za-z0-9_]{2,3})+)$").unwrap()
});

/// A named regular expression that validates one field's raw text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternRule {
    /// One or more ASCII letters
    Name,
    /// `(123)456-7890`
    Phone,
    /// `local@host.tld`, one or more 2-3 character suffix segments
    Email,
}

impl PatternRule {
    pub const ALL: [PatternRule; 3] = [PatternRule::Name, PatternRule::Phone, PatternRule::Email];

    /// The compiled, fully anchored pattern for this rule.
    pub fn pattern(self) -> &'static Regex {
        match self {
            PatternRule::Name => &*NAME_REGEX,
            PatternRule::Phone => &*PHONE_REGEX,
            PatternRule::Email => &*EMAIL_REGEX,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PatternRule::Name => "name",
            PatternRule::Phone => "phone",
            PatternRule::Email => "email",
        }
    }

    /// Whole-string test of `value` against this rule.
    pub fn test(self, value: &str) -> bool {
        self.pattern().is_match(value)
    }
}

impl fmt::Display for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternRule::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownRule(s.to_string()))
    }
}

/// Validate one raw value against a rule.
///
/// Empty and malformed values are plain failures; there is no error path.
pub fn validate_field(rule: PatternRule, value: &str) -> bool {
    rule.test(value)
}
