// File: src/config.rs
// Purpose: Form configuration (selectors, tracked fields, classes, messages)

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::ConfigError;
use crate::rules::PatternRule;

/// Everything the coordinator needs to know about the page it attaches to.
///
/// `FormConfig::default()` describes the contact form: first name, last name,
/// phone and email, Bootstrap-style border/alert classes. Any key missing from
/// a parsed document falls back to that default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_form")]
    pub form: String,

    #[serde(default = "default_submit")]
    pub submit: String,

    #[serde(default = "default_alert")]
    pub alert: String,

    /// Tracked fields, validated in this order
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldSpec>,

    #[serde(default)]
    pub classes: StyleClasses,

    #[serde(default)]
    pub messages: StatusMessages,
}

/// Static description of one tracked field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,

    /// Explicit selector; defaults to `input[name="<id>"]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    pub rule: PatternRule,
}

/// Danger/success pair of class names for one kind of element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPair {
    pub danger: String,
    pub success: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleClasses {
    /// Applied to tracked fields
    #[serde(default = "default_border_classes")]
    pub border: ClassPair,

    /// Applied to the status element
    #[serde(default = "default_alert_classes")]
    pub alert: ClassPair,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessages {
    #[serde(default = "default_success_message")]
    pub success: String,

    #[serde(default = "default_error_message")]
    pub error: String,
}

impl FormConfig {
    /// Parse a TOML document, filling missing keys from the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = toml::from_str(source)?;
        config.check()?;
        Ok(config)
    }

    /// Structural checks that can be made without a document.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.fields.is_empty() {
            return Err(ConfigError::NoFields);
        }
        Ok(())
    }
}

impl FieldSpec {
    pub fn new(id: impl Into<String>, rule: PatternRule) -> Self {
        Self {
            id: id.into(),
            selector: None,
            rule,
        }
    }

    pub fn selector(&self) -> Cow<'_, str> {
        match &self.selector {
            Some(selector) => Cow::Borrowed(selector),
            None => Cow::Owned(format!("input[name=\"{}\"]", self.id)),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form: default_form(),
            submit: default_submit(),
            alert: default_alert(),
            fields: default_fields(),
            classes: StyleClasses::default(),
            messages: StatusMessages::default(),
        }
    }
}

impl Default for StyleClasses {
    fn default() -> Self {
        Self {
            border: default_border_classes(),
            alert: default_alert_classes(),
        }
    }
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self {
            success: default_success_message(),
            error: default_error_message(),
        }
    }
}

// Default values
fn default_form() -> String {
    "form".to_string()
}

fn default_submit() -> String {
    "button[type=\"submit\"]".to_string()
}

fn default_alert() -> String {
    ".alert".to_string()
}

fn default_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("firstName", PatternRule::Name),
        FieldSpec::new("lastName", PatternRule::Name),
        FieldSpec::new("phone", PatternRule::Phone),
        FieldSpec::new("email", PatternRule::Email),
    ]
}

fn default_border_classes() -> ClassPair {
    ClassPair {
        danger: "border-danger".to_string(),
        success: "border-success".to_string(),
    }
}

fn default_alert_classes() -> ClassPair {
    ClassPair {
        danger: "alert-danger".to_string(),
        success: "alert-success".to_string(),
    }
}

fn default_success_message() -> String {
    "Success your information has been sent!".to_string()
}

fn default_error_message() -> String {
    "Error there's something wrong with your information.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_tracks_contact_fields() {
        let config = FormConfig::default();
        let ids: Vec<&str> = config.fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["firstName", "lastName", "phone", "email"]);
        assert_eq!(config.fields[2].selector(), "input[name=\"phone\"]");
        assert_eq!(config.classes.border.danger, "border-danger");
        assert_eq!(config.classes.alert.success, "alert-success");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = FormConfig::from_toml_str("").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let source = r##"
            alert = "#status"

            [[fields]]
            id = "contactEmail"
            selector = "#contact-email"
            rule = "email"

            [classes.border]
            danger = "is-invalid"
            success = "is-valid"

            [messages]
            error = "Please fix the highlighted fields."
        "##;

        let config = FormConfig::from_toml_str(source).unwrap();
        assert_eq!(config.alert, "#status");
        assert_eq!(config.form, "form");
        assert_eq!(config.fields.len(), 1);
        assert_eq!(config.fields[0].selector(), "#contact-email");
        assert_eq!(config.fields[0].rule, PatternRule::Email);
        assert_eq!(config.classes.border.danger, "is-invalid");
        assert_eq!(config.classes.alert.danger, "alert-danger");
        assert_eq!(config.messages.error, "Please fix the highlighted fields.");
        assert_eq!(config.messages.success, "Success your information has been sent!");
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        let source = r#"
            [[fields]]
            id = "zip"
            rule = "zipcode"
        "#;
        assert!(matches!(
            FormConfig::from_toml_str(source),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_empty_field_list_is_rejected() {
        assert!(matches!(
            FormConfig::from_toml_str("fields = []"),
            Err(ConfigError::NoFields)
        ));
    }
}
