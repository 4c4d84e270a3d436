//! formcheck WASM
//!
//! WebAssembly bindings for formcheck. Attaches the validation coordinator to
//! a form in the current page and exposes the individual rules to JavaScript.
//!
//! ```javascript
//! import init, { FormValidator } from './formcheck_wasm.js';
//!
//! await init();
//! const validator = new FormValidator({ alert: '#status' });
//! validator.init();
//! ```

use formcheck_core::{validate_field, FormConfig, PatternRule, ValidationCoordinator};
use std::fmt::Display;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod dom;

use dom::{BrowserDocument, DomElement};

/// Set panic hook and console logging for the browser
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // The host page may already own the global subscriber
    if tracing_wasm::try_set_as_global_default().is_err() {
        tracing::debug!("global tracing subscriber already installed");
    }
}

/// A validation coordinator bound to the current document.
#[wasm_bindgen]
pub struct FormValidator {
    inner: Rc<ValidationCoordinator<DomElement>>,
}

#[wasm_bindgen]
impl FormValidator {
    /// Resolve every configured element in `window.document`.
    ///
    /// `config` is optional; missing keys fall back to the contact-form
    /// defaults. Throws if any selector matches nothing.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FormValidator, JsValue> {
        let config = parse_config(config)?;
        let document = BrowserDocument::current()?;
        let inner = ValidationCoordinator::new(&document, config).map_err(to_js)?;

        Ok(FormValidator {
            inner: Rc::new(inner),
        })
    }

    /// Bind the submit and reset listeners. Calling twice binds twice.
    pub fn init(&self) -> Result<(), JsValue> {
        self.inner.init().map_err(to_js)
    }

    /// Run a submit pass without an event.
    ///
    /// Returns an array of `{ id, rule, valid }`, one entry per tracked field.
    pub fn validate(&self) -> Result<JsValue, JsValue> {
        let report = self.inner.validate();
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    /// Run a reset pass without an event.
    pub fn reset(&self) {
        self.inner.handle_reset();
    }
}

/// Build a validator with the default configuration and bind its listeners.
#[wasm_bindgen(js_name = attachDefault)]
pub fn attach_default() -> Result<FormValidator, JsValue> {
    let validator = FormValidator::new(JsValue::UNDEFINED)?;
    validator.init()?;
    Ok(validator)
}

/// Validate a single value against a named rule (`name`, `phone`, `email`)
///
/// # Example (JavaScript)
/// ```javascript
/// validateField('phone', '(123)456-7890'); // true
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field_js(rule: &str, value: &str) -> Result<bool, JsValue> {
    let rule: PatternRule = rule.parse().map_err(to_js)?;
    Ok(validate_field(rule, value))
}

/// Quick name validation
#[wasm_bindgen(js_name = isValidName)]
pub fn is_valid_name_js(value: &str) -> bool {
    validate_field(PatternRule::Name, value)
}

/// Quick phone validation
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(value: &str) -> bool {
    validate_field(PatternRule::Phone, value)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(value: &str) -> bool {
    validate_field(PatternRule::Email, value)
}

fn parse_config(config: JsValue) -> Result<FormConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(FormConfig::default());
    }

    let config: FormConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
    config.check().map_err(to_js)?;
    Ok(config)
}

fn to_js(error: impl Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}
