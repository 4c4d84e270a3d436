//! Validation Coordinator
//!
//! Binds to one form, validates the tracked fields on submit and clears the
//! visual state on reset. All output is DOM mutation: border classes on the
//! fields and one aggregate message on the status element.

use serde::Serialize;
use std::rc::Rc;
use tracing::{debug, info};

use crate::config::{FormConfig, StatusMessages, StyleClasses};
use crate::dom::{Document, Element, FormEvent, Interaction};
use crate::error::{ConfigError, DomError};
use crate::rules::{validate_field, PatternRule};

/// One form field under validation.
#[derive(Debug, Clone)]
pub struct TrackedField<E> {
    pub id: String,
    pub handle: E,
    pub rule: PatternRule,
}

/// Result of validating one tracked field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub id: String,
    pub rule: PatternRule,
    pub valid: bool,
}

/// Per-field results of one submit pass, in tracked order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    fields: Vec<FieldOutcome>,
}

impl ValidationReport {
    /// True iff every tracked field validated.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.valid)
    }

    pub fn fields(&self) -> &[FieldOutcome] {
        &self.fields
    }

    pub fn failed(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.fields.iter().filter(|f| !f.valid)
    }
}

pub struct ValidationCoordinator<E: Element> {
    fields: Vec<TrackedField<E>>,
    form: E,
    submit: E,
    alert: E,
    classes: StyleClasses,
    messages: StatusMessages,
}

impl<E: Element + 'static> ValidationCoordinator<E> {
    /// Resolve every configured selector against `document`.
    ///
    /// Fails on the first selector that matches nothing; a coordinator never
    /// exists with a missing handle.
    pub fn new<D>(document: &D, config: FormConfig) -> Result<Self, ConfigError>
    where
        D: Document<Element = E>,
    {
        config.check()?;

        let fields = config
            .fields
            .iter()
            .map(|spec| -> Result<TrackedField<E>, ConfigError> {
                let selector = spec.selector();
                Ok(TrackedField {
                    id: spec.id.clone(),
                    handle: resolve(document, &selector)?,
                    rule: spec.rule,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            fields,
            form: resolve(document, &config.form)?,
            submit: resolve(document, &config.submit)?,
            alert: resolve(document, &config.alert)?,
            classes: config.classes,
            messages: config.messages,
        })
    }

    /// Bind one submit and one reset listener on the form.
    ///
    /// Not guarded: calling this twice binds every listener twice.
    pub fn init(self: &Rc<Self>) -> Result<(), DomError> {
        for event in [FormEvent::Submit, FormEvent::Reset] {
            let coordinator = Rc::clone(self);
            self.form.add_listener(
                event,
                Box::new(move |interaction: &dyn Interaction| {
                    coordinator.handle_event(event, interaction);
                }),
            )?;
        }

        info!(fields = self.fields.len(), "form validation listeners bound");
        Ok(())
    }

    pub fn handle_event(&self, event: FormEvent, interaction: &dyn Interaction) {
        match event {
            FormEvent::Submit => {
                self.handle_submit(interaction);
            }
            FormEvent::Reset => self.handle_reset(),
        }
    }

    /// Cancel the native submission, then validate and render.
    pub fn handle_submit(&self, interaction: &dyn Interaction) -> ValidationReport {
        interaction.prevent_default();
        self.validate()
    }

    /// Validate every tracked field and render the outcome.
    ///
    /// Each field ends with exactly the border class matching its validity;
    /// the status element is rendered once from the AND over all fields.
    pub fn validate(&self) -> ValidationReport {
        self.clear_classes(false);

        let border = &self.classes.border;
        let mut outcomes = Vec::with_capacity(self.fields.len());
        let mut is_valid_form = true;

        for field in &self.fields {
            let valid = validate_field(field.rule, &field.handle.value());
            debug!(field = %field.id, rule = %field.rule, valid, "validated field");

            if valid {
                field.handle.add_class(&border.success);
            } else {
                field.handle.remove_class(&border.success);
                field.handle.add_class(&border.danger);
                is_valid_form = false;
            }

            outcomes.push(FieldOutcome {
                id: field.id.clone(),
                rule: field.rule,
                valid,
            });
        }

        self.render_status(is_valid_form);

        let report = ValidationReport { fields: outcomes };
        info!(
            valid = is_valid_form,
            failed = report.failed().count(),
            "form submitted"
        );
        report
    }

    /// Clear all border state and the status element.
    pub fn handle_reset(&self) {
        self.clear_classes(true);

        self.alert.set_inner_html("");
        self.alert.remove_class(&self.classes.alert.success);
        self.alert.remove_class(&self.classes.alert.danger);

        info!("form reset");
    }

    /// Remove the danger border class from every field, and the success
    /// class too when `also_success` is set.
    pub fn clear_classes(&self, also_success: bool) {
        for field in &self.fields {
            field.handle.remove_class(&self.classes.border.danger);

            if also_success {
                field.handle.remove_class(&self.classes.border.success);
            }
        }
    }

    pub fn render_status(&self, is_valid: bool) {
        let alert = &self.classes.alert;

        if is_valid {
            self.alert.set_inner_html(&self.messages.success);
            self.alert.add_class(&alert.success);
            self.alert.remove_class(&alert.danger);
        } else {
            self.alert.set_inner_html(&self.messages.error);
            self.alert.add_class(&alert.danger);
            self.alert.remove_class(&alert.success);
        }
    }

    pub fn fields(&self) -> &[TrackedField<E>] {
        &self.fields
    }

    pub fn form(&self) -> &E {
        &self.form
    }

    pub fn submit_button(&self) -> &E {
        &self.submit
    }

    pub fn alert(&self) -> &E {
        &self.alert
    }
}

fn resolve<D: Document>(document: &D, selector: &str) -> Result<D::Element, ConfigError> {
    document
        .query_selector(selector)
        .ok_or_else(|| ConfigError::MissingElement {
            selector: selector.to_string(),
        })
}
