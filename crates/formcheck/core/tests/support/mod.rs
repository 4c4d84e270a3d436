//! In-memory document used by the integration tests.

#![allow(dead_code)]

use formcheck_core::{Document, DomError, Element, FormConfig, FormEvent, Interaction, Listener};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

#[derive(Default)]
struct Node {
    value: String,
    classes: BTreeSet<String>,
    inner_html: String,
    html_writes: usize,
    listeners: Vec<(FormEvent, Listener)>,
}

#[derive(Clone, Default)]
pub struct MockElement(Rc<RefCell<Node>>);

impl MockElement {
    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.iter().cloned().collect()
    }

    pub fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    pub fn html_writes(&self) -> usize {
        self.0.borrow().html_writes
    }

    pub fn listener_count(&self, event: FormEvent) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|(e, _)| *e == event)
            .count()
    }

    /// Dispatch `event` to every bound listener; returns whether any of them
    /// cancelled the default behavior.
    pub fn dispatch(&self, event: FormEvent) -> bool {
        let probe = MockInteraction::default();
        let interaction: &dyn Interaction = &probe;
        let mut listeners = std::mem::take(&mut self.0.borrow_mut().listeners);

        for (bound, listener) in listeners.iter_mut() {
            if *bound == event {
                listener(interaction);
            }
        }

        self.0.borrow_mut().listeners = listeners;
        probe.prevented.get()
    }
}

impl Element for MockElement {
    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn set_inner_html(&self, html: &str) {
        let mut node = self.0.borrow_mut();
        node.inner_html = html.to_string();
        node.html_writes += 1;
    }

    fn add_listener(&self, event: FormEvent, listener: Listener) -> Result<(), DomError> {
        self.0.borrow_mut().listeners.push((event, listener));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockInteraction {
    pub prevented: Cell<bool>,
}

impl Interaction for MockInteraction {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

#[derive(Default)]
pub struct MockDocument {
    nodes: HashMap<String, MockElement>,
}

impl MockDocument {
    /// A document containing every element `FormConfig::default()` expects.
    pub fn contact_form() -> Self {
        let config = FormConfig::default();
        let mut document = MockDocument::default();

        for field in &config.fields {
            document.insert(&field.selector());
        }
        document.insert(&config.form);
        document.insert(&config.submit);
        document.insert(&config.alert);
        document
    }

    pub fn insert(&mut self, selector: &str) -> MockElement {
        self.nodes
            .entry(selector.to_string())
            .or_default()
            .clone()
    }

    pub fn remove(&mut self, selector: &str) {
        self.nodes.remove(selector);
    }

    pub fn get(&self, selector: &str) -> MockElement {
        self.nodes
            .get(selector)
            .cloned()
            .unwrap_or_else(|| panic!("no mock element for `{selector}`"))
    }

    pub fn field(&self, id: &str) -> MockElement {
        self.get(&format!("input[name=\"{id}\"]"))
    }

    pub fn fill(&self, values: &[(&str, &str)]) {
        for (id, value) in values {
            self.field(id).set_value(value);
        }
    }
}

impl Document for MockDocument {
    type Element = MockElement;

    fn query_selector(&self, selector: &str) -> Option<MockElement> {
        self.nodes.get(selector).cloned()
    }
}

pub const VALID_CONTACT: [(&str, &str); 4] = [
    ("firstName", "John"),
    ("lastName", "Doe"),
    ("phone", "(123)456-7890"),
    ("email", "a.b@example.com"),
];
