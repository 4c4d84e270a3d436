// File: src/dom.rs
// Purpose: web-sys implementations of the formcheck DOM capabilities

use formcheck_core::{Document, DomError, Element, FormEvent, Interaction, Listener};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `window.document`
pub struct BrowserDocument(web_sys::Document);

impl BrowserDocument {
    pub fn current() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        Ok(Self(document))
    }
}

impl Document for BrowserDocument {
    type Element = DomElement;

    fn query_selector(&self, selector: &str) -> Option<DomElement> {
        match self.0.query_selector(selector) {
            Ok(found) => found.map(DomElement),
            Err(e) => {
                tracing::warn!(selector, error = ?e, "invalid selector");
                None
            }
        }
    }
}

/// Handle to a live DOM element. Clones share the same node.
#[derive(Clone)]
pub struct DomElement(web_sys::Element);

impl Element for DomElement {
    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<web_sys::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.0.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            tracing::warn!(class, error = ?e, "failed to add class");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().remove_1(class) {
            tracing::warn!(class, error = ?e, "failed to remove class");
        }
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn add_listener(&self, event: FormEvent, mut listener: Listener) -> Result<(), DomError> {
        let callback = Closure::wrap(Box::new(move |dom_event: web_sys::Event| {
            listener(&BrowserEvent(dom_event));
        }) as Box<dyn FnMut(web_sys::Event)>);

        self.0
            .add_event_listener_with_callback(event.as_str(), callback.as_ref().unchecked_ref())
            .map_err(|e| DomError::Listener {
                event,
                message: format!("{:?}", e),
            })?;

        // Listeners live as long as the page
        callback.forget();
        Ok(())
    }
}

struct BrowserEvent(web_sys::Event);

impl Interaction for BrowserEvent {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}
