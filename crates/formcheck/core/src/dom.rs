//! DOM capabilities consumed by the coordinator
//!
//! The coordinator never talks to `web-sys` directly. A backend provides a
//! [`Document`] that resolves selectors to [`Element`] handles; handles are
//! cheap clones of a reference to the underlying node, so holding one does
//! not imply owning the node.

use std::fmt;

use crate::error::DomError;

/// The two form interactions the coordinator subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormEvent {
    Submit,
    Reset,
}

impl FormEvent {
    /// DOM event type name
    pub fn as_str(self) -> &'static str {
        match self {
            FormEvent::Submit => "submit",
            FormEvent::Reset => "reset",
        }
    }
}

impl fmt::Display for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dispatched interaction whose default behavior can be cancelled.
pub trait Interaction {
    fn prevent_default(&self);
}

/// Listener callback bound to a form event.
pub type Listener = Box<dyn FnMut(&dyn Interaction)>;

/// Handle to one element in the document.
pub trait Element: Clone {
    /// Current raw text value (empty for elements without a value).
    fn value(&self) -> String;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn set_inner_html(&self, html: &str);

    /// Subscribe `listener` to `event` on this element for the lifetime of
    /// the page.
    fn add_listener(&self, event: FormEvent, listener: Listener) -> Result<(), DomError>;
}

/// Selector lookup over a document.
pub trait Document {
    type Element: Element;

    /// First element matching `selector`, or `None`.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
}
