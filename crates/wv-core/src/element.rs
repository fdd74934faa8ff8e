//! Headless root-element handle.

use std::fmt;

/// A view's root element: a tag name plus the selector it answers to.
///
/// The framework is headless — no DOM or terminal backend — so an element is
/// just enough identity for behaviors to proxy (`proxy_view_properties`) and
/// for diagnostics to name.  Rendering adapters own the real node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub tag:      String,
    pub selector: String,
}

impl Element {
    pub fn new(tag: impl Into<String>, selector: impl Into<String>) -> Element {
        Element {
            tag:      tag.into(),
            selector: selector.into(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.tag, self.selector)
    }
}
