//! Named selector tables and `@ui.` shorthand expansion.

use crate::error::{WeaveError, WeaveResult};

/// Marker introducing a named selector reference inside a key.
const UI_MARKER: &str = "@ui.";

/// An ordered `name → selector` table.
///
/// Views and behaviors declare the elements they care about once, by name,
/// and reference them in event keys as `@ui.name`.  Insertion order is kept
/// so merged tables stay deterministic; re-inserting a name overwrites its
/// selector in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UiMap {
    entries: Vec<(String, String)>,
}

impl UiMap {
    pub fn new() -> UiMap {
        UiMap::default()
    }

    /// Add `name → selector`, replacing any existing entry for `name`.
    pub fn insert(&mut self, name: impl Into<String>, selector: impl Into<String>) {
        let name = name.into();
        let selector = selector.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = selector,
            None => self.entries.push((name, selector)),
        }
    }

    /// Builder-style [`insert`][Self::insert].
    pub fn with(mut self, name: impl Into<String>, selector: impl Into<String>) -> UiMap {
        self.insert(name, selector);
        self
    }

    /// The selector registered under `name`.
    pub fn selector(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.selector(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s.as_str()))
    }

    /// A new table with `self`'s entries shadowing `base`'s.
    ///
    /// `base` order is preserved; names only present in `self` are appended
    /// in `self` order.
    pub fn merged_over(&self, base: &UiMap) -> UiMap {
        let mut merged = base.clone();
        for (name, selector) in self.iter() {
            merged.insert(name, selector);
        }
        merged
    }

    /// Expand every `@ui.name` reference in `selector`.
    ///
    /// Fails fast on names this table does not define — a dangling reference
    /// would otherwise bind the handler to a selector that matches nothing.
    pub fn expand(&self, selector: &str) -> WeaveResult<String> {
        if !selector.contains(UI_MARKER) {
            return Ok(selector.to_string());
        }

        let mut out = String::with_capacity(selector.len());
        let mut rest = selector;
        while let Some(pos) = rest.find(UI_MARKER) {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + UI_MARKER.len()..];
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
                .unwrap_or(after.len());
            let name = &after[..end];
            match self.selector(name) {
                Some(resolved) => out.push_str(resolved),
                None => {
                    return Err(WeaveError::UnknownUiName {
                        name:    name.to_string(),
                        context: selector.to_string(),
                    });
                }
            }
            rest = &after[end..];
        }
        out.push_str(rest);
        Ok(out)
    }
}
