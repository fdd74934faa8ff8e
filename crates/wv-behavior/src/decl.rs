//! Declaration tables: what a behavior (or view) wires up, before resolution.
//!
//! # Declaration shapes
//!
//! | Table           | Entry                                        |
//! |-----------------|----------------------------------------------|
//! | [`BehaviorDecls`] | `key → (Options, optional constructor)`    |
//! | [`EventDecls`]    | `"<event> [selector]" → HandlerSpec`       |
//! | [`TriggerDecls`]  | `"<event> [selector]" → view event name`   |
//!
//! All tables keep insertion order — declaration order is semantic: it fixes
//! the per-behavior index `i` embedded in synthesized event namespaces, and
//! therefore which entry wins a first-instantiation race between duplicate
//! keys.  Re-inserting an existing key replaces the entry in place.
//!
//! # JSON loading
//!
//! `BehaviorDecls` and [`Options`] can be loaded from JSON objects, so an
//! application can keep behavior configuration in config files while a
//! [`BehaviorRegistry`][crate::BehaviorRegistry] supplies the constructors:
//!
//! ```json
//! { "Tooltip": { "text": "Open" }, "Logger": {} }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use wv_core::{BehaviorKey, DomEvent};

use crate::behavior::{Behavior, BehaviorHandle};
use crate::error::{BehaviorError, BehaviorResult};
use crate::host::ViewHost;

// ── Options ───────────────────────────────────────────────────────────────────

/// Per-declaration options bag, passed to the behavior's constructor.
///
/// When the same key is declared at several places in one view's tree, only
/// the options at the first-resolved site are ever used; the rest are
/// ignored along with their declaration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    entries: BTreeMap<String, serde_json::Value>,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    /// Parse from a JSON object literal.
    pub fn from_json(text: &str) -> BehaviorResult<Options> {
        serde_json::from_str(text).map_err(|e| BehaviorError::Parse(e.to_string()))
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Options {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.as_i64())
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_f64())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// ── Handler specs ─────────────────────────────────────────────────────────────

/// An inline event handler.
///
/// Receives the owning behavior (downcast via `as_any_mut` for typed state),
/// the hosting view, and the event.
pub type HandlerFn =
    Rc<dyn Fn(&mut dyn Behavior, &mut dyn ViewHost, &DomEvent) -> BehaviorResult<()>>;

/// What a declared event key maps to.
#[derive(Clone)]
pub enum HandlerSpec {
    /// Name of a method dispatched through [`Behavior::invoke`].
    Method(String),
    /// An inline handler function, invoked with the owning behavior.
    Func(HandlerFn),
}

impl fmt::Debug for HandlerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerSpec::Method(name) => write!(f, "Method({name:?})"),
            HandlerSpec::Func(_) => f.write_str("Func(..)"),
        }
    }
}

// ── EventDecls ────────────────────────────────────────────────────────────────

/// Ordered `"<event> [selector]" → HandlerSpec` table.
#[derive(Clone, Default)]
pub struct EventDecls {
    entries: Vec<(String, HandlerSpec)>,
}

impl EventDecls {
    pub fn new() -> EventDecls {
        EventDecls::default()
    }

    /// Declare `key` handled by the behavior method `method`.
    pub fn method(mut self, key: impl Into<String>, method: impl Into<String>) -> EventDecls {
        self.insert(key, HandlerSpec::Method(method.into()));
        self
    }

    /// Declare `key` handled by an inline function.
    pub fn func<F>(mut self, key: impl Into<String>, f: F) -> EventDecls
    where
        F: Fn(&mut dyn Behavior, &mut dyn ViewHost, &DomEvent) -> BehaviorResult<()> + 'static,
    {
        self.insert(key, HandlerSpec::Func(Rc::new(f)));
        self
    }

    /// Add an entry, replacing any existing entry for the same raw key.
    pub fn insert(&mut self, key: impl Into<String>, spec: HandlerSpec) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = spec,
            None => self.entries.push((key, spec)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HandlerSpec)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── TriggerDecls ──────────────────────────────────────────────────────────────

/// Ordered `"<event> [selector]" → view event name` table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerDecls {
    entries: Vec<(String, String)>,
}

impl TriggerDecls {
    pub fn new() -> TriggerDecls {
        TriggerDecls::default()
    }

    /// Declare that DOM key `key` re-emits the view event `view_event`.
    pub fn map(mut self, key: impl Into<String>, view_event: impl Into<String>) -> TriggerDecls {
        self.insert(key, view_event);
        self
    }

    /// Add an entry, replacing any existing entry for the same raw key.
    pub fn insert(&mut self, key: impl Into<String>, view_event: impl Into<String>) {
        let key = key.into();
        let view_event = view_event.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = view_event,
            None => self.entries.push((key, view_event)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── BehaviorCtor ──────────────────────────────────────────────────────────────

/// Constructs a behavior instance from its declared options and host view.
#[derive(Clone)]
pub struct BehaviorCtor(Rc<dyn Fn(&Options, &dyn ViewHost) -> BehaviorHandle>);

impl BehaviorCtor {
    pub fn new<F>(f: F) -> BehaviorCtor
    where
        F: Fn(&Options, &dyn ViewHost) -> BehaviorHandle + 'static,
    {
        BehaviorCtor(Rc::new(f))
    }

    /// Constructor for a concrete behavior type, wrapping it into a handle.
    pub fn of<B, F>(f: F) -> BehaviorCtor
    where
        B: Behavior,
        F: Fn(&Options, &dyn ViewHost) -> B + 'static,
    {
        BehaviorCtor::new(move |options, view| crate::behavior::handle(f(options, view)))
    }

    pub fn construct(&self, options: &Options, view: &dyn ViewHost) -> BehaviorHandle {
        (self.0)(options, view)
    }
}

impl fmt::Debug for BehaviorCtor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BehaviorCtor(..)")
    }
}

// ── BehaviorDecls ─────────────────────────────────────────────────────────────

/// One entry in a [`BehaviorDecls`] table.
#[derive(Clone, Debug, Default)]
pub struct BehaviorDecl {
    /// Passed to the constructor at first instantiation.
    pub options: Options,
    /// Explicit constructor; when `None`, resolution consults the lookup.
    pub ctor: Option<BehaviorCtor>,
}

impl BehaviorDecl {
    pub fn new() -> BehaviorDecl {
        BehaviorDecl::default()
    }

    pub fn with_options(mut self, options: Options) -> BehaviorDecl {
        self.options = options;
        self
    }

    pub fn with_ctor(mut self, ctor: BehaviorCtor) -> BehaviorDecl {
        self.ctor = Some(ctor);
        self
    }
}

/// Ordered `key → BehaviorDecl` table — what a view (or a parent behavior)
/// declares, before resolution turns it into instances.
#[derive(Clone, Debug, Default)]
pub struct BehaviorDecls {
    entries: Vec<(BehaviorKey, BehaviorDecl)>,
}

impl BehaviorDecls {
    pub fn new() -> BehaviorDecls {
        BehaviorDecls::default()
    }

    /// Parse from a JSON object: each key maps to that behavior's options
    /// object.  Constructors come from the lookup at resolution time.
    pub fn from_json(text: &str) -> BehaviorResult<BehaviorDecls> {
        let root: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(text).map_err(|e| BehaviorError::Parse(e.to_string()))?;

        let mut decls = BehaviorDecls::new();
        for (key, value) in root {
            let options: Options = serde_json::from_value(value).map_err(|e| {
                BehaviorError::Parse(format!("options for {key:?} must be an object: {e}"))
            })?;
            decls.insert(BehaviorKey::new(key), BehaviorDecl::new().with_options(options));
        }
        Ok(decls)
    }

    /// Declare `key` with `options`; the constructor comes from the lookup.
    pub fn declare(mut self, key: impl Into<BehaviorKey>, options: Options) -> BehaviorDecls {
        self.insert(key.into(), BehaviorDecl::new().with_options(options));
        self
    }

    /// Declare `key` with an explicit constructor (no lookup involved).
    pub fn declare_with(
        mut self,
        key:     impl Into<BehaviorKey>,
        options: Options,
        ctor:    BehaviorCtor,
    ) -> BehaviorDecls {
        self.insert(
            key.into(),
            BehaviorDecl::new().with_options(options).with_ctor(ctor),
        );
        self
    }

    /// Add an entry, replacing any existing entry for the same key in place.
    pub fn insert(&mut self, key: BehaviorKey, decl: BehaviorDecl) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = decl,
            None => self.entries.push((key, decl)),
        }
    }

    pub fn get(&self, key: &BehaviorKey) -> Option<&BehaviorDecl> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, d)| d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BehaviorKey, &BehaviorDecl)> {
        self.entries.iter().map(|(k, d)| (k, d))
    }

    pub fn keys(&self) -> impl Iterator<Item = &BehaviorKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
