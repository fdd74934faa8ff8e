//! The headless view host.
//!
//! `View` is a minimal rendition of a framework view: enough surface to bind
//! an element, declare its own events and triggers, and host the behavior
//! wiring — without any real DOM behind it.
//!
//! | Piece          | Role                                                   |
//! |----------------|--------------------------------------------------------|
//! | `ViewEmitter`  | semantic view events (`on` / `off` / `trigger`)        |
//! | `DelegateMap`  | DOM delegation table, rebuilt by `delegate_all`        |
//! | `HookPipeline` | extension points other subsystems install entries into |
//! | behavior slots | the resolved tree and flattened list, once attached    |

use std::fmt;
use std::rc::Rc;

use wv_behavior::{BehaviorDecls, BehaviorHandle, BehaviorTree, ViewHost};
use wv_core::{DomEvent, Element, EventKey, UiMap, ViewId};

use crate::delegate::{DelegateMap, DomHandler};
use crate::emitter::{ListenerId, ViewEmitter};
use crate::error::ViewResult;
use crate::hooks::{HookPipeline, ViewHook};

// ── Behavior slots ────────────────────────────────────────────────────────────

/// Where a view's behavior declarations come from.
#[derive(Clone, Default)]
pub enum BehaviorSource {
    /// No behaviors declared.
    #[default]
    None,
    /// A literal declaration table.
    Decls(BehaviorDecls),
    /// Computed from the view when behaviors are attached.
    Factory(Rc<dyn Fn(&View) -> BehaviorDecls>),
}

impl fmt::Debug for BehaviorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BehaviorSource::None => f.write_str("None"),
            BehaviorSource::Decls(decls) => f.debug_tuple("Decls").field(decls).finish(),
            BehaviorSource::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// The resolved behaviors currently installed on a view.
///
/// `flat` is the pre-order flattening of `tree`, deduplicated by instance
/// identity; the wiring layer's per-behavior indices are positions in it.
#[derive(Clone, Default)]
pub struct AttachedBehaviors {
    pub tree: BehaviorTree,
    pub flat: Vec<BehaviorHandle>,
}

impl AttachedBehaviors {
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent constructor for [`View`].
///
/// Event and trigger keys are parsed (and their `@ui.` references resolved)
/// when [`build`][Self::build] runs, so a malformed declaration fails at
/// construction rather than at first dispatch.
#[derive(Default)]
pub struct ViewBuilder {
    element:  Option<Element>,
    ui:       UiMap,
    events:   Vec<(String, DomHandler)>,
    triggers: Vec<(String, String)>,
    source:   BehaviorSource,
}

impl ViewBuilder {
    pub fn new() -> ViewBuilder {
        ViewBuilder::default()
    }

    /// Root element the view starts out bound to.
    pub fn element(mut self, element: Element) -> ViewBuilder {
        self.element = Some(element);
        self
    }

    /// Add a named UI selector.
    pub fn ui(mut self, name: impl Into<String>, selector: impl Into<String>) -> ViewBuilder {
        self.ui.insert(name, selector);
        self
    }

    /// Declare a view-owned DOM event handler under a raw key.
    pub fn event<F>(mut self, key: impl Into<String>, handler: F) -> ViewBuilder
    where
        F: Fn(&mut View, &DomEvent) -> ViewResult<()> + 'static,
    {
        self.events.push((key.into(), Rc::new(handler)));
        self
    }

    /// Declare a view-owned trigger: DOM key → view event to re-emit.
    pub fn trigger(
        mut self,
        key:        impl Into<String>,
        view_event: impl Into<String>,
    ) -> ViewBuilder {
        self.triggers.push((key.into(), view_event.into()));
        self
    }

    /// Declare the behaviors to attach, as a literal table.
    pub fn behaviors(mut self, decls: BehaviorDecls) -> ViewBuilder {
        self.source = BehaviorSource::Decls(decls);
        self
    }

    /// Declare the behaviors via a function of the view, consulted at attach
    /// time.
    pub fn behaviors_with<F>(mut self, factory: F) -> ViewBuilder
    where
        F: Fn(&View) -> BehaviorDecls + 'static,
    {
        self.source = BehaviorSource::Factory(Rc::new(factory));
        self
    }

    /// Construct the view and build its initial delegation table.
    pub fn build(self) -> ViewResult<View> {
        let mut own_events = Vec::with_capacity(self.events.len());
        for (key, handler) in self.events {
            own_events.push((EventKey::parse(&key)?, handler));
        }
        let mut own_triggers = Vec::with_capacity(self.triggers.len());
        for (key, view_event) in self.triggers {
            own_triggers.push((EventKey::parse(&key)?, view_event));
        }

        let mut view = View {
            id: ViewId::fresh(),
            element: self.element,
            ui: self.ui,
            own_events,
            own_triggers,
            emitter: ViewEmitter::new(),
            delegates: DelegateMap::new(),
            pipeline: HookPipeline::new(),
            source: self.source,
            behaviors: AttachedBehaviors::default(),
        };
        // Also surfaces unknown @ui references in the view's own keys.
        view.delegate_all()?;
        Ok(view)
    }
}

// ── View ──────────────────────────────────────────────────────────────────────

/// A headless view instance.
pub struct View {
    id:           ViewId,
    element:      Option<Element>,
    ui:           UiMap,
    own_events:   Vec<(EventKey, DomHandler)>,
    own_triggers: Vec<(EventKey, String)>,
    emitter:      ViewEmitter,
    delegates:    DelegateMap,
    pipeline:     HookPipeline,
    source:       BehaviorSource,
    behaviors:    AttachedBehaviors,
}

impl View {
    pub fn builder() -> ViewBuilder {
        ViewBuilder::new()
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    pub fn ui(&self) -> &UiMap {
        &self.ui
    }

    // ── View events ───────────────────────────────────────────────────────

    /// Listen for a semantic view event.
    pub fn on<F>(&mut self, event: impl Into<String>, listener: F) -> ListenerId
    where
        F: FnMut(&str, &DomEvent) + 'static,
    {
        self.emitter.on(event, listener)
    }

    /// Remove a listener.  Returns whether one existed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    /// Emit a view event to its listeners.  Returns the number called.
    pub fn trigger(&self, event: &str, payload: &DomEvent) -> usize {
        self.emitter.trigger(event, payload)
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.emitter.listener_count(event)
    }

    /// A DOM handler that re-emits `view_event` through this view's emitter.
    ///
    /// Trigger wiring maps its namespaced DOM keys to handlers built here.
    pub fn build_view_trigger(&self, view_event: impl Into<String>) -> DomHandler {
        let view_event = view_event.into();
        Rc::new(move |view: &mut View, ev: &DomEvent| {
            view.trigger(&view_event, ev);
            Ok(())
        })
    }

    // ── Delegation ────────────────────────────────────────────────────────

    /// Rebuild the delegation table: the view's own events and triggers
    /// first (`@ui.` expanded against the view's UI table), then every
    /// pipeline hook's entries, in push order.  Returns the table size.
    pub fn delegate_all(&mut self) -> ViewResult<usize> {
        self.delegates.clear();

        for (key, handler) in &self.own_events {
            let key = key.clone().expand_ui(&self.ui)?;
            self.delegates.insert(key, Rc::clone(handler));
        }
        for (key, view_event) in &self.own_triggers {
            let key = key.clone().expand_ui(&self.ui)?;
            let handler = self.build_view_trigger(view_event.clone());
            self.delegates.insert(key, handler);
        }
        for hook in self.pipeline.snapshot() {
            for (key, handler) in hook.delegate_entries(self)? {
                self.delegates.insert(key, handler);
            }
        }

        Ok(self.delegates.len())
    }

    /// Drop every delegation entry.
    pub fn undelegate_all(&mut self) {
        self.delegates.clear();
    }

    /// Simulate DOM delegation: run every matching table entry in insertion
    /// order.  The first handler error aborts the remainder.
    ///
    /// Returns the number of handlers run.
    pub fn dispatch(&mut self, ev: &DomEvent) -> ViewResult<usize> {
        // Collect first so handlers may rebuild the table while running.
        let matched = self.delegates.matching(ev);
        for handler in &matched {
            (handler.as_ref())(self, ev)?;
        }
        Ok(matched.len())
    }

    /// Swap the root element, rebuild delegation, then notify pipeline hooks.
    pub fn set_element(&mut self, element: Element) -> ViewResult<()> {
        self.element = Some(element);
        self.delegate_all()?;
        for hook in self.pipeline.snapshot() {
            hook.element_set(self)?;
        }
        Ok(())
    }

    pub fn delegates(&self) -> &DelegateMap {
        &self.delegates
    }

    // ── Hooks and behavior slots ──────────────────────────────────────────

    pub fn pipeline(&self) -> &HookPipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut HookPipeline {
        &mut self.pipeline
    }

    /// The declared behavior source, as given at construction.
    pub fn behavior_source(&self) -> &BehaviorSource {
        &self.source
    }

    /// Resolve the declared source into a concrete declaration table.
    pub fn declared_behaviors(&self) -> BehaviorDecls {
        match &self.source {
            BehaviorSource::None => BehaviorDecls::new(),
            BehaviorSource::Decls(decls) => decls.clone(),
            BehaviorSource::Factory(factory) => (factory.as_ref())(self),
        }
    }

    pub fn behaviors(&self) -> &AttachedBehaviors {
        &self.behaviors
    }

    pub fn behaviors_mut(&mut self) -> &mut AttachedBehaviors {
        &mut self.behaviors
    }
}

impl ViewHost for View {
    fn view_id(&self) -> ViewId {
        self.id
    }

    fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    fn ui(&self) -> &UiMap {
        &self.ui
    }

    fn emit(&mut self, event: &str, payload: &DomEvent) -> usize {
        self.trigger(event, payload)
    }
}
