//! Resolved behavior trees.
//!
//! Resolution turns a (possibly nested) [`BehaviorDecls`] into a
//! `BehaviorTree`: the same shape, but with each key bound to a live
//! instance.  A key that occurs more than once anywhere in one view's tree
//! is bound to clones of a single handle — the node at the first-resolved
//! site carries the children, later sites carry none.
//!
//! [`BehaviorDecls`]: crate::BehaviorDecls

use std::fmt;
use std::rc::Rc;

use wv_core::BehaviorKey;

use crate::behavior::BehaviorHandle;

/// One resolved behavior with its resolved children.
#[derive(Clone)]
pub struct BehaviorNode {
    pub behavior: BehaviorHandle,
    pub children: BehaviorTree,
}

impl BehaviorNode {
    /// A node with no children.
    pub fn leaf(behavior: BehaviorHandle) -> BehaviorNode {
        BehaviorNode {
            behavior,
            children: BehaviorTree::new(),
        }
    }
}

/// Ordered `key → BehaviorNode` mapping produced by resolution.
///
/// Cloning is shallow: instances stay shared.
#[derive(Clone, Default)]
pub struct BehaviorTree {
    nodes: Vec<(BehaviorKey, BehaviorNode)>,
}

impl fmt::Debug for BehaviorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.nodes.iter().map(|(key, node)| (key, &node.children)))
            .finish()
    }
}

impl BehaviorTree {
    pub fn new() -> BehaviorTree {
        BehaviorTree::default()
    }

    /// Add a node, replacing any existing node for the same key in place.
    pub fn insert(&mut self, key: BehaviorKey, node: BehaviorNode) {
        match self.nodes.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = node,
            None => self.nodes.push((key, node)),
        }
    }

    /// Merge `other` into `self`: same key replaces in place, new keys append.
    pub fn merge(&mut self, other: BehaviorTree) {
        for (key, node) in other.nodes {
            self.insert(key, node);
        }
    }

    pub fn get(&self, key: &BehaviorKey) -> Option<&BehaviorNode> {
        self.nodes.iter().find(|(k, _)| k == key).map(|(_, n)| n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BehaviorKey, &BehaviorNode)> {
        self.nodes.iter().map(|(k, n)| (k, n))
    }

    pub fn keys(&self) -> impl Iterator<Item = &BehaviorKey> {
        self.nodes.iter().map(|(k, _)| k)
    }

    /// Top-level node count (children not included).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order flattening: parent before children, siblings in declaration
    /// order, deduplicated by instance identity (first occurrence kept).
    ///
    /// This is the iteration order every wiring pass uses — the position of a
    /// behavior in this list is the index `i` baked into its namespaces — and
    /// the identity dedup is what guarantees a shared instance is wired
    /// exactly once.
    pub fn flatten(&self) -> Vec<BehaviorHandle> {
        let mut flat: Vec<BehaviorHandle> = Vec::new();
        self.flatten_into(&mut flat);
        flat
    }

    fn flatten_into(&self, flat: &mut Vec<BehaviorHandle>) {
        for (_, node) in &self.nodes {
            if !flat.iter().any(|seen| Rc::ptr_eq(seen, &node.behavior)) {
                flat.push(Rc::clone(&node.behavior));
            }
            node.children.flatten_into(flat);
        }
    }
}
