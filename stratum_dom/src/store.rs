// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node arena with generational handles.
//!
//! Nodes are stored in slots addressed by [`NodeId`] handles. Destroyed
//! nodes are recycled via a free list, and generation counters prevent stale
//! handle access: using a handle after its node was destroyed panics rather
//! than silently reading a recycled slot.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use stratum_core::element::PropMap;

/// A handle to a node in a [`NodeStore`].
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after a node is destroyed and the slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    idx: u32,
    generation: u32,
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}@gen{})", self.idx, self.generation)
    }
}

/// What a node is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A detached layer container, carrying its document identifier.
    Container {
        /// The unique document identifier assigned at creation.
        id: String,
    },
    /// An ordinary element with a tag name.
    Element {
        /// The element's tag.
        tag: String,
    },
    /// A text node.
    Text {
        /// The text content.
        text: String,
    },
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    props: PropMap,
    parent: Option<u32>,
    children: Vec<u32>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    data: Option<NodeData>,
}

/// Slot-based storage for all nodes of one document.
#[derive(Debug, Default)]
pub struct NodeStore {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
}

impl NodeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new parentless node and returns its handle.
    pub fn create(&mut self, kind: NodeKind, props: PropMap) -> NodeId {
        let data = NodeData {
            kind,
            props,
            parent: None,
            children: Vec::new(),
        };
        let idx = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.data = Some(data);
            idx
        } else {
            let idx = u32::try_from(self.slots.len()).expect("node count exceeds u32::MAX");
            self.slots.push(Slot {
                generation: 0,
                data: Some(data),
            });
            idx
        };
        NodeId {
            idx,
            generation: self.slots[idx as usize].generation,
        }
    }

    /// Returns whether the given handle refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.slots.get(id.idx as usize).is_some_and(|slot| {
            slot.generation == id.generation && slot.data.is_some()
        })
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.data.is_some()).count()
    }

    /// Returns what the node is.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.data(id).kind
    }

    /// Returns the node's property bag.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn props(&self, id: NodeId) -> &PropMap {
        &self.data(id).props
    }

    /// Returns the node's parent, if attached.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.data(id).parent.map(|idx| NodeId {
            idx,
            generation: self.slots[idx as usize].generation,
        })
    }

    /// Returns the node's children in document order.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.data(id)
            .children
            .iter()
            .map(|&idx| NodeId {
                idx,
                generation: self.slots[idx as usize].generation,
            })
            .collect()
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale, or if `child` already has a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.validate(parent);
        self.validate(child);
        let child_data = self.data_mut(child);
        assert!(
            child_data.parent.is_none(),
            "child already has a parent: {child:?}"
        );
        child_data.parent = Some(parent.idx);
        self.data_mut(parent).children.push(child.idx);
    }

    /// Detaches `child` from its parent.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node has no parent.
    pub fn detach(&mut self, child: NodeId) {
        self.validate(child);
        let parent_idx = self
            .data(child)
            .parent
            .unwrap_or_else(|| panic!("node has no parent: {child:?}"));
        self.data_mut(child).parent = None;
        let siblings = &mut self.slots[parent_idx as usize]
            .data
            .as_mut()
            .expect("parent of a live node is live")
            .children;
        siblings.retain(|&idx| idx != child.idx);
    }

    /// Destroys a node and its entire subtree, detaching it from its parent
    /// first if attached.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_subtree(&mut self, id: NodeId) {
        self.validate(id);
        if self.data(id).parent.is_some() {
            self.detach(id);
        }
        self.destroy_detached(id.idx);
    }

    fn destroy_detached(&mut self, idx: u32) {
        let data = self.slots[idx as usize]
            .data
            .take()
            .expect("destroying a live subtree");
        for child in data.children {
            self.destroy_detached(child);
        }
        self.free_list.push(idx);
    }

    fn data(&self, id: NodeId) -> &NodeData {
        self.validate(id);
        self.slots[id.idx as usize]
            .data
            .as_ref()
            .expect("validated node is live")
    }

    fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        self.validate(id);
        self.slots[id.idx as usize]
            .data
            .as_mut()
            .expect("validated node is live")
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: NodeId) {
        assert!(self.is_alive(id), "stale NodeId: {id:?}");
    }
}
