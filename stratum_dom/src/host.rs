// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host environment.
//!
//! [`MemoryHost`] implements the `stratum_core` host contracts against a
//! [`NodeStore`]: containers become arena nodes, the body is an ordinary
//! node, and subtree renders materialize [`Node`] trees into arena nodes.
//! Component-typed elements in layer output are materialized as elements
//! tagged with the component's display name — this host is a document, not
//! a runtime, so it does not expand components.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use stratum_core::component::InstanceId;
use stratum_core::element::{ElementTag, Node, PropMap};
use stratum_core::host::{ContainerHandle, HostDocument, HostEnv, SubtreeRenderer};
use stratum_core::target::Target;

use crate::log::MutationLog;
use crate::store::{NodeId, NodeKind, NodeStore};

/// An in-memory document plus subtree renderer.
#[derive(Debug)]
pub struct MemoryHost {
    store: NodeStore,
    body: NodeId,
    target: Target,
    next_handle: u32,
    containers: BTreeMap<ContainerHandle, NodeId>,
    anchors: BTreeMap<ContainerHandle, InstanceId>,
    log: MutationLog,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// Creates a client-target host with an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(Target::Client)
    }

    /// Creates a server-target host. Layer operations against it no-op at
    /// the stratum layer, so its document stays empty.
    #[must_use]
    pub fn server() -> Self {
        Self::with_target(Target::Server)
    }

    fn with_target(target: Target) -> Self {
        let mut store = NodeStore::new();
        let body = store.create(
            NodeKind::Element {
                tag: String::from("body"),
            },
            PropMap::new(),
        );
        Self {
            store,
            body,
            target,
            next_handle: 0,
            containers: BTreeMap::new(),
            anchors: BTreeMap::new(),
            log: MutationLog::default(),
        }
    }

    /// Returns the node store.
    #[must_use]
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Returns the body node.
    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Returns the body's children in document order.
    #[must_use]
    pub fn body_children(&self) -> Vec<NodeId> {
        self.store.children(self.body)
    }

    /// Returns the arena node backing a live container.
    #[must_use]
    pub fn container_node(&self, container: ContainerHandle) -> Option<NodeId> {
        self.containers.get(&container).copied()
    }

    /// Returns a live container's document identifier.
    #[must_use]
    pub fn container_id(&self, container: ContainerHandle) -> Option<&str> {
        let node = self.container_node(container)?;
        match self.store.kind(node) {
            NodeKind::Container { id } => Some(id),
            _ => None,
        }
    }

    /// Returns the content rendered into a live container, in document
    /// order.
    #[must_use]
    pub fn rendered_children(&self, container: ContainerHandle) -> Vec<NodeId> {
        self.container_node(container)
            .map(|node| self.store.children(node))
            .unwrap_or_default()
    }

    /// Returns the instance the container's content was last anchored to.
    #[must_use]
    pub fn anchor_of(&self, container: ContainerHandle) -> Option<InstanceId> {
        self.anchors.get(&container).copied()
    }

    /// Returns the mutation log.
    #[must_use]
    pub fn log(&self) -> &MutationLog {
        &self.log
    }

    /// Returns the number of live nodes, the body included.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.store.live_count()
    }

    fn container(&self, container: ContainerHandle) -> NodeId {
        match self.containers.get(&container) {
            Some(node) => *node,
            None => panic!("unknown container: {container:?}"),
        }
    }

    fn materialize(&mut self, output: &Node, parent: NodeId) {
        match output {
            Node::Empty => {}
            Node::Text(text) => {
                let node = self.store.create(
                    NodeKind::Text { text: text.clone() },
                    PropMap::new(),
                );
                self.store.append_child(parent, node);
            }
            Node::Element(el) => {
                let tag = match el.tag() {
                    ElementTag::Host(tag) => String::from(*tag),
                    ElementTag::Component(ty) => String::from(ty.display_name()),
                };
                let node = self
                    .store
                    .create(NodeKind::Element { tag }, el.prop_map().clone());
                self.store.append_child(parent, node);
                for child in el.children() {
                    self.materialize(child, node);
                }
            }
            Node::Fragment(nodes) => {
                for node in nodes {
                    self.materialize(node, parent);
                }
            }
        }
    }

    fn clear_container(&mut self, node: NodeId) {
        for child in self.store.children(node) {
            self.store.destroy_subtree(child);
        }
    }
}

impl HostDocument for MemoryHost {
    fn create_container(&mut self, id: &str) -> ContainerHandle {
        let handle = ContainerHandle(self.next_handle);
        self.next_handle += 1;
        let node = self.store.create(
            NodeKind::Container {
                id: String::from(id),
            },
            PropMap::new(),
        );
        self.containers.insert(handle, node);
        self.log.created.push(handle);
        handle
    }

    fn append_to_body(&mut self, container: ContainerHandle) {
        let node = self.container(container);
        self.store.append_child(self.body, node);
        self.log.attached.push(container);
    }

    fn remove_from_body(&mut self, container: ContainerHandle) {
        let node = self.container(container);
        self.store.destroy_subtree(node);
        self.containers.remove(&container);
        self.anchors.remove(&container);
        self.log.detached.push(container);
    }
}

impl SubtreeRenderer for MemoryHost {
    fn render_subtree(&mut self, anchor: InstanceId, output: &Node, container: ContainerHandle) {
        let node = self.container(container);
        self.clear_container(node);
        self.materialize(output, node);
        self.anchors.insert(container, anchor);
        self.log.renders.push(container);
    }

    fn unmount_at(&mut self, container: ContainerHandle) {
        let node = self.container(container);
        self.clear_container(node);
        self.anchors.remove(&container);
        self.log.unmounts.push(container);
    }
}

impl HostEnv for MemoryHost {
    fn target(&self) -> Target {
        self.target
    }
}
