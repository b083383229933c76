// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording host environment for unit tests.

use alloc::string::String;
use alloc::vec::Vec;

use crate::component::InstanceId;
use crate::element::Node;
use crate::host::{ContainerHandle, HostDocument, HostEnv, SubtreeRenderer};
use crate::target::Target;

/// A [`HostEnv`] that records every call it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingEnv {
    pub(crate) target: Target,
    next_handle: u32,
    /// Containers created, with their document identifiers.
    pub(crate) created: Vec<(ContainerHandle, String)>,
    /// Containers attached to the body, in order.
    pub(crate) attached: Vec<ContainerHandle>,
    /// Containers removed from the body, in order.
    pub(crate) removed: Vec<ContainerHandle>,
    /// Subtree renders: anchor, target container, and a copy of the output.
    pub(crate) renders: Vec<(InstanceId, ContainerHandle, Node)>,
    /// Containers unmounted, in order.
    pub(crate) unmounts: Vec<ContainerHandle>,
}

impl RecordingEnv {
    pub(crate) fn client() -> Self {
        Self::default()
    }

    pub(crate) fn server() -> Self {
        Self {
            target: Target::Server,
            ..Self::default()
        }
    }
}

impl HostDocument for RecordingEnv {
    fn create_container(&mut self, id: &str) -> ContainerHandle {
        let handle = ContainerHandle(self.next_handle);
        self.next_handle += 1;
        self.created.push((handle, String::from(id)));
        handle
    }

    fn append_to_body(&mut self, container: ContainerHandle) {
        self.attached.push(container);
    }

    fn remove_from_body(&mut self, container: ContainerHandle) {
        self.removed.push(container);
    }
}

impl SubtreeRenderer for RecordingEnv {
    fn render_subtree(&mut self, anchor: InstanceId, output: &Node, container: ContainerHandle) {
        self.renders.push((anchor, container, output.clone()));
    }

    fn unmount_at(&mut self, container: ContainerHandle) {
        self.unmounts.push(container);
    }
}

impl HostEnv for RecordingEnv {
    fn target(&self) -> Target {
        self.target
    }
}
