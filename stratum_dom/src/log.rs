// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host mutation records.

use alloc::vec::Vec;

use stratum_core::host::ContainerHandle;

/// The record of document mutations performed by a
/// [`MemoryHost`](crate::MemoryHost).
///
/// Each field lists container handles in the order the corresponding
/// operation happened. Tests assert against these to pin down *how* the
/// document was reached, not just its final shape (e.g. an update must not
/// re-attach its container).
#[derive(Clone, Debug, Default)]
pub struct MutationLog {
    /// Containers created (detached).
    pub created: Vec<ContainerHandle>,
    /// Containers attached to the body.
    pub attached: Vec<ContainerHandle>,
    /// Containers detached from the body and discarded.
    pub detached: Vec<ContainerHandle>,
    /// Subtree renders, by target container.
    pub renders: Vec<ContainerHandle>,
    /// Subtree unmounts, by target container.
    pub unmounts: Vec<ContainerHandle>,
}

impl MutationLog {
    /// Clears all records.
    pub fn clear(&mut self) {
        self.created.clear();
        self.attached.clear();
        self.detached.clear();
        self.renders.clear();
        self.unmounts.clear();
    }
}
