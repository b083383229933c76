// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory document host for stratum.
//!
//! This crate provides the host side of the `stratum_core` contracts without
//! a browser:
//!
//! - [`NodeStore`]: a node arena with generational handles
//! - [`MemoryHost`]: [`HostDocument`] + [`SubtreeRenderer`] over the arena,
//!   with a [`MutationLog`] recording every document mutation
//!
//! It serves integration tests and demo harnesses; a real browser host
//! would implement the same contracts against an actual document.
//!
//! [`HostDocument`]: stratum_core::host::HostDocument
//! [`SubtreeRenderer`]: stratum_core::host::SubtreeRenderer

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod host;
mod log;
mod store;

pub use host::MemoryHost;
pub use log::MutationLog;
pub use store::{NodeId, NodeKind, NodeStore};
