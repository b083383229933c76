// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component lifecycle composition and layered rendering for view-tree
//! runtimes.
//!
//! `stratum_core` is a utility layer for runtimes that drive component trees:
//! structural type checks on rendered elements, non-destructive extension of
//! component lifecycle methods, and a layered-rendering facility that mounts
//! a secondary render tree into a detached container (for modals, popovers,
//! overlays) whose lifecycle follows the owning component's. It is `no_std`
//! compatible (with `alloc`) and owns no document or renderer — hosts
//! provide both through trait contracts.
//!
//! # Architecture
//!
//! The crate is organized around lifecycle events flowing from a host
//! runtime through composed method chains into host-provided services:
//!
//! ```text
//!   Host runtime (lifecycle driver)
//!       │
//!       ▼
//!   Instance::dispatch(LifecycleEvent) ──► BehaviorTable chains
//!                                           (base, then augmented)
//!                 ┌─────────────────────────────┘
//!                 ▼
//!   layered hooks ──► HostDocument (containers, body)
//!                 ──► SubtreeRenderer (layer output)
//! ```
//!
//! **[`element`]** — Plain-data model of rendered nodes: elements, text,
//! fragments, property bags, and component type identities.
//!
//! **[`identity`]** — Pluggable type-equality policy: strict structural
//! identity, or a display-name fallback for hot-reload proxies.
//!
//! **[`classify`]** — Structural type checks on rendered nodes.
//!
//! **[`children`]** — Child sequence helpers: one-level flatten, element
//! filtering, conditional wrapping.
//!
//! **[`component`]** — Definitions, ordered behavior chains, live instances,
//! and the lifecycle state machine.
//!
//! **[`slot`]** — Canonical lifecycle method-slot names.
//!
//! **[`augment`]** — Run-after composition of named methods.
//!
//! **[`layered`]** — The layer lifecycle manager, built on [`augment`].
//!
//! **[`host`]** — Contract traits a host implements: document services,
//! subtree rendering, execution target.
//!
//! **[`target`]** — Client/server execution target.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! lifecycle instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod augment;
pub mod children;
pub mod classify;
pub mod component;
pub mod element;
pub mod host;
pub mod identity;
pub mod layered;
pub mod slot;
pub mod target;
pub mod trace;

#[cfg(test)]
pub(crate) mod testenv;
