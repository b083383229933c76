// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle method-slot names.
//!
//! The behavior table is keyed by method name, so lifecycle slots are plain
//! names like any application-defined method. These constants are the
//! canonical spellings; [`LifecycleEvent`](crate::component::LifecycleEvent)
//! maps onto them and the [layered](crate::layered) decorator registers its
//! hooks under them.

/// Pre-mount slot. Runs before the instance enters the host tree.
pub const WILL_MOUNT: &str = "will_mount";

/// Post-mount slot. Runs after the instance has entered the host tree.
pub const DID_MOUNT: &str = "did_mount";

/// Post-update slot. Runs after the host re-renders the instance.
pub const DID_UPDATE: &str = "did_update";

/// Pre-unmount slot. Runs before the instance leaves the host tree.
pub const WILL_UNMOUNT: &str = "will_unmount";
