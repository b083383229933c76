// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Execution target.
//!
//! Layer containers live in a document, so every layer operation needs to
//! know whether one exists. Hosts report their target through
//! [`HostEnv::target`](crate::host::HostEnv::target); for a given host it is
//! a per-process constant (a browser host is always [`Target::Client`], a
//! server-rendering host always [`Target::Server`]).
//!
//! Under [`Target::Server`] every layer lifecycle hook is a complete no-op:
//! no container is allocated, nothing touches a body, and the `render_layer`
//! producer is never invoked.

/// Whether a document is available to render into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Target {
    /// A document is available; layer operations are live.
    #[default]
    Client,
    /// No document (server-side execution); layer operations no-op.
    Server,
}

impl Target {
    /// Returns whether this is the server target.
    #[must_use]
    pub const fn is_server(self) -> bool {
        matches!(self, Self::Server)
    }
}
