// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for runtime integrations.
//!
//! Stratum does not own a document or a renderer; a *host* provides both.
//! A host implements:
//!
//! - **[`HostDocument`]** — creation of detached container elements and
//!   attachment/removal at the document body. Containers are addressed by
//!   opaque [`ContainerHandle`]s that the host assigns.
//!
//! - **[`SubtreeRenderer`]** — rendering a [`Node`] tree into a container,
//!   anchored to an instance identity, and unmounting whatever a container
//!   holds. This is the host runtime's subtree-rendering facility; failures
//!   it raises propagate unmodified.
//!
//! - **[`HostEnv`]** — the combination of both plus the execution
//!   [`Target`].
//!
//! Both real document-backed hosts and in-memory test doubles implement
//! these traits, enabling generic lifecycle driving and deterministic tests.
//!
//! # Lifecycle pseudocode
//!
//! A host runtime drives an instance like this:
//!
//! ```rust,ignore
//! let mut host = HostCx::new(&mut env);
//! instance.dispatch(LifecycleEvent::WillMount, &mut host);
//! instance.dispatch(LifecycleEvent::DidMount, &mut host);
//! // ...on every re-render:
//! instance.dispatch(LifecycleEvent::DidUpdate, &mut host);
//! // ...when the instance leaves the tree:
//! instance.dispatch(LifecycleEvent::WillUnmount, &mut host);
//! ```

use core::fmt;

use crate::component::InstanceId;
use crate::element::Node;
use crate::target::Target;
use crate::trace::Tracer;

/// Opaque handle to a host-document container node.
///
/// Hosts assign these; stratum passes them through without interpreting the
/// value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContainerHandle(pub u32);

impl fmt::Debug for ContainerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContainerHandle({})", self.0)
    }
}

/// Document services: detached container creation and body attachment.
pub trait HostDocument {
    /// Creates a detached container element carrying `id` as its document
    /// identifier. The container is not attached anywhere yet.
    fn create_container(&mut self, id: &str) -> ContainerHandle;

    /// Attaches a previously created container to the document body.
    fn append_to_body(&mut self, container: ContainerHandle);

    /// Detaches a container from the document body and discards it.
    fn remove_from_body(&mut self, container: ContainerHandle);
}

/// The host runtime's subtree-rendering facility.
pub trait SubtreeRenderer {
    /// Renders `output` into `container`, replacing whatever it held.
    ///
    /// `anchor` identifies the instance the render is performed on behalf
    /// of, so the output participates in that instance's bookkeeping even
    /// though it lives outside the primary tree.
    fn render_subtree(&mut self, anchor: InstanceId, output: &Node, container: ContainerHandle);

    /// Unmounts whatever was rendered into `container`.
    fn unmount_at(&mut self, container: ContainerHandle);
}

/// Everything a lifecycle hook may ask of its environment.
pub trait HostEnv: HostDocument + SubtreeRenderer {
    /// Returns the execution target. Constant for any given host.
    fn target(&self) -> Target;
}

/// The environment bundle threaded through lifecycle dispatch.
pub struct HostCx<'a> {
    /// Host environment services.
    pub env: &'a mut dyn HostEnv,
    /// Trace sink wrapper. [`Tracer::none`] unless instrumentation is
    /// attached.
    pub tracer: Tracer<'a>,
}

impl fmt::Debug for HostCx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostCx").finish_non_exhaustive()
    }
}

impl<'a> HostCx<'a> {
    /// Creates a context with no tracing.
    #[must_use]
    pub fn new(env: &'a mut dyn HostEnv) -> Self {
        Self {
            env,
            tracer: Tracer::none(),
        }
    }

    /// Creates a context that reports events through `tracer`.
    #[must_use]
    pub fn traced(env: &'a mut dyn HostEnv, tracer: Tracer<'a>) -> Self {
        Self { env, tracer }
    }
}
