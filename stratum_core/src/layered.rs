// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered rendering: a secondary render tree in a detached container.
//!
//! [`layered`] produces a decorator that extends a component definition with
//! layer management, for content that must escape the primary tree — modals,
//! popovers, tooltips. The decorated definition must supply a `render_layer`
//! producer (see [`ComponentDef::with_render_layer`]); this is a capability
//! requirement, not checked up front — a missing producer surfaces when the
//! post-mount hook first tries to invoke it.
//!
//! The decorator works by handing a four-hook [`MethodMap`] to
//! [`augment`], so lifecycle behavior the caller already defined keeps
//! running, in original order, before the layer behavior:
//!
//! - **pre-mount** — allocate a detached container, assign it the next
//!   unique layer identifier, store it on the instance.
//! - **post-mount** — attach the container to the document body, then render
//!   the layer.
//! - **post-update** — render the layer again into the *same* container.
//! - **pre-unmount** — unmount the container's content, remove the
//!   container from the body, clear the stored fields.
//!
//! Every hook is a complete no-op under [`Target::Server`]
//! (no document to render into).
//!
//! [`Target::Server`]: crate::target::Target::Server

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::augment::{MethodMap, augment};
use crate::component::{ComponentDef, HookCx};
use crate::element::{Element, Node};
use crate::host::ContainerHandle;
use crate::slot;
use crate::trace::{
    LayerAllocatedEvent, LayerAttachedEvent, LayerRemovedEvent, LayerRenderedEvent,
};

/// Process-wide layer index. Monotonic, never reset, never reused.
static PROCESS_LAYER_INDEX: AtomicU32 = AtomicU32::new(1);

/// Generator of unique layer identifiers.
///
/// Identifier text is `{prefix}Layer{index}`. The default generator draws
/// from a process-wide monotonic counter, so two layers can never receive
/// the same index within one process lifetime, regardless of prefix; indices
/// are not reclaimed when layers unmount. Tests can use
/// [`starting_at`](Self::starting_at) for a private, seeded sequence.
#[derive(Clone, Debug, Default)]
pub struct LayerIdGen {
    source: Source,
}

#[derive(Clone, Debug, Default)]
enum Source {
    #[default]
    Process,
    Local(Arc<AtomicU32>),
}

impl LayerIdGen {
    /// The process-wide generator.
    #[must_use]
    pub fn process_wide() -> Self {
        Self {
            source: Source::Process,
        }
    }

    /// A private generator whose first index is `first`.
    #[must_use]
    pub fn starting_at(first: u32) -> Self {
        Self {
            source: Source::Local(Arc::new(AtomicU32::new(first))),
        }
    }

    /// Returns the next index, advancing the counter.
    #[must_use]
    pub fn next_index(&self) -> u32 {
        match &self.source {
            Source::Process => PROCESS_LAYER_INDEX.fetch_add(1, Ordering::Relaxed),
            Source::Local(counter) => counter.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Returns the next identifier: `{prefix}Layer{index}`.
    #[must_use]
    pub fn next_id(&self, prefix: Option<&str>) -> String {
        let index = self.next_index();
        match prefix {
            Some(prefix) => format!("{prefix}Layer{index}"),
            None => format!("Layer{index}"),
        }
    }
}

/// Configuration for [`layered`].
#[derive(Clone, Debug, Default)]
pub struct LayeredOptions {
    /// Prefix for generated layer identifiers. Absent means no prefix.
    pub id_prefix: Option<Cow<'static, str>>,
    /// Identifier generator. Defaults to the process-wide one.
    pub ids: LayerIdGen,
}

impl LayeredOptions {
    /// Options with the given identifier prefix.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id_prefix: Some(prefix.into()),
            ids: LayerIdGen::default(),
        }
    }

    /// Replaces the identifier generator.
    #[must_use]
    pub fn with_ids(mut self, ids: LayerIdGen) -> Self {
        self.ids = ids;
        self
    }
}

/// The detached container owned by one mounted layered instance.
///
/// At most one exists per live instance; it is never shared. After unmount
/// the instance's stored `LayerNode` is cleared — the handle inside a
/// dropped `LayerNode` is stale and must not be reused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerNode {
    /// Host handle for the container.
    pub handle: ContainerHandle,
    /// The container's unique document identifier.
    pub id: String,
}

/// Returns a decorator that extends a definition with layer management.
///
/// ```rust,ignore
/// let def = ComponentDef::new("Modal")
///     .with_render_layer(|cx| modal_content(&cx.state.props));
/// let def = layered(LayeredOptions::with_prefix("modal"))(def);
/// ```
pub fn layered(options: LayeredOptions) -> impl Fn(ComponentDef) -> ComponentDef {
    let prefix: Option<Arc<str>> = options.id_prefix.map(|p| Arc::from(&*p));
    let ids = options.ids;

    move |def| {
        let ids = ids.clone();
        let prefix = prefix.clone();
        augment(
            def,
            MethodMap::new()
                .with(slot::WILL_MOUNT, move |cx, _args| {
                    if cx.host.env.target().is_server() {
                        return;
                    }
                    let id = ids.next_id(prefix.as_deref());
                    let handle = cx.host.env.create_container(&id);
                    cx.host.tracer.layer_allocated(&LayerAllocatedEvent {
                        instance: cx.id,
                        container: handle,
                    });
                    cx.state.layer_node = Some(LayerNode { handle, id });
                })
                .with(slot::DID_MOUNT, |cx, _args| {
                    if cx.host.env.target().is_server() {
                        return;
                    }
                    let handle = layer_handle(cx, slot::DID_MOUNT);
                    cx.host.env.append_to_body(handle);
                    cx.host.tracer.layer_attached(&LayerAttachedEvent {
                        instance: cx.id,
                        container: handle,
                    });
                    render_layer_to_node(cx);
                })
                .with(slot::DID_UPDATE, |cx, _args| {
                    if cx.host.env.target().is_server() {
                        return;
                    }
                    render_layer_to_node(cx);
                })
                .with(slot::WILL_UNMOUNT, |cx, _args| {
                    if cx.host.env.target().is_server() {
                        return;
                    }
                    let Some(node) = cx.state.layer_node.take() else {
                        panic!(
                            "{}: no layer container allocated for `{}`",
                            slot::WILL_UNMOUNT,
                            cx.def.display_name()
                        );
                    };
                    cx.state.layer_output = None;
                    cx.host.env.unmount_at(node.handle);
                    cx.host.env.remove_from_body(node.handle);
                    cx.host.tracer.layer_removed(&LayerRemovedEvent {
                        instance: cx.id,
                        container: node.handle,
                    });
                }),
        )
    }
}

/// Shared render procedure for the post-mount and post-update hooks.
///
/// Invokes the definition's `render_layer` producer (substituting an empty
/// placeholder element when it yields nothing), stores the result as the
/// instance's current layer output, and renders it into the stored
/// container, anchored to the instance.
fn render_layer_to_node(cx: &mut HookCx<'_, '_>) {
    if cx.host.env.target().is_server() {
        return;
    }
    let Some(producer) = cx.def.render_layer().cloned() else {
        panic!(
            "`{}` is layered but defines no render_layer producer",
            cx.def.display_name()
        );
    };
    let output = match producer(cx) {
        Node::Empty => Node::Element(Element::host("span")),
        output => output,
    };
    let handle = layer_handle(cx, "render_layer");

    let HookCx { id, state, host, .. } = cx;
    state.layer_output = Some(output);
    if let Some(output) = &state.layer_output {
        host.env.render_subtree(*id, output, handle);
    }
    host.tracer.layer_rendered(&LayerRenderedEvent {
        instance: *id,
        container: handle,
    });
}

fn layer_handle(cx: &HookCx<'_, '_>, context: &str) -> ContainerHandle {
    match &cx.state.layer_node {
        Some(node) => node.handle,
        None => panic!(
            "{context}: no layer container allocated for `{}`",
            cx.def.display_name()
        ),
    }
}
