// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component definitions, behavior tables, and live instances.
//!
//! A [`ComponentDef`] is a unit of behavior: a structural identity
//! ([`TypeRef`]), a display name, and a [`BehaviorTable`] mapping method
//! names to *ordered chains* of implementations. Chains are what the
//! [augmentation engine](crate::augment) appends to; invoking a name runs
//! every implementation in registration order, oldest first, each receiving
//! the same instance context and the same arguments in the same synchronous
//! turn.
//!
//! An [`Instance`] is one live occurrence of a definition, driven through its
//! lifecycle by a host runtime via [`Instance::dispatch`]. The lifecycle is
//! an explicit state machine:
//!
//! ```text
//!   Unmounted ──WillMount──► Mounting ──DidMount──► Mounted
//!       ▲                                             │  ▲
//!       │                                        DidUpdate │
//!       │                                             ▼  │
//!       │                                          Updating
//!       └──────────── WillUnmount ◄── Mounted ────────┘
//! ```
//!
//! Dispatching an event in the wrong phase is a host-contract violation and
//! panics immediately; everything else in this module is deliberately
//! permissive (absent chains are a no-op).

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::element::{DefId, Node, PropMap, PropValue, TypeRef};
use crate::host::HostCx;
use crate::layered::LayerNode;
use crate::slot;
use crate::trace::PhaseChangedEvent;

/// Process-wide instance-identity allocator. Monotonic, never reused.
static NEXT_INSTANCE_ID: AtomicU32 = AtomicU32::new(0);

/// Identifies a live component instance within its host runtime.
///
/// Subtree renders are anchored to this identity so the layer output
/// participates in the instance's bookkeeping even though it lives outside
/// the primary tree. Hosts treat the value as opaque.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u32);

impl fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceId({})", self.0)
    }
}

/// Lifecycle phase of an instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Not mounted; the initial and final state.
    #[default]
    Unmounted,
    /// Between the pre-mount and post-mount events.
    Mounting,
    /// Live in the host tree.
    Mounted,
    /// Inside a post-update event.
    Updating,
    /// Inside the pre-unmount event.
    Unmounting,
}

/// A lifecycle event delivered by the host runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Pre-mount. `Unmounted → Mounting`.
    WillMount,
    /// Post-mount. `Mounting → Mounted`.
    DidMount,
    /// Post-update. `Mounted → Updating → Mounted`.
    DidUpdate,
    /// Pre-unmount. `Mounted → Unmounting → Unmounted`.
    WillUnmount,
}

impl LifecycleEvent {
    /// Returns the method-slot name this event invokes.
    #[must_use]
    pub const fn slot_name(self) -> &'static str {
        match self {
            Self::WillMount => slot::WILL_MOUNT,
            Self::DidMount => slot::DID_MOUNT,
            Self::DidUpdate => slot::DID_UPDATE,
            Self::WillUnmount => slot::WILL_UNMOUNT,
        }
    }
}

/// Positional arguments forwarded verbatim to every implementation in a
/// method chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodArgs {
    values: Vec<PropValue>,
}

impl MethodArgs {
    /// No arguments.
    #[must_use]
    pub const fn none() -> Self {
        Self { values: Vec::new() }
    }

    /// Arguments from an ordered value list.
    #[must_use]
    pub fn new(values: Vec<PropValue>) -> Self {
        Self { values }
    }

    /// Returns the ordered argument values.
    #[must_use]
    pub fn values(&self) -> &[PropValue] {
        &self.values
    }
}

/// Borrowed view of an instance handed to every method implementation.
///
/// All implementations in a chain receive the same `HookCx`, so effects of
/// earlier (older) implementations are fully observable before later ones
/// run.
pub struct HookCx<'a, 'b> {
    /// The instance's identity (render anchor).
    pub id: InstanceId,
    /// The instance's definition.
    pub def: &'a ComponentDef,
    /// The instance's mutable state.
    pub state: &'a mut InstanceState,
    /// Host environment services and tracing.
    pub host: &'a mut HostCx<'b>,
}

impl fmt::Debug for HookCx<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookCx")
            .field("id", &self.id)
            .field("def", &self.def)
            .finish_non_exhaustive()
    }
}

/// A single method implementation.
///
/// Shared (`Arc`) so definitions stay cheap to clone into instances.
pub type Hook = Arc<dyn Fn(&mut HookCx<'_, '_>, &MethodArgs)>;

/// A layer-output producer: the `render_layer` capability of a definition.
pub type LayerProducer = Arc<dyn Fn(&mut HookCx<'_, '_>) -> Node>;

/// Ordered method chains, keyed by method name.
///
/// Each name maps to the list of implementations registered for it, invoked
/// oldest-first. The table never drops or reorders entries.
#[derive(Clone, Default)]
pub struct BehaviorTable {
    slots: BTreeMap<Cow<'static, str>, Vec<Hook>>,
}

impl BehaviorTable {
    /// Appends an implementation to the chain for `name`.
    pub(crate) fn append(&mut self, name: Cow<'static, str>, hook: Hook) {
        self.slots.entry(name).or_default().push(hook);
    }

    /// Returns the chain for `name`, oldest first. Empty if the name has no
    /// implementations.
    pub(crate) fn chain(&self, name: &str) -> &[Hook] {
        self.slots.get(name).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of implementations registered for `name`.
    #[must_use]
    pub fn chain_len(&self, name: &str) -> usize {
        self.chain(name).len()
    }
}

impl fmt::Debug for BehaviorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, chain) in &self.slots {
            map.entry(name, &chain.len());
        }
        map.finish()
    }
}

/// A component definition: identity, display name, behavior, and the
/// optional `render_layer` capability.
///
/// Definitions are values. Deriving a new definition (via
/// [`augment`](crate::augment::augment) or the builder methods here) never
/// mutates behavior another holder can observe.
#[derive(Clone)]
pub struct ComponentDef {
    type_ref: TypeRef,
    behaviors: BehaviorTable,
    render_layer: Option<LayerProducer>,
}

impl ComponentDef {
    /// Creates a definition with a declared display name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            type_ref: TypeRef {
                id: DefId::alloc(),
                name: Some(name.into()),
            },
            behaviors: BehaviorTable::default(),
            render_layer: None,
        }
    }

    /// Creates a definition with no declared name.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            type_ref: TypeRef {
                id: DefId::alloc(),
                name: None,
            },
            behaviors: BehaviorTable::default(),
            render_layer: None,
        }
    }

    /// Appends a method implementation to this definition's own chain for
    /// `name`.
    #[must_use]
    pub fn with_hook(
        mut self,
        name: impl Into<Cow<'static, str>>,
        hook: impl Fn(&mut HookCx<'_, '_>, &MethodArgs) + 'static,
    ) -> Self {
        self.behaviors.append(name.into(), Arc::new(hook));
        self
    }

    /// Installs the `render_layer` producer.
    #[must_use]
    pub fn with_render_layer(
        mut self,
        producer: impl Fn(&mut HookCx<'_, '_>) -> Node + 'static,
    ) -> Self {
        let producer: LayerProducer = Arc::new(producer);
        self.render_layer = Some(producer);
        self
    }

    /// Returns this definition's type reference.
    #[must_use]
    pub fn type_ref(&self) -> TypeRef {
        self.type_ref.clone()
    }

    /// Returns the declared display name, or `"Component"` if none was
    /// declared.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.type_ref.display_name()
    }

    /// Returns the behavior table.
    #[must_use]
    pub fn behaviors(&self) -> &BehaviorTable {
        &self.behaviors
    }

    pub(crate) fn behaviors_mut(&mut self) -> &mut BehaviorTable {
        &mut self.behaviors
    }

    pub(crate) fn render_layer(&self) -> Option<&LayerProducer> {
        self.render_layer.as_ref()
    }
}

impl fmt::Debug for ComponentDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDef")
            .field("type_ref", &self.type_ref)
            .field("behaviors", &self.behaviors)
            .field("render_layer", &self.render_layer.is_some())
            .finish()
    }
}

/// Mutable per-instance state.
///
/// `layer_node` and `layer_output` are written by the
/// [layered](crate::layered) lifecycle hooks; they are exposed for
/// inspection and host bookkeeping, not for general use.
#[derive(Debug, Default)]
pub struct InstanceState {
    /// Application properties for this instance.
    pub props: PropMap,
    /// The detached layer container, while mounted with a layer.
    pub layer_node: Option<LayerNode>,
    /// The most recently produced layer output.
    pub layer_output: Option<Node>,
    pub(crate) phase: Phase,
}

impl InstanceState {
    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// One live occurrence of a [`ComponentDef`], driven by a host runtime.
#[derive(Debug)]
pub struct Instance {
    id: InstanceId,
    def: ComponentDef,
    state: InstanceState,
}

impl Instance {
    /// Creates an unmounted instance of `def`.
    #[must_use]
    pub fn new(def: ComponentDef) -> Self {
        Self {
            id: InstanceId(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed)),
            def,
            state: InstanceState::default(),
        }
    }

    /// Creates an unmounted instance with initial properties.
    #[must_use]
    pub fn with_props(def: ComponentDef, props: PropMap) -> Self {
        let mut instance = Self::new(def);
        instance.state.props = props;
        instance
    }

    /// Returns the instance's identity.
    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Returns the instance's definition.
    #[must_use]
    pub fn def(&self) -> &ComponentDef {
        &self.def
    }

    /// Returns the instance's state.
    #[must_use]
    pub fn state(&self) -> &InstanceState {
        &self.state
    }

    /// Returns the instance's state for mutation (e.g. setting new props
    /// before dispatching [`LifecycleEvent::DidUpdate`]).
    pub fn state_mut(&mut self) -> &mut InstanceState {
        &mut self.state
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Delivers a lifecycle event with no arguments.
    ///
    /// # Panics
    ///
    /// Panics if the event is not legal in the current phase.
    pub fn dispatch(&mut self, event: LifecycleEvent, host: &mut HostCx<'_>) {
        self.dispatch_with(event, &MethodArgs::none(), host);
    }

    /// Delivers a lifecycle event, forwarding `args` to every implementation
    /// in the event's method chain.
    ///
    /// # Panics
    ///
    /// Panics if the event is not legal in the current phase.
    pub fn dispatch_with(&mut self, event: LifecycleEvent, args: &MethodArgs, host: &mut HostCx<'_>) {
        let phase = self.state.phase;
        match event {
            LifecycleEvent::WillMount => {
                assert!(
                    phase == Phase::Unmounted,
                    "WillMount dispatched in phase {phase:?}"
                );
                self.set_phase(Phase::Mounting, host);
                self.run_chain(event.slot_name(), args, host);
            }
            LifecycleEvent::DidMount => {
                assert!(
                    phase == Phase::Mounting,
                    "DidMount dispatched in phase {phase:?}"
                );
                self.run_chain(event.slot_name(), args, host);
                self.set_phase(Phase::Mounted, host);
            }
            LifecycleEvent::DidUpdate => {
                assert!(
                    phase == Phase::Mounted,
                    "DidUpdate dispatched in phase {phase:?}"
                );
                self.set_phase(Phase::Updating, host);
                self.run_chain(event.slot_name(), args, host);
                self.set_phase(Phase::Mounted, host);
            }
            LifecycleEvent::WillUnmount => {
                assert!(
                    phase == Phase::Mounted,
                    "WillUnmount dispatched in phase {phase:?}"
                );
                self.set_phase(Phase::Unmounting, host);
                self.run_chain(event.slot_name(), args, host);
                self.set_phase(Phase::Unmounted, host);
            }
        }
    }

    /// Invokes an arbitrary named method chain.
    ///
    /// Absent names are a no-op. Lifecycle slots should be driven through
    /// [`dispatch`](Self::dispatch) so phase tracking stays consistent.
    pub fn invoke(&mut self, name: &str, args: &MethodArgs, host: &mut HostCx<'_>) {
        self.run_chain(name, args, host);
    }

    fn run_chain(&mut self, name: &str, args: &MethodArgs, host: &mut HostCx<'_>) {
        let def = &self.def;
        let chain = def.behaviors.chain(name);
        if chain.is_empty() {
            return;
        }
        let mut cx = HookCx {
            id: self.id,
            def,
            state: &mut self.state,
            host,
        };
        for hook in chain {
            hook(&mut cx, args);
        }
    }

    fn set_phase(&mut self, to: Phase, host: &mut HostCx<'_>) {
        let from = self.state.phase;
        self.state.phase = to;
        host.tracer.phase_changed(&PhaseChangedEvent {
            instance: self.id,
            from,
            to,
        });
    }
}
