// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for lifecycle and layer activity.
//!
//! [`TraceSink`] has one method per event with a default no-op body, so an
//! implementation only overrides the events it cares about. [`Tracer`] wraps
//! an optional `&mut dyn TraceSink`: when the `trace` feature is **off**,
//! every `Tracer` method compiles to nothing; when **on**, each method
//! performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::component::{InstanceId, Phase};
use crate::host::ContainerHandle;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when an instance's lifecycle phase changes.
#[derive(Clone, Copy, Debug)]
pub struct PhaseChangedEvent {
    /// The instance whose phase changed.
    pub instance: InstanceId,
    /// Previous phase.
    pub from: Phase,
    /// New phase.
    pub to: Phase,
}

/// Emitted when a layer container is allocated (pre-mount).
#[derive(Clone, Copy, Debug)]
pub struct LayerAllocatedEvent {
    /// The owning instance.
    pub instance: InstanceId,
    /// The allocated container.
    pub container: ContainerHandle,
}

/// Emitted when a layer container is attached to the document body.
#[derive(Clone, Copy, Debug)]
pub struct LayerAttachedEvent {
    /// The owning instance.
    pub instance: InstanceId,
    /// The attached container.
    pub container: ContainerHandle,
}

/// Emitted after layer output is rendered into its container.
#[derive(Clone, Copy, Debug)]
pub struct LayerRenderedEvent {
    /// The owning instance.
    pub instance: InstanceId,
    /// The render target container.
    pub container: ContainerHandle,
}

/// Emitted when a layer container is unmounted and removed from the body.
#[derive(Clone, Copy, Debug)]
pub struct LayerRemovedEvent {
    /// The owning instance.
    pub instance: InstanceId,
    /// The removed container.
    pub container: ContainerHandle,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from lifecycle dispatch and the layer hooks.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an instance's phase changes.
    fn on_phase_changed(&mut self, e: &PhaseChangedEvent) {
        _ = e;
    }

    /// Called when a layer container is allocated.
    fn on_layer_allocated(&mut self, e: &LayerAllocatedEvent) {
        _ = e;
    }

    /// Called when a layer container is attached to the body.
    fn on_layer_attached(&mut self, e: &LayerAttachedEvent) {
        _ = e;
    }

    /// Called after layer output is rendered into its container.
    fn on_layer_rendered(&mut self, e: &LayerRenderedEvent) {
        _ = e;
    }

    /// Called when a layer container is unmounted and removed.
    fn on_layer_removed(&mut self, e: &LayerRemovedEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PhaseChangedEvent`].
    #[inline]
    pub fn phase_changed(&mut self, e: &PhaseChangedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_phase_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerAllocatedEvent`].
    #[inline]
    pub fn layer_allocated(&mut self, e: &LayerAllocatedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_allocated(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerAttachedEvent`].
    #[inline]
    pub fn layer_attached(&mut self, e: &LayerAttachedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_attached(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerRenderedEvent`].
    #[inline]
    pub fn layer_rendered(&mut self, e: &LayerRenderedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_rendered(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerRemovedEvent`].
    #[inline]
    pub fn layer_removed(&mut self, e: &LayerRemovedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_removed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
