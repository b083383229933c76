// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run-after method composition.
//!
//! [`augment`] extends a definition with a [`MethodMap`] of named
//! implementations. For every present entry, the new implementation is
//! appended to the definition's chain for that name, so it runs *after* any
//! pre-existing implementations, with the same instance context and the same
//! arguments. Names with no prior implementation get the new one as their
//! sole handler.
//!
//! A map entry may be *vacant* ([`MethodMap::with_entry`] with `None`).
//! Vacant entries are skipped silently — callers assembling maps from
//! optional behavior do not need to special-case the absent half. This
//! permissiveness is part of the contract, not an accident.
//!
//! The definition is taken and returned by value: augmenting never mutates
//! behavior that another holder of the original definition can observe, and
//! repeated augmentation composes — a definition augmented twice has three
//! layers of behavior per shared method name, executing oldest-first.

use alloc::borrow::Cow;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::component::{ComponentDef, Hook, HookCx, MethodArgs};

/// An insertion-ordered mapping of method name to optional implementation.
#[derive(Clone, Default)]
pub struct MethodMap {
    entries: Vec<(Cow<'static, str>, Option<Hook>)>,
}

impl MethodMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an implementation for `name`.
    #[must_use]
    pub fn with(
        mut self,
        name: impl Into<Cow<'static, str>>,
        hook: impl Fn(&mut HookCx<'_, '_>, &MethodArgs) + 'static,
    ) -> Self {
        let hook: Hook = Arc::new(hook);
        self.entries.push((name.into(), Some(hook)));
        self
    }

    /// Adds an entry that may be vacant. Vacant entries are skipped by
    /// [`augment`] without error.
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<Cow<'static, str>>, hook: Option<Hook>) -> Self {
        self.entries.push((name.into(), hook));
        self
    }

    /// Returns the number of entries, vacant ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for MethodMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, hook) in &self.entries {
            map.entry(name, &hook.is_some());
        }
        map.finish()
    }
}

/// Returns `def` extended with every present entry of `methods`, appended in
/// map order after the definition's existing implementations.
#[must_use]
pub fn augment(mut def: ComponentDef, methods: MethodMap) -> ComponentDef {
    for (name, hook) in methods.entries {
        let Some(hook) = hook else {
            // Vacant entry: skipped silently by contract.
            continue;
        };
        def.behaviors_mut().append(name, hook);
    }
    def
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use proptest::prelude::*;

    use super::*;
    use crate::component::Instance;
    use crate::element::PropValue;
    use crate::host::HostCx;
    use crate::testenv::RecordingEnv;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    fn recording_hook(log: &Log, label: &'static str) -> impl Fn(&mut HookCx<'_, '_>, &MethodArgs) + use<> {
        let log = Rc::clone(log);
        move |_cx, _args| log.borrow_mut().push(label)
    }

    #[test]
    fn original_runs_before_added() {
        let log: Log = Rc::default();
        let def = ComponentDef::new("Base").with_hook("save", recording_hook(&log, "base"));
        let def = augment(def, MethodMap::new().with("save", recording_hook(&log, "added")));

        let mut env = RecordingEnv::client();
        let mut host = HostCx::new(&mut env);
        let mut instance = Instance::new(def);
        instance.invoke("save", &MethodArgs::none(), &mut host);

        assert_eq!(*log.borrow(), vec!["base", "added"]);
    }

    #[test]
    fn absent_name_installs_sole_handler() {
        let log: Log = Rc::default();
        let def = ComponentDef::new("Base");
        let def = augment(def, MethodMap::new().with("save", recording_hook(&log, "only")));

        assert_eq!(def.behaviors().chain_len("save"), 1);

        let mut env = RecordingEnv::client();
        let mut host = HostCx::new(&mut env);
        let mut instance = Instance::new(def);
        instance.invoke("save", &MethodArgs::none(), &mut host);
        assert_eq!(*log.borrow(), vec!["only"]);
    }

    #[test]
    fn double_augmentation_composes_three_layers_oldest_first() {
        let log: Log = Rc::default();
        let def = ComponentDef::new("Base").with_hook("save", recording_hook(&log, "base"));
        let def = augment(def, MethodMap::new().with("save", recording_hook(&log, "first")));
        let def = augment(def, MethodMap::new().with("save", recording_hook(&log, "second")));

        assert_eq!(def.behaviors().chain_len("save"), 3);

        let mut env = RecordingEnv::client();
        let mut host = HostCx::new(&mut env);
        let mut instance = Instance::new(def);
        instance.invoke("save", &MethodArgs::none(), &mut host);

        assert_eq!(*log.borrow(), vec!["base", "first", "second"]);
    }

    #[test]
    fn vacant_entries_are_skipped_silently() {
        let log: Log = Rc::default();
        let def = ComponentDef::new("Base").with_hook("save", recording_hook(&log, "base"));
        let def = augment(
            def,
            MethodMap::new()
                .with_entry("save", None)
                .with_entry("load", None),
        );

        assert_eq!(def.behaviors().chain_len("save"), 1);
        assert_eq!(def.behaviors().chain_len("load"), 0);
    }

    #[test]
    fn unrelated_methods_are_untouched() {
        let log: Log = Rc::default();
        let def = ComponentDef::new("Base")
            .with_hook("save", recording_hook(&log, "save"))
            .with_hook("load", recording_hook(&log, "load"));
        let def = augment(def, MethodMap::new().with("save", recording_hook(&log, "extra")));

        assert_eq!(def.behaviors().chain_len("load"), 1);

        let mut env = RecordingEnv::client();
        let mut host = HostCx::new(&mut env);
        let mut instance = Instance::new(def);
        instance.invoke("load", &MethodArgs::none(), &mut host);
        assert_eq!(*log.borrow(), vec!["load"]);
    }

    proptest! {
        // Every layer of a composed chain sees the same argument payload, in
        // the same invocation, regardless of what the payload is.
        #[test]
        fn all_layers_see_identical_args(values in proptest::collection::vec(-1000i64..1000, 0..8)) {
            let seen: Rc<RefCell<Vec<MethodArgs>>> = Rc::default();

            let mut def = ComponentDef::new("Base");
            for _ in 0..3 {
                let seen = Rc::clone(&seen);
                def = augment(
                    def,
                    MethodMap::new().with("poke", move |_cx, args| seen.borrow_mut().push(args.clone())),
                );
            }

            let args = MethodArgs::new(values.iter().copied().map(PropValue::Int).collect());
            let mut env = RecordingEnv::client();
            let mut host = HostCx::new(&mut env);
            let mut instance = Instance::new(def);
            instance.invoke("poke", &args, &mut host);

            let seen = seen.borrow();
            prop_assert_eq!(seen.len(), 3);
            for got in seen.iter() {
                prop_assert_eq!(got, &args);
            }
        }

        // Map order is preserved for distinct names added in one map.
        #[test]
        fn map_order_is_registration_order(extra in 1usize..4) {
            let log: Rc<RefCell<Vec<String>>> = Rc::default();
            let mut map = MethodMap::new();
            for i in 0..extra {
                let log = Rc::clone(&log);
                map = map.with("poke", move |_cx, _args| {
                    log.borrow_mut().push(alloc::format!("layer{i}"));
                });
            }
            let def = augment(ComponentDef::new("Base"), map);

            let mut env = RecordingEnv::client();
            let mut host = HostCx::new(&mut env);
            let mut instance = Instance::new(def);
            instance.invoke("poke", &MethodArgs::none(), &mut host);

            let got = log.borrow();
            prop_assert_eq!(got.len(), extra);
            for (i, label) in got.iter().enumerate() {
                prop_assert_eq!(label, &alloc::format!("layer{i}"));
            }
        }
    }
}
