// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component identity equality policies.
//!
//! The strict policy compares [`DefId`](crate::element::DefId)s only. The
//! name-fallback policy exists because a hot-reload proxy may wrap a
//! definition in a way that breaks structural identity while preserving its
//! declared name; comparing names recovers the match in that mode.
//!
//! A process picks its policy once at startup. [`Identity::default_for_build`]
//! maps the build mode onto that choice: development builds (where hot-reload
//! proxies run) get the fallback, release builds stay strict.

use crate::element::TypeRef;

/// Equality strategy for component type identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Identity {
    /// Structural identity only.
    #[default]
    Strict,
    /// Structural identity, falling back to matching non-empty display
    /// names.
    NameFallback,
}

impl Identity {
    /// Returns the policy for the current build mode: [`Self::NameFallback`]
    /// when `debug_assertions` are enabled, [`Self::Strict`] otherwise.
    #[must_use]
    pub const fn default_for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::NameFallback
        } else {
            Self::Strict
        }
    }

    /// Returns whether two type references denote the same component under
    /// this policy.
    #[must_use]
    pub fn equals(self, a: &TypeRef, b: &TypeRef) -> bool {
        if a.id == b.id {
            return true;
        }
        match self {
            Self::Strict => false,
            Self::NameFallback => match (a.name(), b.name()) {
                (Some(an), Some(bn)) => !an.is_empty() && an == bn,
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentDef;

    #[test]
    fn strict_requires_same_definition() {
        let a = ComponentDef::new("Modal").type_ref();
        let b = ComponentDef::new("Modal").type_ref();
        assert!(Identity::Strict.equals(&a, &a));
        assert!(!Identity::Strict.equals(&a, &b));
    }

    #[test]
    fn name_fallback_matches_proxied_definitions() {
        let original = ComponentDef::new("Popover").type_ref();
        let proxied = ComponentDef::new("Popover").type_ref();
        let other = ComponentDef::new("Tooltip").type_ref();

        assert!(Identity::NameFallback.equals(&original, &proxied));
        assert!(!Identity::NameFallback.equals(&original, &other));
    }

    #[test]
    fn name_fallback_ignores_missing_names() {
        let anon_a = ComponentDef::anonymous().type_ref();
        let anon_b = ComponentDef::anonymous().type_ref();
        assert!(!Identity::NameFallback.equals(&anon_a, &anon_b));
        assert!(Identity::NameFallback.equals(&anon_a, &anon_a));
    }
}
