// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural type checks on rendered nodes.

use crate::element::{Node, TypeRef};
use crate::identity::Identity;

/// Returns whether `node` is an element whose declared type matches at least
/// one of `targets`, under the build-default identity policy.
///
/// Absent nodes, [`Node::Empty`], text, fragments, and elements with a raw
/// host tag are never matches — a host-tagged node can never be of a
/// component type.
#[must_use]
pub fn is_element_of_type(node: Option<&Node>, targets: &[TypeRef]) -> bool {
    is_element_of_type_with(node, targets, Identity::default_for_build())
}

/// Like [`is_element_of_type`], with an explicit identity policy.
#[must_use]
pub fn is_element_of_type_with(node: Option<&Node>, targets: &[TypeRef], identity: Identity) -> bool {
    let Some(element) = node.and_then(Node::as_element) else {
        return false;
    };
    let Some(ty) = element.component_type() else {
        return false;
    };
    targets.iter().any(|target| identity.equals(target, ty))
}
