// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child sequence utilities.
//!
//! Children collections arrive as `&[Node]` slices, possibly containing
//! fragments. These helpers flatten exactly one fragment level — a fragment
//! inside a fragment stays intact — and preserve traversal order.

use alloc::vec::Vec;

use crate::classify::is_element_of_type;
use crate::component::ComponentDef;
use crate::element::{Element, Node, PropMap};

/// An iterator over a children collection with one fragment level flattened.
///
/// Created by [`flatten_once`].
#[derive(Debug)]
struct FlattenOnce<'a> {
    outer: core::slice::Iter<'a, Node>,
    inner: Option<core::slice::Iter<'a, Node>>,
}

impl<'a> Iterator for FlattenOnce<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(node) = inner.next() {
                    return Some(node);
                }
                self.inner = None;
            }
            match self.outer.next()? {
                Node::Fragment(nodes) => self.inner = Some(nodes.iter()),
                node => return Some(node),
            }
        }
    }
}

/// Flattens one fragment level of a children collection.
fn flatten_once(children: &[Node]) -> FlattenOnce<'_> {
    FlattenOnce {
        outer: children.iter(),
        inner: None,
    }
}

/// Returns the first present child, or `None` if there is none.
///
/// "Present" means anything but [`Node::Empty`]; text counts. Used for
/// single-child wrapping scenarios.
#[must_use]
pub fn first_child(children: &[Node]) -> Option<&Node> {
    flatten_once(children).find(|node| !node.is_empty())
}

/// Returns all children that are elements, in traversal order.
#[must_use]
pub fn element_children(children: &[Node]) -> Vec<&Element> {
    element_children_where(children, |_| true)
}

/// Returns all children that are elements and satisfy `predicate`, in
/// traversal order.
#[must_use]
pub fn element_children_where(
    children: &[Node],
    predicate: impl Fn(&Element) -> bool,
) -> Vec<&Element> {
    flatten_once(children)
        .filter_map(Node::as_element)
        .filter(|el| predicate(el))
        .collect()
}

/// Wraps `node` in a `def`-typed element, unless it already is one.
///
/// [`Node::Empty`] passes through unchanged. A node already of `def`'s type
/// (under the build-default identity policy) is returned as-is; anything
/// else becomes the sole child of a new `def`-typed element carrying
/// `props`.
#[must_use]
pub fn wrap_with_component(node: Node, def: &ComponentDef, props: PropMap) -> Node {
    if node.is_empty() {
        return Node::Empty;
    }
    if is_element_of_type(Some(&node), &[def.type_ref()]) {
        return node;
    }
    Node::Element(Element::of_type(def.type_ref()).props(props).child(node))
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::element::PropValue;

    #[test]
    fn first_child_skips_empties() {
        let children = vec![Node::Empty, Node::text("a"), Node::text("b")];
        assert_eq!(first_child(&children), Some(&Node::text("a")));
    }

    #[test]
    fn first_child_of_nothing_is_none() {
        assert_eq!(first_child(&[]), None);
        assert_eq!(first_child(&[Node::Empty, Node::Empty]), None);
    }

    #[test]
    fn first_child_looks_inside_fragments() {
        let children = vec![
            Node::Empty,
            Node::fragment(vec![Node::Empty, Node::from(Element::host("li"))]),
        ];
        assert_eq!(
            first_child(&children).and_then(Node::as_element).unwrap().tag(),
            Element::host("li").tag()
        );
    }

    #[test]
    fn element_children_keeps_order_and_drops_nonelements() {
        let children = vec![
            Node::text("ignored"),
            Node::from(Element::host("a")),
            Node::Empty,
            Node::fragment(vec![
                Node::from(Element::host("b")),
                Node::text("also ignored"),
            ]),
            Node::from(Element::host("c")),
        ];
        let tags: Vec<_> = element_children(&children)
            .into_iter()
            .map(Element::tag)
            .cloned()
            .collect();
        assert_eq!(
            tags,
            vec![
                Element::host("a").tag().clone(),
                Element::host("b").tag().clone(),
                Element::host("c").tag().clone(),
            ]
        );
    }

    #[test]
    fn flatten_is_one_level_only() {
        let nested = Node::fragment(vec![Node::from(Element::host("deep"))]);
        let children = vec![Node::fragment(vec![nested])];
        // The inner fragment is not flattened, so no element surfaces.
        assert!(element_children(&children).is_empty());
    }

    #[test]
    fn element_children_applies_predicate() {
        let children = vec![
            Node::from(Element::host("a").prop("keep", true)),
            Node::from(Element::host("b")),
        ];
        let kept = element_children_where(&children, |el| el.prop_map().contains_key("keep"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].tag(), Element::host("a").tag());
    }

    #[test]
    fn wrap_passes_empty_through() {
        let def = ComponentDef::new("Card");
        assert_eq!(
            wrap_with_component(Node::Empty, &def, PropMap::new()),
            Node::Empty
        );
    }

    #[test]
    fn wrap_leaves_matching_elements_alone() {
        let def = ComponentDef::new("Card");
        let node = Node::from(Element::of_type(def.type_ref()).prop("x", 1i64));
        let wrapped = wrap_with_component(node.clone(), &def, PropMap::new());
        assert_eq!(wrapped, node);
    }

    #[test]
    fn wrap_wraps_other_nodes_with_props() {
        let def = ComponentDef::new("Card");
        let inner = Node::from(Element::host("img"));
        let mut props = PropMap::new();
        props.insert("a".into(), PropValue::Int(1));

        let wrapped = wrap_with_component(inner.clone(), &def, props);
        let el = wrapped.as_element().unwrap();
        assert_eq!(el.component_type(), Some(&def.type_ref()));
        assert_eq!(el.prop_map().get("a"), Some(&PropValue::Int(1)));
        assert_eq!(el.children(), &[inner]);
    }

    #[test]
    fn wrap_wraps_text_nodes() {
        let def = ComponentDef::new("Card");
        let wrapped = wrap_with_component(Node::text("hello"), &def, PropMap::new());
        let el = wrapped.as_element().unwrap();
        assert_eq!(el.component_type(), Some(&def.type_ref()));
        assert_eq!(el.children(), &[Node::text("hello")]);
    }
}
