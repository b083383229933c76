// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element data model.
//!
//! A *node* is one value in a rendered view-tree description. Nodes are plain
//! data: the runtime that owns the primary tree produces and consumes them,
//! and this crate only inspects, wraps, and re-renders them.
//!
//! Component-typed elements carry a [`TypeRef`] — the structural identity of
//! the [`ComponentDef`](crate::component::ComponentDef) that declared them.
//! Identity comparison between `TypeRef`s goes through an equality policy
//! (see [`identity`](crate::identity)); nothing in this module compares
//! types directly.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

/// Process-wide definition-identity allocator. Monotonic, never reused.
static NEXT_DEF_ID: AtomicU32 = AtomicU32::new(0);

/// Structural identity of a component definition.
///
/// Allocated once per [`ComponentDef`](crate::component::ComponentDef) and
/// never reused within a process, so two definitions compare equal under the
/// strict policy iff one was derived from the other (the Rust rendition of
/// reference equality).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefId(u32);

impl DefId {
    pub(crate) fn alloc() -> Self {
        Self(NEXT_DEF_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for DefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DefId({})", self.0)
    }
}

/// A cheap, clonable reference to a component definition's identity.
///
/// Carried on every component-typed element. Holds the [`DefId`] plus the
/// declared display name, which the name-fallback identity policy consults
/// when a hot-reload proxy has broken structural identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub(crate) id: DefId,
    pub(crate) name: Option<Cow<'static, str>>,
}

impl TypeRef {
    /// Returns the structural identity.
    #[must_use]
    pub fn id(&self) -> DefId {
        self.id
    }

    /// Returns the declared display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the declared display name, or `"Component"` if none was
    /// declared.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Component")
    }
}

/// The declared type of an [`Element`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementTag {
    /// A raw built-in tag name (e.g. `"div"`). Host-tagged elements can
    /// never match a component definition.
    Host(&'static str),
    /// A declared component type.
    Component(TypeRef),
}

/// A property value on an element.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// Boolean property.
    Bool(bool),
    /// Integer property.
    Int(i64),
    /// Floating-point property.
    Float(f64),
    /// String property.
    Str(String),
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for PropValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::Str(String::from(v))
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// Ordered property bag carried by an element.
pub type PropMap = BTreeMap<Cow<'static, str>, PropValue>;

/// A single element: a tag, a property bag, and ordered children.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: ElementTag,
    props: PropMap,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with a raw built-in tag.
    #[must_use]
    pub fn host(tag: &'static str) -> Self {
        Self {
            tag: ElementTag::Host(tag),
            props: PropMap::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element of the given component type.
    #[must_use]
    pub fn of_type(ty: TypeRef) -> Self {
        Self {
            tag: ElementTag::Component(ty),
            props: PropMap::new(),
            children: Vec::new(),
        }
    }

    /// Adds or replaces a property.
    #[must_use]
    pub fn prop(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Replaces the whole property bag.
    #[must_use]
    pub fn props(mut self, props: PropMap) -> Self {
        self.props = props;
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns the element's tag.
    #[must_use]
    pub fn tag(&self) -> &ElementTag {
        &self.tag
    }

    /// Returns the element's component type, or `None` for host-tagged
    /// elements.
    #[must_use]
    pub fn component_type(&self) -> Option<&TypeRef> {
        match &self.tag {
            ElementTag::Component(ty) => Some(ty),
            ElementTag::Host(_) => None,
        }
    }

    /// Returns the property bag.
    #[must_use]
    pub fn prop_map(&self) -> &PropMap {
        &self.props
    }

    /// Returns the ordered children.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// A value in a children collection or render output.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Node {
    /// Nothing. Render producers yield this for "no output"; classifiers
    /// treat it the way the source runtime treats null children.
    #[default]
    Empty,
    /// Plain text content.
    Text(String),
    /// A single element.
    Element(Element),
    /// An ordered group of nodes. Child utilities flatten one level of
    /// fragments; nested fragments stay intact.
    Fragment(Vec<Node>),
}

impl Node {
    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a fragment from an ordered collection of nodes.
    #[must_use]
    pub fn fragment(nodes: impl IntoIterator<Item = Self>) -> Self {
        Self::Fragment(nodes.into_iter().collect())
    }

    /// Returns whether this node is [`Node::Empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the contained element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn def_ids_are_distinct() {
        let a = DefId::alloc();
        let b = DefId::alloc();
        assert_ne!(a, b);
    }

    #[test]
    fn display_name_falls_back() {
        let anon = TypeRef {
            id: DefId::alloc(),
            name: None,
        };
        assert_eq!(anon.display_name(), "Component");

        let named = TypeRef {
            id: DefId::alloc(),
            name: Some(Cow::Borrowed("Tooltip")),
        };
        assert_eq!(named.display_name(), "Tooltip");
    }

    #[test]
    fn host_elements_have_no_component_type() {
        let el = Element::host("div").prop("class", "overlay");
        assert_eq!(el.component_type(), None);
        assert_eq!(el.tag(), &ElementTag::Host("div"));
    }

    #[test]
    fn builder_preserves_child_order() {
        let el = Element::host("ul")
            .child(Element::host("li").child(Node::text("a")))
            .child(Element::host("li").child(Node::text("b")));
        assert_eq!(el.children().len(), 2);
        assert_eq!(
            el.children()[1].as_element().unwrap().children()[0],
            Node::text("b")
        );
    }
}
