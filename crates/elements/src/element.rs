//! Live interface elements.

use protocol::{Action, EventHandlers, NodeKind, Style};

/// Stable identity of a live element. Identity is assigned once at
/// construction and survives any number of reconcile passes that keep the
/// element's type; animation state and input handlers key off it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u64);

/// One element of the live hierarchy. Fields other than identity are freely
/// rewritten by the reconciler; `id` and `kind` only change by replacement.
#[derive(Clone, Debug)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) kind: NodeKind,
    pub(crate) name: String,
    pub(crate) style: Style,
    pub(crate) handlers: EventHandlers,
    pub(crate) text: Option<String>,
    pub(crate) children: Vec<Element>,
}

impl Element {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn handlers(&self) -> &EventHandlers {
        &self.handlers
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Depth-first search for a descendant (or self) by debugging name.
    /// Input layers use this to locate click targets in tests and tooling.
    pub fn find_named(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_named(name))
    }

    /// The action this element submits when clicked, if any.
    pub fn on_click(&self) -> Option<&Action> {
        self.handlers.on_click.as_ref()
    }

    /// Total number of elements in this subtree, including self.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Element::subtree_len).sum::<usize>()
    }
}
