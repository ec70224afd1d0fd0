//! Index-based tree reconciliation.
//!
//! Node lists arrive in a stable, server-determined order, so positional
//! diffing is sufficient; there is no keyed reordering.

use protocol::Node;
use tracing::trace;

use crate::element::{Element, ElementId};

/// Updates live element trees to match incoming [Node] trees with minimal
/// disruption. Owns the element id allocator, so one reconciler instance must
/// serve an entire hierarchy for identities to stay unique.
#[derive(Debug, Default)]
pub struct Reconciler {
    next_id: u64,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces an element tree equivalent to `node`, reusing `previous`
    /// where its type tags line up.
    ///
    /// A previous element whose kind matches keeps its identity: children are
    /// reconciled index-by-index, extra previous children are discarded,
    /// extra new children are freshly constructed, and the new style and
    /// handlers are applied onto the same element. A missing or
    /// kind-mismatched previous element is discarded wholesale and a fresh
    /// subtree is built in its place.
    pub fn render(&mut self, previous: Option<Element>, node: &Node) -> Element {
        match previous {
            Some(element) if element.kind == node.kind => self.update_in_place(element, node),
            Some(element) => {
                trace!(
                    previous = ?element.kind,
                    new = ?node.kind,
                    "type tag changed, discarding element"
                );
                self.create(node)
            }
            None => self.create(node),
        }
    }

    /// Builds a brand-new subtree: depth-first, children constructed before
    /// attributes are applied to the parent.
    fn create(&mut self, node: &Node) -> Element {
        let children = node.children.iter().map(|child| self.create(child)).collect();
        let mut element = Element {
            id: self.allocate(),
            kind: node.kind,
            name: String::new(),
            style: Default::default(),
            handlers: Default::default(),
            text: None,
            children,
        };
        apply_attributes(&mut element, node);
        element
    }

    fn update_in_place(&mut self, mut element: Element, node: &Node) -> Element {
        debug_assert_eq!(element.kind, node.kind);

        let mut previous: Vec<Option<Element>> =
            element.children.drain(..).map(Some).collect();

        let mut children = Vec::with_capacity(node.children.len());
        for (index, child_node) in node.children.iter().enumerate() {
            let previous_child = previous.get_mut(index).and_then(Option::take);
            children.push(self.render(previous_child, child_node));
        }
        // Previous children beyond the new child count fall out of scope here
        // and are removed from the hierarchy.

        element.children = children;
        apply_attributes(&mut element, node);
        element
    }

    fn allocate(&mut self) -> ElementId {
        self.next_id += 1;
        ElementId(self.next_id)
    }
}

fn apply_attributes(element: &mut Element, node: &Node) {
    element.name = node.name.clone();
    element.style = node.style.clone();
    element.handlers = node.handlers.clone();
    element.text = node.text.clone();
}
