//! Declarative interface trees.
//!
//! A [Node] describes one interface element and its children. The server (or
//! local immediate UI) regenerates node trees from scratch on every render;
//! the `elements` crate reconciles them against the live hierarchy.

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::assets::SpriteAddress;

/// The type tag of a node. The reconciler reuses a live element only when its
/// recorded kind matches the incoming node's kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Row,
    Column,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DimensionUnit {
    Pixels,
    Percentage,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub unit: DimensionUnit,
    pub value: f32,
}

impl Dimension {
    pub fn px(value: f32) -> Self {
        Self { unit: DimensionUnit::Pixels, value }
    }

    pub fn pct(value: f32) -> Self {
        Self { unit: DimensionUnit::Percentage, value }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlexAlign {
    Start,
    Center,
    End,
    Stretch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlexJustify {
    Start,
    Center,
    End,
    SpaceBetween,
}

/// Style record applied to a live element. All fields are optional; absent
/// fields leave the renderer's defaults in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub background_image: Option<SpriteAddress>,
    pub background_color: Option<[f32; 4]>,
    pub align_items: Option<FlexAlign>,
    pub justify_content: Option<FlexJustify>,
    pub padding: Option<Dimension>,
    pub font_size: Option<f32>,
}

/// Maps interface events to the actions they submit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventHandlers {
    pub on_click: Option<Action>,
}

impl EventHandlers {
    pub fn on_click(action: Action) -> Self {
        Self { on_click: Some(action) }
    }
}

/// One element of a declarative interface tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    /// Debugging name; carries no identity for reconciliation purposes.
    pub name: String,
    pub style: Style,
    pub handlers: EventHandlers,
    /// Text content, populated for `NodeKind::Text` nodes.
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            style: Style::default(),
            handlers: EventHandlers::default(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn row(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Row, name)
    }

    pub fn column(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Column, name)
    }

    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        let mut node = Self::new(NodeKind::Text, name);
        node.text = Some(content.into());
        node
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn handlers(mut self, handlers: EventHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}
