//! Live interface element hierarchy and the reconciliation algorithm.
//!
//! The server describes interfaces as [protocol::Node] trees, regenerated
//! from scratch on every render. This crate owns the long-lived counterpart:
//! [Element] trees with stable identity, updated in place by [Reconciler] so
//! that in-flight animations and input handlers attached to an element
//! survive re-renders that keep its type.

mod element;
mod reconciler;

pub use element::{Element, ElementId};
pub use reconciler::Reconciler;
