//! Traits for backends.

use core::fmt;

pub mod memory;

/// A display backend: a tree of mutable nodes, such as DOM elements.
///
/// The reconciler only ever calls mutating methods when a value actually changed, so
/// implementations don’t need to deduplicate writes. Nodes are never moved to another parent;
/// when that would be needed, a new node is created instead.
pub trait Backend {
    /// A reference to a node in the backend.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Error type.
    type Error: std::error::Error + 'static;

    /// Creates a new node as the last child of `parent`.
    fn create_node(&mut self, parent: &Self::Node) -> Result<Self::Node, Self::Error>;

    /// Sets a style property. An empty value resets the property to its default.
    fn set_style_property(
        &mut self,
        node: &Self::Node,
        key: &str,
        value: &str,
    ) -> Result<(), Self::Error>;

    /// Sets the text content of a node.
    fn set_text(&mut self, node: &Self::Node, content: &str) -> Result<(), Self::Error>;

    /// Shows or hides a node and its subtree.
    fn set_visible(&mut self, node: &Self::Node, visible: bool) -> Result<(), Self::Error>;
}
