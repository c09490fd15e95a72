//! A headless backend that keeps its element tree in memory.
//!
//! Useful for tests and for running the UI without a display. The tree sits behind a shared lock,
//! so a clone of the backend can be kept around to inspect what the host has rendered.

use super::Backend;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Index of a node in a [`MemoryBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// A node in the in-memory tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryNode {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub style: HashMap<String, String>,
    pub text: String,
    pub visible: bool,
}

impl MemoryNode {
    fn new(parent: Option<NodeId>) -> MemoryNode {
        MemoryNode {
            parent,
            children: Vec::new(),
            style: HashMap::new(),
            text: String::new(),
            visible: true,
        }
    }

    /// Returns a style property, treating empty values as unset.
    pub fn style(&self, key: &str) -> Option<&str> {
        self.style
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Number of calls made to each backend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpCounts {
    pub created: usize,
    pub style_writes: usize,
    pub text_writes: usize,
    pub visibility_writes: usize,
}

impl OpCounts {
    pub fn total(&self) -> usize {
        self.created + self.style_writes + self.text_writes + self.visibility_writes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("no such node: {0:?}")]
    NoSuchNode(NodeId),
    #[error("injected failure")]
    Injected,
}

#[derive(Debug)]
struct MemoryTree {
    nodes: Vec<MemoryNode>,
    counts: OpCounts,
    /// Number of operations that will still succeed before every operation fails.
    fail_after: Option<usize>,
}

impl MemoryTree {
    fn check(&mut self, id: NodeId) -> Result<&mut MemoryNode, MemoryError> {
        match &mut self.fail_after {
            Some(0) => return Err(MemoryError::Injected),
            Some(n) => *n -= 1,
            None => (),
        }
        self.nodes.get_mut(id.0).ok_or(MemoryError::NoSuchNode(id))
    }
}

/// An in-memory element tree. Cloning yields another handle to the same tree.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    tree: Arc<Mutex<MemoryTree>>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        MemoryBackend::new()
    }
}

impl MemoryBackend {
    /// Creates a new tree containing only the root node.
    pub fn new() -> MemoryBackend {
        MemoryBackend {
            tree: Arc::new(Mutex::new(MemoryTree {
                nodes: vec![MemoryNode::new(None)],
                counts: OpCounts::default(),
                fail_after: None,
            })),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns a snapshot of a node.
    pub fn node(&self, id: NodeId) -> Option<MemoryNode> {
        self.tree.lock().nodes.get(id.0).cloned()
    }

    /// Total number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.tree.lock().nodes.len()
    }

    /// Returns the visible children of a node, in order.
    pub fn visible_children(&self, id: NodeId) -> Vec<NodeId> {
        let tree = self.tree.lock();
        match tree.nodes.get(id.0) {
            Some(node) => node
                .children
                .iter()
                .copied()
                .filter(|child| tree.nodes[child.0].visible)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn counts(&self) -> OpCounts {
        self.tree.lock().counts
    }

    pub fn reset_counts(&self) {
        self.tree.lock().counts = OpCounts::default();
    }

    /// Lets `n` more operations succeed, then fails every following operation.
    pub fn fail_after(&self, n: usize) {
        self.tree.lock().fail_after = Some(n);
    }

    pub fn clear_failure(&self) {
        self.tree.lock().fail_after = None;
    }
}

impl Backend for MemoryBackend {
    type Node = NodeId;
    type Error = MemoryError;

    fn create_node(&mut self, parent: &NodeId) -> Result<NodeId, MemoryError> {
        let mut tree = self.tree.lock();
        let id = NodeId(tree.nodes.len());
        tree.check(*parent)?.children.push(id);
        tree.nodes.push(MemoryNode::new(Some(*parent)));
        tree.counts.created += 1;
        Ok(id)
    }

    fn set_style_property(
        &mut self,
        node: &NodeId,
        key: &str,
        value: &str,
    ) -> Result<(), MemoryError> {
        let mut tree = self.tree.lock();
        tree.check(*node)?.style.insert(key.into(), value.into());
        tree.counts.style_writes += 1;
        Ok(())
    }

    fn set_text(&mut self, node: &NodeId, content: &str) -> Result<(), MemoryError> {
        let mut tree = self.tree.lock();
        tree.check(*node)?.text = content.into();
        tree.counts.text_writes += 1;
        Ok(())
    }

    fn set_visible(&mut self, node: &NodeId, visible: bool) -> Result<(), MemoryError> {
        let mut tree = self.tree.lock();
        tree.check(*node)?.visible = visible;
        tree.counts.visibility_writes += 1;
        Ok(())
    }
}
