//! Search-tree nodes stored in an append-only arena.
//!
//! Nodes refer to their parent by [`NodeId`] instead of by reference, so
//! every ancestor of a node stays available for path reconstruction for as
//! long as the arena lives.

use smallvec::SmallVec;

use crate::state::SearchState;

/// Index of a node inside a [`NodeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the search tree
#[derive(Debug, Clone)]
pub struct Node<S: SearchState> {
    /// Parent node (`None` for the root)
    pub parent: Option<NodeId>,
    pub state: S,
    /// Transition from the parent (`None` for the root)
    pub action: Option<S::Action>,
    /// Tree depth (root = 0)
    pub depth: u32,
}

impl<S: SearchState> Node<S> {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only storage for every node generated during a search.
///
/// Duplicate states are stored once per path that reaches them.
#[derive(Debug, Clone)]
pub struct NodeArena<S: SearchState> {
    nodes: Vec<Node<S>>,
}

impl<S: SearchState> NodeArena<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert a root node wrapping `state`
    pub fn insert_root(&mut self, state: S) -> NodeId {
        self.push(Node {
            parent: None,
            state,
            action: None,
            depth: 0,
        })
    }

    fn push(&mut self, node: Node<S>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.0]
    }

    /// Number of nodes generated so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create one child per successor of the node's state.
    ///
    /// Children are returned in successor enumeration order.
    pub fn expand(&mut self, id: NodeId) -> SmallVec<[NodeId; 8]> {
        let parent = self.get(id);
        let depth = parent.depth + 1;
        let successors = parent.state.successors();

        successors
            .into_iter()
            .map(|(action, state)| {
                self.push(Node {
                    parent: Some(id),
                    state,
                    action: Some(action),
                    depth,
                })
            })
            .collect()
    }

    /// Actions leading from the root to `id`, oldest first.
    ///
    /// Empty for the root itself.
    pub fn extract_path(&self, id: NodeId) -> Vec<S::Action> {
        let mut path = Vec::new();
        let mut node = self.get(id);

        while let Some(parent) = node.parent {
            if let Some(action) = &node.action {
                path.push(action.clone());
            }
            node = self.get(parent);
        }

        path.reverse();
        path
    }
}

impl<S: SearchState> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}
