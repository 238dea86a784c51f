//! Binary tree built from a parent -> child edge list, with in-order traversal.
//!
//! A side utility: each parent holds at most two children, filled left first.

use std::collections::BTreeMap;

use crate::types::{Edge, GraphError, GraphResult, Vertex};

#[derive(Debug, Clone)]
struct Children<V> {
    left: Option<V>,
    right: Option<V>,
}

impl<V> Default for Children<V> {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
        }
    }
}

/// Binary tree keyed by vertex.
#[derive(Debug, Clone)]
pub struct BinaryTree<V: Vertex> {
    nodes: BTreeMap<V, Children<V>>,
}

impl<V: Vertex> BinaryTree<V> {
    /// Build from `(parent, child)` edges. Weights are ignored.
    ///
    /// A parent's first child goes left, its second right; a third child is
    /// `InvalidInput`.
    pub fn from_edges<I, E>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<V>>,
    {
        let mut nodes: BTreeMap<V, Children<V>> = BTreeMap::new();
        for edge in edges {
            let edge: Edge<V> = edge.into();
            let Edge { source, target, .. } = edge;
            nodes.entry(target.clone()).or_default();
            let children = nodes.entry(source.clone()).or_default();
            if children.left.is_none() {
                children.left = Some(target);
            } else if children.right.is_none() {
                children.right = Some(target);
            } else {
                return Err(GraphError::InvalidInput(format!(
                    "vertex {:?} already has two children, cannot add {:?}",
                    source, target
                )));
            }
        }
        Ok(Self { nodes })
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the key appears in the tree.
    pub fn contains(&self, key: &V) -> bool {
        self.nodes.contains_key(key)
    }

    /// Left and right child of a key.
    pub fn children(&self, key: &V) -> GraphResult<(Option<&V>, Option<&V>)> {
        let children = self
            .nodes
            .get(key)
            .ok_or_else(|| GraphError::unknown(key))?;
        Ok((children.left.as_ref(), children.right.as_ref()))
    }

    /// In-order keys of the subtree rooted at `root`.
    ///
    /// A key reached twice (the edge list was not a tree) is visited once.
    pub fn inorder(&self, root: &V) -> GraphResult<Vec<V>> {
        if !self.contains(root) {
            return Err(GraphError::unknown(root));
        }

        let mut order = Vec::new();
        let mut seen = std::collections::HashSet::new();
        let mut stack: Vec<&V> = Vec::new();
        let mut current = Some(root);

        loop {
            while let Some(key) = current.filter(|k| seen.insert(*k)) {
                stack.push(key);
                current = self.nodes.get(key).and_then(|c| c.left.as_ref());
            }
            let Some(key) = stack.pop() else {
                break;
            };
            order.push(key.clone());
            current = self.nodes.get(key).and_then(|c| c.right.as_ref());
        }
        Ok(order)
    }
}
