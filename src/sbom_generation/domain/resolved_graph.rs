use super::DependencyNode;
use std::collections::{HashMap, HashSet};

/// Id given to the synthesized root of a virtual workspace
pub const VIRTUAL_ROOT_ID: &str = "virtual-workspace-root";

/// The native tool's resolved dependency graph, keyed by tool id
#[derive(Debug, Clone, Default)]
pub struct ResolvedGraph {
    root: Option<String>,
    nodes: HashMap<String, DependencyNode>,
    members: Vec<String>,
}

impl ResolvedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: Option<String>) -> Self {
        self.root = root;
        self
    }

    pub fn with_members(mut self, members: Vec<String>) -> Self {
        self.members = members;
        self
    }

    pub fn insert_node(&mut self, node: DependencyNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn node(&self, id: &str) -> Option<&DependencyNode> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut DependencyNode> {
        self.nodes.get_mut(id)
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the node the walk starts from.
    ///
    /// The explicit root is used when the tool reports one. Otherwise a
    /// virtual root is synthesized whose edges are the union of every
    /// workspace member's edges, taken in member order and de-duplicated
    /// by target id (first occurrence wins). With neither a root nor any
    /// members there is nothing to walk.
    pub fn root_node(&self) -> Option<DependencyNode> {
        if let Some(root) = &self.root {
            return self.nodes.get(root).cloned();
        }

        if self.members.is_empty() {
            return None;
        }

        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for member in &self.members {
            let Some(node) = self.nodes.get(member) else {
                continue;
            };
            for edge in &node.edges {
                if seen.insert(edge.target.clone()) {
                    edges.push(edge.clone());
                }
            }
        }

        tracing::debug!(
            members = self.members.len(),
            dependencies = edges.len(),
            "synthesized virtual workspace root"
        );

        Some(DependencyNode::new(VIRTUAL_ROOT_ID, VIRTUAL_ROOT_ID).with_edges(edges))
    }
}
