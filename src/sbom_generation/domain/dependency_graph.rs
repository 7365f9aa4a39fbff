use super::PackageCoordinate;
use std::collections::HashSet;

/// DependencyGraph aggregate: the assembled SBOM
///
/// A rooted directed graph of package coordinates. The root is always
/// present, even with no dependencies. Edges keep insertion order and an
/// identical (parent, child) pair is never stored twice.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    root: PackageCoordinate,
    edges: Vec<(PackageCoordinate, PackageCoordinate)>,
    edge_index: HashSet<(PackageCoordinate, PackageCoordinate)>,
}

impl DependencyGraph {
    pub fn new(root: PackageCoordinate) -> Self {
        Self {
            root,
            edges: Vec::new(),
            edge_index: HashSet::new(),
        }
    }

    pub fn root(&self) -> &PackageCoordinate {
        &self.root
    }

    /// Adds a parent -> child edge.
    ///
    /// # Returns
    /// `false` if the identical edge was already present
    pub fn add_dependency(&mut self, parent: PackageCoordinate, child: PackageCoordinate) -> bool {
        let edge = (parent, child);
        if self.edge_index.contains(&edge) {
            return false;
        }
        self.edge_index.insert(edge.clone());
        self.edges.push(edge);
        true
    }

    pub fn contains_dependency(&self, parent: &PackageCoordinate, child: &PackageCoordinate) -> bool {
        self.edge_index.contains(&(parent.clone(), child.clone()))
    }

    pub fn edges(&self) -> &[(PackageCoordinate, PackageCoordinate)] {
        &self.edges
    }

    /// Children of `parent` in insertion order
    pub fn dependencies_of(&self, parent: &PackageCoordinate) -> Vec<&PackageCoordinate> {
        self.edges
            .iter()
            .filter(|(p, _)| p == parent)
            .map(|(_, child)| child)
            .collect()
    }

    /// Every non-root coordinate, in first-seen order
    pub fn components(&self) -> Vec<&PackageCoordinate> {
        let mut seen = HashSet::new();
        let mut components = Vec::new();
        for (parent, child) in &self.edges {
            for coordinate in [parent, child] {
                if coordinate != &self.root && seen.insert(coordinate) {
                    components.push(coordinate);
                }
            }
        }
        components
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_root_only(&self) -> bool {
        self.edges.is_empty()
    }
}
