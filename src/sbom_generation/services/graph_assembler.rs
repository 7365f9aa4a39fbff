use crate::sbom_generation::domain::{
    AnalysisType, DependencyGraph, DependencyNode, PackageCoordinate, ResolvedGraph,
};
use crate::sbom_generation::policies::ExclusionPolicy;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, trace};

/// Maps a tool-assigned node id to its resolved coordinate
pub trait CoordinateResolver {
    /// # Returns
    /// `None` when the id cannot be decoded; the edge is then skipped
    fn resolve(&self, node_id: &str) -> Option<PackageCoordinate>;
}

impl<F> CoordinateResolver for F
where
    F: Fn(&str) -> Option<PackageCoordinate>,
{
    fn resolve(&self, node_id: &str) -> Option<PackageCoordinate> {
        self(node_id)
    }
}

/// One coordinate edge recorded by the walk
#[derive(Debug, Clone)]
struct WalkedEdge {
    parent: PackageCoordinate,
    child: PackageCoordinate,
    /// Declared under a name in the exclusion set
    excluded: bool,
    /// Emitted by the root node
    direct: bool,
    /// Declared optional by the parent, so enabled through a feature
    optional: bool,
}

/// GraphAssembler builds the rooted SBOM graph from a resolved tool graph.
///
/// Assembly runs in passes:
/// 1. walk every normal edge reachable from the root node, depth-first and
///    pre-order, recording each coordinate pair once and visiting each tool
///    node at most once (cycles terminate);
/// 2. drop excluded edges, and under [`ExclusionPolicy::Insensitive`] also
///    every node reachable from an excluded child;
/// 3. keep only edges still reachable from the root;
/// 4. keep direct edges for component analysis, all edges for stack.
pub struct GraphAssembler<'a, R> {
    root: PackageCoordinate,
    excluded: &'a HashSet<String>,
    policy: ExclusionPolicy,
    resolver: R,
}

impl<'a, R: CoordinateResolver> GraphAssembler<'a, R> {
    /// # Arguments
    /// * `root` - Coordinate of the analyzed project
    /// * `excluded` - Declared names marked with an ignore comment
    /// * `policy` - How exclusions propagate
    /// * `resolver` - Decodes node ids into coordinates
    pub fn new(
        root: PackageCoordinate,
        excluded: &'a HashSet<String>,
        policy: ExclusionPolicy,
        resolver: R,
    ) -> Self {
        Self {
            root,
            excluded,
            policy,
            resolver,
        }
    }

    /// Assembles the SBOM. The root is always present.
    pub fn assemble(&self, graph: &ResolvedGraph, analysis: AnalysisType) -> DependencyGraph {
        let mut sbom = DependencyGraph::new(self.root.clone());
        let mut optional = 0;

        let Some(root_node) = graph.root_node() else {
            debug!("resolved graph has no root node, emitting root only");
            return sbom;
        };

        let walked = self.walk(graph, &root_node);
        let retained = self.prune(&walked);

        for edge in retained {
            if analysis == AnalysisType::Component && !edge.direct {
                continue;
            }
            if sbom.add_dependency(edge.parent.clone(), edge.child.clone()) && edge.optional {
                optional += 1;
            }
        }

        debug!(
            %analysis,
            walked = walked.len(),
            emitted = sbom.edge_count(),
            optional,
            "assembled dependency graph"
        );
        sbom
    }

    fn walk(&self, graph: &ResolvedGraph, root_node: &DependencyNode) -> Vec<WalkedEdge> {
        let mut walked = Vec::new();
        let mut visited_nodes: HashSet<String> = HashSet::new();
        let mut seen_edges: HashSet<(PackageCoordinate, PackageCoordinate)> = HashSet::new();

        // Frames hold (node, its coordinate, next edge index) so the
        // iteration order matches a recursive pre-order walk.
        let mut stack: Vec<(&DependencyNode, PackageCoordinate, usize)> = Vec::new();
        visited_nodes.insert(root_node.id.clone());
        stack.push((root_node, self.root.clone(), 0));

        while let Some((node, parent, index)) = stack.pop() {
            let Some(edge) = node.edges.get(index) else {
                continue;
            };
            stack.push((node, parent.clone(), index + 1));

            if !edge.is_normal() {
                continue;
            }

            let Some(child) = self.resolver.resolve(&edge.target) else {
                debug!(package_id = edge.target.as_str(), "skipping unparsable dependency");
                continue;
            };

            if !seen_edges.insert((parent.clone(), child.clone())) {
                continue;
            }

            if edge.optional {
                trace!(
                    parent = %parent,
                    dependency = edge.declared_name.as_str(),
                    "optional dependency enabled by a feature"
                );
            }

            walked.push(WalkedEdge {
                parent: parent.clone(),
                child: child.clone(),
                excluded: self.excluded.contains(&edge.declared_name),
                direct: node.id == root_node.id,
                optional: edge.optional,
            });

            if let Some(child_node) = graph.node(&edge.target) {
                if visited_nodes.insert(child_node.id.clone()) {
                    stack.push((child_node, child, 0));
                }
            }
        }

        walked
    }

    fn prune<'w>(&self, walked: &'w [WalkedEdge]) -> Vec<&'w WalkedEdge> {
        let removed = if self.policy.prunes_subtree() {
            self.excluded_subtrees(walked)
        } else {
            HashSet::new()
        };

        let surviving: Vec<&WalkedEdge> = walked
            .iter()
            .filter(|e| !e.excluded && !removed.contains(&e.parent) && !removed.contains(&e.child))
            .collect();

        let mut adjacency: HashMap<&PackageCoordinate, Vec<&PackageCoordinate>> = HashMap::new();
        for edge in &surviving {
            adjacency.entry(&edge.parent).or_default().push(&edge.child);
        }
        let reachable = reachable_from(&adjacency, [&self.root]);

        surviving
            .into_iter()
            .filter(|e| reachable.contains(&e.parent))
            .collect()
    }

    /// Every coordinate reachable from an excluded child in the unpruned walk
    fn excluded_subtrees<'w>(&self, walked: &'w [WalkedEdge]) -> HashSet<&'w PackageCoordinate> {
        let mut adjacency: HashMap<&PackageCoordinate, Vec<&PackageCoordinate>> = HashMap::new();
        for edge in walked {
            adjacency.entry(&edge.parent).or_default().push(&edge.child);
        }

        let starts = walked.iter().filter(|e| e.excluded).map(|e| &e.child);
        let mut removed = reachable_from(&adjacency, starts);
        removed.retain(|c| *c != &self.root);
        removed
    }
}

fn reachable_from<'c, I>(
    adjacency: &HashMap<&'c PackageCoordinate, Vec<&'c PackageCoordinate>>,
    starts: I,
) -> HashSet<&'c PackageCoordinate>
where
    I: IntoIterator<Item = &'c PackageCoordinate>,
{
    let mut reached = HashSet::new();
    let mut queue: VecDeque<&PackageCoordinate> = VecDeque::new();
    for start in starts {
        if reached.insert(start) {
            queue.push_back(start);
        }
    }

    while let Some(current) = queue.pop_front() {
        if let Some(children) = adjacency.get(current) {
            for child in children {
                if reached.insert(*child) {
                    queue.push_back(*child);
                }
            }
        }
    }

    reached
}
