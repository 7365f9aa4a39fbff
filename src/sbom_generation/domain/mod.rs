pub mod coordinate;
pub mod dependency_graph;
pub mod dependency_node;
pub mod ecosystem;
pub mod project_info;
pub mod resolved_graph;
pub mod sbom_metadata;

pub use coordinate::PackageCoordinate;
pub use dependency_graph::DependencyGraph;
pub use dependency_node::{DependencyEdge, DependencyKind, DependencyNode, KindTag};
pub use ecosystem::Ecosystem;
pub use project_info::{AnalysisType, ProjectInfo, DEFAULT_VERSION};
pub use resolved_graph::{ResolvedGraph, VIRTUAL_ROOT_ID};
pub use sbom_metadata::SbomMetadata;
