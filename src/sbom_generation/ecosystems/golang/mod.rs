//! Go modules: `go.mod` manifests, `go mod graph` and `go list -m all`

mod manifest;
mod module_graph;

use crate::sbom_generation::domain::{Ecosystem, PackageCoordinate};
use crate::sbom_generation::services::PackageIdParser;

pub use manifest::{parse_manifest, GoManifest, MAIN_MODULE_VERSION};
pub use module_graph::{parse_module_graph, parse_selected_versions};

pub const MOD_GRAPH_ARGS: [&str; 2] = ["mod", "graph"];
pub const LIST_MODULES_ARGS: [&str; 3] = ["list", "-m", "all"];

/// Coordinate for a module path: everything before the last '/' is the
/// namespace, the last segment the name.
pub fn module_coordinate(module_path: &str, version: &str) -> PackageCoordinate {
    match module_path.rsplit_once('/') {
        Some((namespace, name)) => {
            PackageCoordinate::new(Ecosystem::Golang, name, version).with_namespace(namespace)
        }
        None => PackageCoordinate::new(Ecosystem::Golang, module_path, version),
    }
}

/// Decodes a `path@version` node id into a coordinate
pub fn resolve_coordinate(module_id: &str) -> Option<PackageCoordinate> {
    PackageIdParser::parse_str(module_id)
        .map(|parsed| module_coordinate(&parsed.name, &parsed.version))
}
