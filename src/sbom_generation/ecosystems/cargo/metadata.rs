use crate::sbom_generation::domain::{
    DependencyEdge, DependencyKind, DependencyNode, Ecosystem, KindTag, PackageCoordinate,
    ResolvedGraph,
};
use crate::sbom_generation::services::PackageIdParser;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;

// Minimal model of `cargo metadata --format-version 1`; unknown fields are
// ignored so newer cargo releases keep parsing.

#[derive(Debug, Deserialize)]
struct CargoMetadata {
    #[serde(default)]
    packages: Vec<CargoPackage>,
    resolve: Option<CargoResolve>,
    #[serde(default)]
    workspace_members: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CargoPackage {
    name: String,
    id: String,
    #[serde(default)]
    dependencies: Vec<CargoDependency>,
}

/// A dependency as declared in the package's manifest
#[derive(Debug, Deserialize)]
struct CargoDependency {
    name: String,
    rename: Option<String>,
    #[serde(default)]
    optional: bool,
}

impl CargoDependency {
    /// Key the dependency is declared under in `Cargo.toml`
    fn manifest_key(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Deserialize)]
struct CargoResolve {
    #[serde(default)]
    nodes: Vec<CargoNode>,
    root: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CargoNode {
    id: String,
    #[serde(default)]
    deps: Vec<CargoDep>,
}

#[derive(Debug, Deserialize)]
struct CargoDep {
    /// Extern crate name: the manifest key with '-' replaced by '_'
    name: String,
    pkg: String,
    #[serde(default)]
    dep_kinds: Vec<CargoDepKind>,
}

#[derive(Debug, Deserialize)]
struct CargoDepKind {
    kind: Option<String>,
    target: Option<String>,
}

/// Parses `cargo metadata` JSON into a resolved graph.
///
/// Output without a `resolve` section yields an empty graph. Each edge's
/// declared name and optional flag come from the parent package's manifest
/// declarations, matched through renames.
///
/// # Errors
/// Returns an error if the output is not valid metadata JSON
pub fn parse_metadata(output: &str) -> Result<ResolvedGraph> {
    let metadata: CargoMetadata =
        serde_json::from_str(output).context("Failed to parse cargo metadata JSON")?;

    let Some(resolve) = metadata.resolve else {
        tracing::debug!("cargo metadata has no resolve section");
        return Ok(ResolvedGraph::new());
    };

    let packages: HashMap<&str, &CargoPackage> = metadata
        .packages
        .iter()
        .map(|p| (p.id.as_str(), p))
        .collect();

    let mut graph = ResolvedGraph::new()
        .with_root(resolve.root.clone())
        .with_members(metadata.workspace_members.clone());

    for node in &resolve.nodes {
        let package = packages.get(node.id.as_str()).copied();
        let name = package
            .map(|p| p.name.clone())
            .or_else(|| PackageIdParser::parse_str(&node.id).map(|p| p.name))
            .unwrap_or_else(|| node.id.clone());

        let edges = node.deps.iter().map(|dep| to_edge(dep, package)).collect();
        graph.insert_node(DependencyNode::new(node.id.clone(), name).with_edges(edges));
    }

    tracing::debug!(
        packages = metadata.packages.len(),
        nodes = graph.node_count(),
        members = graph.members().len(),
        root = graph.root().unwrap_or("<virtual>"),
        "parsed cargo metadata"
    );

    Ok(graph)
}

fn to_edge(dep: &CargoDep, parent: Option<&CargoPackage>) -> DependencyEdge {
    let declarations: Vec<&CargoDependency> = parent
        .map(|p| {
            p.dependencies
                .iter()
                .filter(|d| d.manifest_key().replace('-', "_") == dep.name)
                .collect()
        })
        .unwrap_or_default();

    let declared_name = declarations
        .first()
        .map(|d| d.manifest_key().to_string())
        .unwrap_or_else(|| dep.name.clone());
    let optional = !declarations.is_empty() && declarations.iter().all(|d| d.optional);

    let kinds = dep
        .dep_kinds
        .iter()
        .map(|k| KindTag::new(DependencyKind::from_tool_kind(k.kind.as_deref()), k.target.clone()))
        .collect();

    DependencyEdge::new(dep.pkg.clone(), declared_name)
        .with_kinds(kinds)
        .with_optional(optional)
}

/// Decodes a cargo package id into a coordinate.
///
/// Git-sourced packages carry their repository as the `vcs_url` qualifier,
/// without the query and fragment.
pub fn resolve_coordinate(package_id: &str) -> Option<PackageCoordinate> {
    let parsed = PackageIdParser::parse_str(package_id)?;
    let coordinate = PackageCoordinate::new(Ecosystem::Cargo, parsed.name, parsed.version);

    match git_source(package_id) {
        Some(repository) => Some(coordinate.with_qualifier("vcs_url", repository)),
        None => Some(coordinate),
    }
}

fn git_source(package_id: &str) -> Option<&str> {
    if !package_id.starts_with("git+") {
        return None;
    }
    let source = package_id.split('#').next().unwrap_or(package_id);
    Some(source.split('?').next().unwrap_or(source))
}
