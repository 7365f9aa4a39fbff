use crate::sbom_generation::domain::{DependencyEdge, DependencyNode, ResolvedGraph};
use std::collections::HashMap;

/// Pseudo-modules `go mod graph` reports for the language and toolchain
const PSEUDO_MODULES: [&str; 2] = ["go", "toolchain"];

/// Parses `go list -m all` into module path -> selected version.
///
/// The main module line carries no version and is skipped. For replaced
/// modules (`path version => replacement`) the required version is kept.
pub fn parse_selected_versions(output: &str) -> HashMap<String, String> {
    output
        .lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let path = tokens.next()?;
            let version = tokens.next().filter(|v| *v != "=>")?;
            Some((path.to_string(), version.to_string()))
        })
        .collect()
}

/// Parses `go mod graph` output.
///
/// Each line is `from to`, where `from` is the bare main module path or
/// `path@version`. Every target is rewritten to the version MVS selected
/// for its module, so edges to versions the build will not use collapse
/// onto the selected one.
///
/// # Arguments
/// * `output` - `go mod graph` stdout
/// * `main_module` - Path of the main module; becomes the root id
/// * `selected` - Output of [`parse_selected_versions`]; may be empty
pub fn parse_module_graph(
    output: &str,
    main_module: &str,
    selected: &HashMap<String, String>,
) -> ResolvedGraph {
    let mut graph = ResolvedGraph::new().with_root(Some(main_module.to_string()));
    graph.insert_node(DependencyNode::new(main_module, main_module));

    for line in output.lines() {
        let mut tokens = line.split_whitespace();
        let (Some(from), Some(to)) = (tokens.next(), tokens.next()) else {
            continue;
        };

        let (target_path, target_version) = split_module(to);
        if PSEUDO_MODULES.contains(&target_path) || PSEUDO_MODULES.contains(&split_module(from).0) {
            continue;
        }
        let Some(target_version) = target_version else {
            continue;
        };

        let version = selected
            .get(target_path)
            .map(String::as_str)
            .unwrap_or(target_version);
        let edge = DependencyEdge::new(format!("{}@{}", target_path, version), target_path);

        match graph.node_mut(from) {
            Some(node) => node.edges.push(edge),
            None => {
                let name = split_module(from).0;
                graph.insert_node(DependencyNode::new(from, name).with_edges(vec![edge]));
            }
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        selected = selected.len(),
        "parsed go module graph"
    );
    graph
}

fn split_module(id: &str) -> (&str, Option<&str>) {
    match id.rsplit_once('@') {
        Some((path, version)) => (path, Some(version)),
        None => (id, None),
    }
}
