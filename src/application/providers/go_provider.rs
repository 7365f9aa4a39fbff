use super::{AnalysisContext, ProviderOutcome};
use crate::ports::outbound::ToolInvocation;
use crate::sbom_generation::domain::DependencyGraph;
use crate::sbom_generation::ecosystems::golang::{
    module_coordinate, parse_manifest, parse_module_graph, parse_selected_versions,
    resolve_coordinate, LIST_MODULES_ARGS, MOD_GRAPH_ARGS,
};
use crate::sbom_generation::services::{GraphAssembler, IgnoreDetector};
use crate::shared::Result;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// Go modules provider: `go.mod` plus `go mod graph` and `go list -m all`
#[derive(Debug, Clone)]
pub struct GoModulesProvider {
    executable: String,
}

impl GoModulesProvider {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Builds the SBOM for a `go.mod`.
    ///
    /// # Errors
    /// Returns an error when the manifest has no `module` directive
    pub async fn provide(&self, ctx: &AnalysisContext<'_>) -> Result<ProviderOutcome> {
        let manifest = parse_manifest(ctx.manifest, ctx.manifest_path)?;
        let main_module = manifest.project.name.as_str();
        let root = module_coordinate(main_module, &manifest.project.version);
        let excluded = IgnoreDetector::new()
            .with_leading_keyword("require")
            .find_ignored(ctx.manifest, &manifest.declared);
        let excluded_sorted: BTreeSet<String> = excluded.iter().cloned().collect();
        info!(
            module = main_module,
            declared = manifest.declared.len(),
            ignored = excluded.len(),
            "analyzing go module"
        );

        let graph_invocation =
            ToolInvocation::new(&self.executable, &MOD_GRAPH_ARGS, ctx.working_dir());
        let Some(graph_output) = ctx.run_tool(&graph_invocation).await else {
            return Ok(ProviderOutcome {
                graph: DependencyGraph::new(root),
                excluded: excluded_sorted,
                degraded: true,
            });
        };

        let selected = self.selected_versions(ctx).await;
        let resolved = parse_module_graph(&graph_output, main_module, &selected);
        let graph = GraphAssembler::new(root, &excluded, ctx.policy, resolve_coordinate)
            .assemble(&resolved, ctx.analysis);

        Ok(ProviderOutcome {
            graph,
            excluded: excluded_sorted,
            degraded: false,
        })
    }

    /// MVS-selected versions; empty when `go list -m all` yields nothing
    async fn selected_versions(&self, ctx: &AnalysisContext<'_>) -> HashMap<String, String> {
        let invocation =
            ToolInvocation::new(&self.executable, &LIST_MODULES_ARGS, ctx.working_dir());
        match ctx.runner.run(&invocation).await {
            Ok(Some(output)) => parse_selected_versions(&output),
            Ok(None) => {
                debug!(command = %invocation, "no module selection; using graph versions");
                HashMap::new()
            }
            Err(e) => {
                debug!(command = %invocation, error = %e, "module selection unavailable; using graph versions");
                HashMap::new()
            }
        }
    }
}
