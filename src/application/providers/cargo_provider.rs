use super::{AnalysisContext, ProviderOutcome};
use crate::ports::outbound::ToolInvocation;
use crate::sbom_generation::domain::{DependencyGraph, Ecosystem, PackageCoordinate};
use crate::sbom_generation::ecosystems::cargo::{
    parse_manifest, parse_metadata, resolve_coordinate, METADATA_ARGS,
};
use crate::sbom_generation::services::{GraphAssembler, IgnoreDetector};
use crate::shared::Result;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Cargo provider: `Cargo.toml` plus `cargo metadata`
#[derive(Debug, Clone)]
pub struct CargoProvider {
    executable: String,
}

impl CargoProvider {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Builds the SBOM for a Cargo manifest.
    ///
    /// # Errors
    /// Returns an error when the manifest is not valid TOML or declares
    /// neither `[package]` nor `[workspace]`
    pub async fn provide(&self, ctx: &AnalysisContext<'_>) -> Result<ProviderOutcome> {
        let manifest = parse_manifest(ctx.manifest, ctx.manifest_path)?;
        let root = PackageCoordinate::new(
            Ecosystem::Cargo,
            manifest.project.name.clone(),
            manifest.project.version.clone(),
        );
        let excluded = IgnoreDetector::new().find_ignored(ctx.manifest, &manifest.declared);
        info!(
            project = %root,
            declared = manifest.declared.len(),
            ignored = excluded.len(),
            "analyzing cargo project"
        );

        let invocation = ToolInvocation::new(&self.executable, &METADATA_ARGS, ctx.working_dir());
        let resolved = match ctx.run_tool(&invocation).await {
            Some(output) => match parse_metadata(&output) {
                Ok(resolved) => Some(resolved),
                Err(e) => {
                    warn!(error = %e, "cargo metadata output could not be parsed");
                    ctx.progress.report_error(&format!(
                        "Could not parse output of '{}': {}",
                        invocation, e
                    ));
                    None
                }
            },
            None => None,
        };

        let excluded_sorted: BTreeSet<String> = excluded.iter().cloned().collect();
        let Some(resolved) = resolved else {
            return Ok(ProviderOutcome {
                graph: DependencyGraph::new(root),
                excluded: excluded_sorted,
                degraded: true,
            });
        };

        let graph = GraphAssembler::new(root, &excluded, ctx.policy, resolve_coordinate)
            .assemble(&resolved, ctx.analysis);

        Ok(ProviderOutcome {
            graph,
            excluded: excluded_sorted,
            degraded: false,
        })
    }
}
