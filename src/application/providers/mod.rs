//! Ecosystem providers: manifest text and native tool output in, assembled
//! graph out.
//!
//! Configuration problems in the manifest are returned as errors. Anything
//! that goes wrong with the native tool is reported as a warning and the
//! provider falls back to a root-only graph.

mod cargo_provider;
mod go_provider;

pub use cargo_provider::CargoProvider;
pub use go_provider::GoModulesProvider;

use crate::ports::outbound::{ProcessRunner, ProgressReporter, ToolInvocation};
use crate::sbom_generation::domain::{AnalysisType, DependencyGraph};
use crate::sbom_generation::policies::ExclusionPolicy;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

/// Everything a provider needs for one analysis
pub struct AnalysisContext<'a> {
    pub manifest_path: &'a Path,
    pub manifest: &'a str,
    pub analysis: AnalysisType,
    pub policy: ExclusionPolicy,
    pub runner: &'a dyn ProcessRunner,
    pub progress: &'a dyn ProgressReporter,
}

impl AnalysisContext<'_> {
    /// Directory the native tools run in
    pub fn working_dir(&self) -> &Path {
        match self.manifest_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    /// Runs a native tool, turning every failure into a warning.
    ///
    /// # Returns
    /// The tool's stdout, or `None` when it failed, timed out, exited
    /// non-zero, or printed nothing
    pub async fn run_tool(&self, invocation: &ToolInvocation) -> Option<String> {
        self.progress.start_task(&format!("Running {}...", invocation));
        let result = self.runner.run(invocation).await;
        self.progress.finish_task();

        match result {
            Ok(Some(output)) => {
                debug!(command = %invocation, bytes = output.len(), "tool output captured");
                Some(output)
            }
            Ok(None) => {
                warn!(command = %invocation, "tool produced no usable output");
                self.progress.report_error(&format!(
                    "'{}' failed or produced no output; no dependencies will be listed",
                    invocation
                ));
                None
            }
            Err(e) => {
                warn!(command = %invocation, error = %e, "tool invocation failed");
                self.progress.report_error(&format!(
                    "'{}' could not be run: {}; no dependencies will be listed",
                    invocation, e
                ));
                None
            }
        }
    }
}

/// Result of one provider run
#[derive(Debug, Clone)]
pub struct ProviderOutcome {
    pub graph: DependencyGraph,
    pub excluded: BTreeSet<String>,
    /// The native tool failed; `graph` holds the root only
    pub degraded: bool,
}
