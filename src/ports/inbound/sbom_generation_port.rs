use crate::sbom_generation::domain::DependencyGraph;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// SbomGenerationPort - Inbound port for dependency graph extraction
///
/// The ecosystem is selected from the manifest file name.
#[async_trait]
pub trait SbomGenerationPort: Send + Sync {
    /// Builds the graph of the project's direct dependencies
    ///
    /// # Arguments
    /// * `manifest_path` - Path to `Cargo.toml` or `go.mod`
    ///
    /// # Errors
    /// Returns an error if the manifest is unsupported, unreadable, or
    /// declares no project identity. A failing native tool is not an error:
    /// the graph then holds only the root.
    async fn component(&self, manifest_path: &Path) -> Result<DependencyGraph>;

    /// Builds the full transitive dependency graph
    ///
    /// # Errors
    /// Same conditions as [`SbomGenerationPort::component`]
    async fn stack(&self, manifest_path: &Path) -> Result<DependencyGraph>;
}
