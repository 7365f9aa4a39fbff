use crate::application::dto::{SbomRequest, SbomResponse, ToolSettings};
use crate::application::factories::ProviderFactory;
use crate::application::providers::AnalysisContext;
use crate::ports::inbound::SbomGenerationPort;
use crate::ports::outbound::{ManifestReader, ProcessRunner, ProgressReporter};
use crate::sbom_generation::domain::{AnalysisType, DependencyGraph, Ecosystem};
use crate::sbom_generation::policies::ExclusionPolicy;
use crate::sbom_generation::services::SbomGenerator;
use crate::shared::error::SbomError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use tracing::info;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// This use case orchestrates the SBOM generation workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `PR` - ProcessRunner implementation
/// * `PROG` - ProgressReporter implementation
pub struct GenerateSbomUseCase<MR, PR, PROG> {
    manifest_reader: MR,
    process_runner: PR,
    progress_reporter: PROG,
    settings: ToolSettings,
    policy: ExclusionPolicy,
}

impl<MR, PR, PROG> GenerateSbomUseCase<MR, PR, PROG>
where
    MR: ManifestReader,
    PR: ProcessRunner,
    PROG: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        manifest_reader: MR,
        process_runner: PR,
        progress_reporter: PROG,
        settings: ToolSettings,
        policy: ExclusionPolicy,
    ) -> Self {
        Self {
            manifest_reader,
            process_runner,
            progress_reporter,
            settings,
            policy,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Arguments
    /// * `request` - Manifest path and analysis type
    ///
    /// # Returns
    /// SbomResponse with the assembled graph and document metadata. When the
    /// native tool fails the graph holds only the root.
    ///
    /// # Errors
    /// Returns an error if the manifest is unsupported, unreadable, invalid,
    /// or declares no project identity
    pub async fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        let manifest_path = request.manifest_path.as_path();

        // Step 1: Select the ecosystem from the manifest file name
        let ecosystem =
            Ecosystem::from_manifest(manifest_path).ok_or_else(|| SbomError::UnsupportedManifest {
                path: manifest_path.to_path_buf(),
            })?;

        // Step 2: Read the manifest
        self.progress_reporter
            .report(&ProviderFactory::progress_message(ecosystem));
        let manifest = self.manifest_reader.read_manifest(manifest_path)?;

        // Step 3: Resolve and assemble through the ecosystem's provider
        let provider = ProviderFactory::create(ecosystem, &self.settings);
        let ctx = AnalysisContext {
            manifest_path,
            manifest: &manifest,
            analysis: request.analysis,
            policy: self.policy,
            runner: &self.process_runner,
            progress: &self.progress_reporter,
        };
        let outcome = provider.provide(&ctx).await?;

        if !outcome.excluded.is_empty() {
            self.progress_reporter.report(&format!(
                "🚫 Ignored {} dependency(ies) marked in the manifest: {}",
                outcome.excluded.len(),
                outcome
                    .excluded
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        info!(
            %ecosystem,
            analysis = %request.analysis,
            policy = %self.policy,
            components = outcome.graph.components().len(),
            relationships = outcome.graph.edge_count(),
            degraded = outcome.degraded,
            "dependency graph ready"
        );
        self.progress_reporter.report_completion(&format!(
            "✅ {} analysis complete: {} component(s), {} relationship(s)",
            request.analysis,
            outcome.graph.components().len(),
            outcome.graph.edge_count()
        ));

        // Step 4: Generate SBOM metadata
        let metadata = SbomGenerator::generate_default_metadata(ecosystem, request.analysis);

        Ok(SbomResponse::new(
            outcome.graph,
            metadata,
            outcome.excluded,
            outcome.degraded,
        ))
    }

    async fn graph_for(&self, manifest_path: &Path, analysis: AnalysisType) -> Result<DependencyGraph> {
        self.execute(SbomRequest::new(manifest_path, analysis))
            .await
            .map(|response| response.graph)
    }
}

#[async_trait]
impl<MR, PR, PROG> SbomGenerationPort for GenerateSbomUseCase<MR, PR, PROG>
where
    MR: ManifestReader,
    PR: ProcessRunner,
    PROG: ProgressReporter,
{
    async fn component(&self, manifest_path: &Path) -> Result<DependencyGraph> {
        self.graph_for(manifest_path, AnalysisType::Component).await
    }

    async fn stack(&self, manifest_path: &Path) -> Result<DependencyGraph> {
        self.graph_for(manifest_path, AnalysisType::Stack).await
    }
}
