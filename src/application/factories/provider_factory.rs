use crate::application::dto::ToolSettings;
use crate::application::providers::{
    AnalysisContext, CargoProvider, GoModulesProvider, ProviderOutcome,
};
use crate::sbom_generation::domain::Ecosystem;
use crate::shared::Result;

/// One provider per supported ecosystem
#[derive(Debug, Clone)]
pub enum EcosystemProvider {
    Cargo(CargoProvider),
    Golang(GoModulesProvider),
}

impl EcosystemProvider {
    pub fn ecosystem(&self) -> Ecosystem {
        match self {
            EcosystemProvider::Cargo(_) => Ecosystem::Cargo,
            EcosystemProvider::Golang(_) => Ecosystem::Golang,
        }
    }

    /// Runs the provider bound to this variant
    ///
    /// # Errors
    /// Returns an error when the manifest is invalid or lacks a project identity
    pub async fn provide(&self, ctx: &AnalysisContext<'_>) -> Result<ProviderOutcome> {
        match self {
            EcosystemProvider::Cargo(provider) => provider.provide(ctx).await,
            EcosystemProvider::Golang(provider) => provider.provide(ctx).await,
        }
    }
}

/// Factory for creating ecosystem providers
pub struct ProviderFactory;

impl ProviderFactory {
    /// Creates the provider for `ecosystem`, configured with its executable
    ///
    /// # Examples
    /// ```
    /// use trustify_sbom::application::dto::ToolSettings;
    /// use trustify_sbom::application::factories::ProviderFactory;
    /// use trustify_sbom::sbom_generation::domain::Ecosystem;
    ///
    /// let provider = ProviderFactory::create(Ecosystem::Golang, &ToolSettings::default());
    /// assert_eq!(provider.ecosystem(), Ecosystem::Golang);
    /// ```
    pub fn create(ecosystem: Ecosystem, settings: &ToolSettings) -> EcosystemProvider {
        let executable = settings.executable(ecosystem);
        match ecosystem {
            Ecosystem::Cargo => EcosystemProvider::Cargo(CargoProvider::new(executable)),
            Ecosystem::Golang => EcosystemProvider::Golang(GoModulesProvider::new(executable)),
        }
    }

    /// Progress message shown before the analysis starts
    pub fn progress_message(ecosystem: Ecosystem) -> String {
        format!(
            "📖 Loading {} manifest ({})...",
            ecosystem,
            ecosystem.manifest_file_name()
        )
    }
}
