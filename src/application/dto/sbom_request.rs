use crate::sbom_generation::domain::AnalysisType;
use std::path::PathBuf;

/// SbomRequest - Internal request DTO for the SBOM generation use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomRequest {
    /// Path to the `Cargo.toml` or `go.mod` to analyze
    pub manifest_path: PathBuf,
    /// Direct dependencies only, or the full transitive graph
    pub analysis: AnalysisType,
}

impl SbomRequest {
    pub fn new(manifest_path: impl Into<PathBuf>, analysis: AnalysisType) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            analysis,
        }
    }

    pub fn component(manifest_path: impl Into<PathBuf>) -> Self {
        Self::new(manifest_path, AnalysisType::Component)
    }

    pub fn stack(manifest_path: impl Into<PathBuf>) -> Self {
        Self::new(manifest_path, AnalysisType::Stack)
    }
}
