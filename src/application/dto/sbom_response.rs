use crate::sbom_generation::domain::{DependencyGraph, SbomMetadata};
use std::collections::BTreeSet;

/// SbomResponse - Internal response DTO from the SBOM generation use case
///
/// Adapters format `graph` with `metadata` into the output document.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// The assembled graph; root-only when the native tool failed
    pub graph: DependencyGraph,
    /// SBOM metadata (timestamp, tool info, serial number)
    pub metadata: SbomMetadata,
    /// Declared names that carried an ignore marker
    pub excluded: BTreeSet<String>,
    /// Whether the native tool failed and the graph was degraded to its root
    pub degraded: bool,
}

impl SbomResponse {
    pub fn new(
        graph: DependencyGraph,
        metadata: SbomMetadata,
        excluded: BTreeSet<String>,
        degraded: bool,
    ) -> Self {
        Self {
            graph,
            metadata,
            excluded,
            degraded,
        }
    }
}
