use crate::sbom_generation::domain::{DependencyGraph, SbomMetadata};
use crate::shared::Result;

/// SbomFormatter port for serializing an assembled dependency graph
pub trait SbomFormatter {
    /// Formats the graph as an SBOM document
    ///
    /// # Arguments
    /// * `graph` - The assembled dependency graph
    /// * `metadata` - Document-level metadata (timestamp, serial number, tool)
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, graph: &DependencyGraph, metadata: &SbomMetadata) -> Result<String>;
}
