use crate::sbom_generation::domain::{AnalysisType, Ecosystem, SbomMetadata};
use chrono::Utc;
use uuid::Uuid;

pub const TOOL_NAME: &str = "trustify-sbom";

/// SbomGenerator service for generating SBOM metadata
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates metadata with the current timestamp and a fresh
    /// `urn:uuid` serial number
    pub fn generate_metadata(
        tool_name: &str,
        tool_version: &str,
        ecosystem: Ecosystem,
        analysis: AnalysisType,
    ) -> SbomMetadata {
        SbomMetadata {
            timestamp: Utc::now().to_rfc3339(),
            serial_number: format!("urn:uuid:{}", Uuid::new_v4()),
            tool_name: tool_name.to_string(),
            tool_version: tool_version.to_string(),
            ecosystem,
            analysis,
        }
    }

    /// Metadata naming this crate as the producing tool
    pub fn generate_default_metadata(ecosystem: Ecosystem, analysis: AnalysisType) -> SbomMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"), ecosystem, analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_metadata() {
        let metadata = SbomGenerator::generate_default_metadata(Ecosystem::Cargo, AnalysisType::Stack);

        assert_eq!(metadata.tool_name, "trustify-sbom");
        assert_eq!(metadata.tool_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(metadata.analysis, AnalysisType::Stack);
        assert!(metadata.timestamp.contains('T'));
    }

    #[test]
    fn test_serial_numbers_are_unique_uuids() {
        let first = SbomGenerator::generate_metadata("t", "1", Ecosystem::Golang, AnalysisType::Component);
        let second = SbomGenerator::generate_metadata("t", "1", Ecosystem::Golang, AnalysisType::Component);

        assert_ne!(first.serial_number, second.serial_number);
        let uuid_part = first.serial_number.strip_prefix("urn:uuid:").unwrap();
        assert_eq!(uuid_part.len(), 36);
        assert_eq!(uuid_part.matches('-').count(), 4);
    }
}
