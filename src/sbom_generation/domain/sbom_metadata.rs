use super::{AnalysisType, Ecosystem};

/// Document-level data stamped on each serialized SBOM
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    pub timestamp: String,
    pub serial_number: String,
    pub tool_name: String,
    pub tool_version: String,
    pub ecosystem: Ecosystem,
    pub analysis: AnalysisType,
}
