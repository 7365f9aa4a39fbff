/// Version used when a manifest declares none
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Identity of the analyzed project: the SBOM root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
}

impl ProjectInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Project with the sentinel version
    pub fn unversioned(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_VERSION)
    }
}

/// What the graph assembler emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisType {
    /// Root plus its direct dependencies
    Component,
    /// Full transitive graph
    Stack,
}

impl std::fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisType::Component => write!(f, "component"),
            AnalysisType::Stack => write!(f, "stack"),
        }
    }
}
