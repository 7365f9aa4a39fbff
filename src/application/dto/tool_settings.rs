use crate::sbom_generation::domain::Ecosystem;
use std::time::Duration;

/// Native tool settings, resolved once at the program boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSettings {
    /// Cargo executable name or path
    pub cargo_path: String,
    /// Go executable name or path
    pub go_path: String,
    /// Time limit for one tool invocation
    pub timeout: Duration,
}

impl ToolSettings {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn with_cargo_path(mut self, path: impl Into<String>) -> Self {
        self.cargo_path = path.into();
        self
    }

    pub fn with_go_path(mut self, path: impl Into<String>) -> Self {
        self.go_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Executable configured for the ecosystem
    pub fn executable(&self, ecosystem: Ecosystem) -> &str {
        match ecosystem {
            Ecosystem::Cargo => &self.cargo_path,
            Ecosystem::Golang => &self.go_path,
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            cargo_path: Ecosystem::Cargo.default_executable().to_string(),
            go_path: Ecosystem::Golang.default_executable().to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}
