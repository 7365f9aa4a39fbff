use std::fmt;
use std::path::Path;

/// Package-manager ecosystems the extractor knows how to analyze.
///
/// Dispatch over ecosystems is closed: every variant binds a manifest file
/// name, a package-URL type and the native tool that resolves its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ecosystem {
    Cargo,
    Golang,
}

impl Ecosystem {
    pub const ALL: [Ecosystem; 2] = [Ecosystem::Cargo, Ecosystem::Golang];

    /// Package-URL type used in emitted coordinates
    pub fn purl_type(&self) -> &'static str {
        match self {
            Ecosystem::Cargo => "cargo",
            Ecosystem::Golang => "golang",
        }
    }

    /// File name of the manifest this ecosystem reads
    pub fn manifest_file_name(&self) -> &'static str {
        match self {
            Ecosystem::Cargo => "Cargo.toml",
            Ecosystem::Golang => "go.mod",
        }
    }

    /// Executable looked up on `PATH` when no explicit path is configured
    pub fn default_executable(&self) -> &'static str {
        match self {
            Ecosystem::Cargo => "cargo",
            Ecosystem::Golang => "go",
        }
    }

    /// Selects the ecosystem from a manifest path by its file name.
    ///
    /// # Returns
    /// `None` when the file name matches no supported manifest
    pub fn from_manifest(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|ecosystem| ecosystem.manifest_file_name() == file_name)
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ecosystem::Cargo => write!(f, "Cargo"),
            Ecosystem::Golang => write!(f, "Go modules"),
        }
    }
}
