use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading manifest text
///
/// This port abstracts access to the project manifest (`Cargo.toml`,
/// `go.mod`) so parsers and providers stay free of file system access.
pub trait ManifestReader: Send + Sync {
    /// Reads the manifest at the given path
    ///
    /// # Arguments
    /// * `manifest_path` - Path to the manifest file
    ///
    /// # Returns
    /// The manifest content as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The path is not a regular file or is a symbolic link
    /// - The file cannot be read
    fn read_manifest(&self, manifest_path: &Path) -> Result<String>;
}
