use crate::ports::outbound::ManifestReader;
use crate::shared::error::SbomError;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading manifests from the file system
///
/// This adapter implements the ManifestReader port. Reads go through
/// [`safe_read_to_string`], so symbolic links, non-regular files, and
/// oversized files are rejected.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        // symlink_metadata so a dangling link is reported by the security check
        if std::fs::symlink_metadata(manifest_path).is_err() {
            return Err(SbomError::ManifestNotFound {
                path: manifest_path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Pass the path of a Cargo.toml or go.mod file.",
                    manifest_path.display()
                ),
            }
            .into());
        }

        let description = manifest_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "manifest".to_string());

        safe_read_to_string(manifest_path, &description).map_err(|e| {
            SbomError::ManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
