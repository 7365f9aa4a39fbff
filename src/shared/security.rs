use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum manifest size accepted (10 MB)
///
/// Manifests are small hand-written files; anything larger is rejected
/// before it is read into memory.
pub const MAX_MANIFEST_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "Cargo.toml", "go.mod")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a manifest after the regular-file and size checks pass.
///
/// # Arguments
/// * `path` - Manifest path
/// * `file_description` - Used in error messages
///
/// # Errors
/// Returns an error if any check fails or the file is not valid UTF-8
pub fn safe_read_to_string(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;
    validate_file_size(metadata.len(), path, MAX_MANIFEST_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Cargo.toml");
        fs::write(&file_path, "[package]").unwrap();

        assert!(validate_regular_file(&file_path, "Cargo.toml").is_ok());
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "Cargo.toml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_regular_file_missing() {
        let result = validate_regular_file(Path::new("/nonexistent/go.mod"), "go.mod");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read go.mod metadata"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.toml");
        let link = temp_dir.path().join("Cargo.toml");
        fs::write(&target, "[package]").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_regular_file(&link, "Cargo.toml");
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/Cargo.toml");
        let result = validate_file_size(MAX_MANIFEST_SIZE + 1, &path, MAX_MANIFEST_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
        assert!(validate_file_size(1000, &path, MAX_MANIFEST_SIZE).is_ok());
    }

    #[test]
    fn test_safe_read_to_string() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("go.mod");
        fs::write(&file_path, "module example.com/app\n").unwrap();

        let content = safe_read_to_string(&file_path, "go.mod").unwrap();
        assert_eq!(content, "module example.com/app\n");
    }
}
