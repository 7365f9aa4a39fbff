use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use trustify_sbom::prelude::*;
use trustify_sbom::shared::error::SbomError;

/// Mock ManifestReader that serves fixed content
#[derive(Clone)]
pub struct MockManifestReader {
    pub content: String,
    pub should_fail: bool,
    pub requested: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockManifestReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested.lock().unwrap().clone()
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        self.requested
            .lock()
            .unwrap()
            .push(manifest_path.to_path_buf());
        if self.should_fail {
            return Err(SbomError::ManifestNotFound {
                path: manifest_path.to_path_buf(),
                suggestion: "mock failure".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }
}
