use crate::shared::Result;

/// OutputPresenter port for delivering the serialized SBOM
///
/// Implementations write to stdout or to the file named by `--output`.
pub trait OutputPresenter {
    /// Delivers the SBOM document
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written, for example
    /// when the output directory is missing or the target is a symlink
    fn present(&self, content: &str) -> Result<()>;
}
