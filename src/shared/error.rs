use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Native tool failures degrade to a root-only SBOM and still exit with
/// `Success`; only configuration problems are reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// SBOM produced (possibly root-only)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing manifest, invalid manifest, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Configuration errors (`Manifest*`, `MissingProjectIdentity`,
/// `UnsupportedManifest`, `InvalidConfig`) abort the analysis. Tool errors
/// (`Tool*`) are caught by the ecosystem providers and degrade to a
/// root-only graph.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Manifest file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest is syntactically valid")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Invalid manifest: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    MissingProjectIdentity {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Unsupported manifest: {path}\n\n💡 Hint: Supported manifests are Cargo.toml and go.mod")]
    UnsupportedManifest { path: PathBuf },

    #[error("Executable not found: {program}\nDetails: {details}\n\n💡 Hint: Install the tool or point to it with --cargo-path / --go-path")]
    ToolNotFound { program: String, details: String },

    #[error("{program} timed out after {timeout:?}")]
    ToolTimedOut { program: String, timeout: Duration },

    #[error("Failed to read output of {program}: {details}")]
    ToolOutputRead { program: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_manifest_not_found_display() {
        let error = SbomError::ManifestNotFound {
            path: PathBuf::from("/work/app/Cargo.toml"),
            suggestion: "Pass the path to an existing manifest".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Manifest file not found"));
        assert!(display.contains("/work/app/Cargo.toml"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Pass the path to an existing manifest"));
    }

    #[test]
    fn test_missing_identity_display() {
        let error = SbomError::MissingProjectIdentity {
            path: PathBuf::from("/work/app/Cargo.toml"),
            reason: "no [package] or [workspace] section found".to_string(),
            hint: "Add a [package] section".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid manifest"));
        assert!(display.contains("no [package] or [workspace] section found"));
        assert!(display.contains("Add a [package] section"));
    }

    #[test]
    fn test_tool_timed_out_display() {
        let error = SbomError::ToolTimedOut {
            program: "cargo".to_string(),
            timeout: Duration::from_secs(5),
        };
        assert_eq!(format!("{}", error), "cargo timed out after 5s");
    }

    #[test]
    fn test_tool_timed_out_keeps_sub_second_precision() {
        let error = SbomError::ToolTimedOut {
            program: "go".to_string(),
            timeout: Duration::from_millis(1500),
        };
        assert_eq!(format!("{}", error), "go timed out after 1.5s");
    }

    #[test]
    fn test_tool_not_found_display() {
        let error = SbomError::ToolNotFound {
            program: "/opt/bin/go".to_string(),
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("/opt/bin/go"));
        assert!(display.contains("--go-path"));
    }

    #[test]
    fn test_unsupported_manifest_display() {
        let error = SbomError::UnsupportedManifest {
            path: PathBuf::from("package.json"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unsupported manifest: package.json"));
        assert!(display.contains("Cargo.toml and go.mod"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = SbomError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
    }
}
