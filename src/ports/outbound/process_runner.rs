use crate::shared::Result;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

/// A single native-tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Executable name or path
    pub program: String,
    pub args: Vec<String>,
    /// Directory the tool runs in (the manifest's directory)
    pub working_dir: PathBuf,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>, args: &[&str], working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir: working_dir.into(),
        }
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// ProcessRunner port for executing native package-manager tools
///
/// Implementations must bound execution time and clean up the child
/// process on every path.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Runs the tool and captures its standard output
    ///
    /// # Returns
    /// - `Ok(Some(stdout))` when the tool exits zero with non-blank output
    /// - `Ok(None)` on a non-zero exit or blank output
    ///
    /// # Errors
    /// Returns an error if the executable cannot be started, its output
    /// cannot be read, or it exceeds the time limit
    async fn run(&self, invocation: &ToolInvocation) -> Result<Option<String>>;
}
