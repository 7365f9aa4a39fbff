use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trustify_sbom::config::SettingsOverrides;
use trustify_sbom::sbom_generation::domain::AnalysisType;
use trustify_sbom::sbom_generation::policies::ExclusionPolicy;

/// Generate dependency SBOMs for Cargo and Go module projects
#[derive(Parser, Debug)]
#[command(name = "trustify-sbom")]
#[command(version)]
#[command(
    about = "Generate CycloneDX SBOMs for Cargo and Go module projects",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress messages (warnings are still shown)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// SBOM of the project's direct dependencies
    Component(AnalysisArgs),
    /// SBOM of the full transitive dependency graph
    Stack(AnalysisArgs),
}

impl Command {
    pub fn analysis(&self) -> AnalysisType {
        match self {
            Command::Component(_) => AnalysisType::Component,
            Command::Stack(_) => AnalysisType::Stack,
        }
    }

    pub fn into_args(self) -> AnalysisArgs {
        match self {
            Command::Component(args) | Command::Stack(args) => args,
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Path to Cargo.toml or go.mod (or a directory containing one)
    pub manifest: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Cargo executable to run
    #[arg(long, env = "TRUSTIFY_DA_CARGO_PATH", value_name = "PATH")]
    pub cargo_path: Option<String>,

    /// Go executable to run
    #[arg(long, env = "TRUSTIFY_DA_GO_PATH", value_name = "PATH")]
    pub go_path: Option<String>,

    /// Time limit for each native tool run, in seconds
    #[arg(
        long,
        env = "TRUSTIFY_DA_TOOL_TIMEOUT_SECONDS",
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// How ignored dependencies propagate: insensitive or sensitive
    #[arg(long, env = "TRUSTIFY_DA_IGNORE_METHOD", value_name = "METHOD")]
    pub ignore_method: Option<ExclusionPolicy>,

    /// Config file (defaults to trustify-sbom.config.yml next to the manifest)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl AnalysisArgs {
    /// Flags and environment variables, already merged by clap
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            cargo_path: self.cargo_path.clone(),
            go_path: self.go_path.clone(),
            timeout_seconds: self.timeout,
            ignore_method: self.ignore_method,
        }
    }
}
