mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Args;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use trustify_sbom::adapters::outbound::console::StderrProgressReporter;
use trustify_sbom::adapters::outbound::filesystem::FileSystemReader;
use trustify_sbom::adapters::outbound::formatters::CycloneDxFormatter;
use trustify_sbom::adapters::outbound::process::BoundedProcessRunner;
use trustify_sbom::application::dto::SbomRequest;
use trustify_sbom::application::factories::{PresenterFactory, PresenterType};
use trustify_sbom::application::use_cases::GenerateSbomUseCase;
use trustify_sbom::config::{discover_config, load_config_from_path, resolve_settings};
use trustify_sbom::logging;
use trustify_sbom::ports::outbound::SbomFormatter;
use trustify_sbom::sbom_generation::domain::Ecosystem;
use trustify_sbom::shared::error::{ExitCode, SbomError};
use trustify_sbom::shared::Result;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                // --help and --version
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let analysis = args.command.analysis();
    let options = args.command.into_args();

    let manifest_path = resolve_manifest_path(&options.manifest)?;

    let config = match &options.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(manifest_dir(&manifest_path))?,
    };
    logging::init(
        args.verbose,
        config.as_ref().and_then(|c| c.log_level.as_deref()),
    );

    let settings = resolve_settings(options.overrides(), config.as_ref())?;
    debug!(
        manifest = %manifest_path.display(),
        %analysis,
        cargo = settings.tools.cargo_path.as_str(),
        go = settings.tools.go_path.as_str(),
        timeout_secs = settings.tools.timeout.as_secs(),
        policy = %settings.policy,
        "resolved settings"
    );

    // Create adapters (Dependency Injection)
    let manifest_reader = FileSystemReader::new();
    let process_runner = BoundedProcessRunner::new(settings.tools.timeout);
    let progress_reporter = StderrProgressReporter::new().quiet(args.quiet);

    let use_case = GenerateSbomUseCase::new(
        manifest_reader,
        process_runner,
        progress_reporter,
        settings.tools,
        settings.policy,
    );

    let response = use_case
        .execute(SbomRequest::new(manifest_path, analysis))
        .await?;

    if !args.quiet {
        eprintln!("📝 Generating CycloneDX JSON format output...");
    }
    let formatted_output = CycloneDxFormatter::new().format(&response.graph, &response.metadata)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(options.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Accepts a manifest file, or a directory holding one of the supported
/// manifests (checked in [`Ecosystem::ALL`] order). The result is absolute
/// so a virtual workspace can be named after its directory.
fn resolve_manifest_path(path: &Path) -> Result<PathBuf> {
    if std::fs::symlink_metadata(path).is_err() {
        return Err(SbomError::ManifestNotFound {
            path: path.to_path_buf(),
            suggestion: "Pass the path of a Cargo.toml or go.mod file, or a directory containing one."
                .to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return absolutize(path);
    }

    let manifest = Ecosystem::ALL
        .iter()
        .map(|ecosystem| path.join(ecosystem.manifest_file_name()))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| SbomError::ManifestNotFound {
            path: path.to_path_buf(),
            suggestion: format!(
                "Directory \"{}\" contains neither Cargo.toml nor go.mod.",
                path.display()
            ),
        })?;
    absolutize(&manifest)
}

/// Canonicalizes the manifest's directory only; the file itself is left
/// alone so the reader still sees (and rejects) a symlinked manifest.
fn absolutize(manifest_path: &Path) -> Result<PathBuf> {
    let file_name = manifest_path
        .file_name()
        .ok_or_else(|| SbomError::ManifestNotFound {
            path: manifest_path.to_path_buf(),
            suggestion: "Pass the path of a Cargo.toml or go.mod file.".to_string(),
        })?;
    let dir = manifest_dir(manifest_path);
    let dir = std::fs::canonicalize(dir)
        .with_context(|| format!("Failed to resolve directory {}", dir.display()))?;
    Ok(dir.join(file_name))
}

fn manifest_dir(manifest_path: &Path) -> &Path {
    match manifest_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
