//! trustify-sbom - dependency-graph SBOMs for Cargo and Go module projects
//!
//! This library runs a project's native package-manager tooling
//! (`cargo metadata`, `go mod graph`) under a time limit, turns the resolved
//! graph into package-URL coordinates, honours ignore markers written in the
//! manifest, and assembles a rooted dependency graph ready for CycloneDX
//! serialization.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): coordinates, graphs, parsers, and
//!   the exclusion policy
//! - **Application Layer** (`application`): use case, ecosystem providers, DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): process runner, file system, formatter, console
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use trustify_sbom::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let settings = ToolSettings::default();
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     BoundedProcessRunner::new(settings.timeout),
//!     StderrProgressReporter::new(),
//!     settings,
//!     ExclusionPolicy::Insensitive,
//! );
//!
//! let response = use_case.execute(SbomRequest::stack("Cargo.toml")).await?;
//!
//! let output = CycloneDxFormatter::new().format(&response.graph, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod logging;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::adapters::outbound::process::BoundedProcessRunner;
    pub use crate::application::dto::{SbomRequest, SbomResponse, ToolSettings};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::inbound::SbomGenerationPort;
    pub use crate::ports::outbound::{
        ManifestReader, OutputPresenter, ProcessRunner, ProgressReporter, SbomFormatter,
        ToolInvocation,
    };
    pub use crate::sbom_generation::domain::{
        AnalysisType, DependencyGraph, Ecosystem, PackageCoordinate, SbomMetadata,
    };
    pub use crate::sbom_generation::policies::ExclusionPolicy;
    pub use crate::sbom_generation::services::{IgnoreDetector, PackageIdParser, SbomGenerator};
    pub use crate::shared::Result;
}
