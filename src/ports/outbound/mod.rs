/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, native tools, console).
pub mod formatter;
pub mod manifest_reader;
pub mod output_presenter;
pub mod process_runner;
pub mod progress_reporter;

pub use formatter::SbomFormatter;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use process_runner::{ProcessRunner, ToolInvocation};
pub use progress_reporter::ProgressReporter;
