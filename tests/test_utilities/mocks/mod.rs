/// Mock implementations for testing
mod mock_manifest_reader;
mod mock_process_runner;
mod mock_progress_reporter;

pub use mock_manifest_reader::MockManifestReader;
pub use mock_process_runner::{MockProcessRunner, MockResponse};
pub use mock_progress_reporter::MockProgressReporter;
