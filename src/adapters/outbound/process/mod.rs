/// Process adapters for running native package-manager tools
mod bounded_process_runner;

pub use bounded_process_runner::BoundedProcessRunner;
