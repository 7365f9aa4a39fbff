//! Cargo: `Cargo.toml` manifests and `cargo metadata` resolved graphs

mod manifest;
mod metadata;

pub use manifest::{parse_manifest, CargoManifest};
pub use metadata::{parse_metadata, resolve_coordinate};

/// Arguments passed to the cargo executable
pub const METADATA_ARGS: [&str; 3] = ["metadata", "--format-version", "1"];
