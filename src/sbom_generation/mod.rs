//! Domain layer: models, pure services, policies and per-ecosystem parsers.
//!
//! Nothing here performs I/O; tool output and manifest text come in as
//! strings through the application layer.

pub mod domain;
pub mod ecosystems;
pub mod policies;
pub mod services;
