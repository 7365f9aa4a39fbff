mod coordinate_parser;
mod graph_assembler;
mod ignore_detector;
mod sbom_generator;

pub use coordinate_parser::{PackageIdParser, ParsedPackageId};
pub use graph_assembler::{CoordinateResolver, GraphAssembler};
pub use ignore_detector::{
    contains_ignore_pattern, IgnoreDetector, IGNORE_PATTERN, LEGACY_IGNORE_PATTERN,
};
pub use sbom_generator::{SbomGenerator, TOOL_NAME};
