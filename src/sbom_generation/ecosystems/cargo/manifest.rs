use crate::sbom_generation::domain::{ProjectInfo, DEFAULT_VERSION};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::path::Path;
use toml::{Table, Value};

/// Name used for a virtual workspace whose directory name is unavailable
const FALLBACK_WORKSPACE_NAME: &str = "rust-workspace";

/// Tables whose keys declare dependencies, as paths from the document root
const DEPENDENCY_SECTIONS: [&[&str]; 5] = [
    &["dependencies"],
    &["dev-dependencies"],
    &["build-dependencies"],
    &["workspace", "dependencies"],
    &["workspace", "build-dependencies"],
];

/// Dependency tables allowed under `[target.<cfg>]`
const TARGET_DEPENDENCY_SECTIONS: [&str; 3] =
    ["dependencies", "dev-dependencies", "build-dependencies"];

/// What the extractor needs from a `Cargo.toml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoManifest {
    pub project: ProjectInfo,
    /// Every dependency name declared in any section
    pub declared: BTreeSet<String>,
}

/// Parses `Cargo.toml` content.
///
/// The project identity is `[package].name` with its version (a string or
/// `{ workspace = true }`, inheriting `[workspace.package].version`). A
/// virtual workspace without `[package].name` is named after the manifest's
/// directory. Missing versions fall back to `0.0.0`.
///
/// # Errors
/// Returns an error for invalid TOML or when neither `[package].name` nor
/// `[workspace]` is present
pub fn parse_manifest(content: &str, manifest_path: &Path) -> Result<CargoManifest> {
    let document: Table = toml::from_str(content).map_err(|e| SbomError::ManifestParseError {
        path: manifest_path.to_path_buf(),
        details: e.to_string(),
    })?;

    let project = project_info(&document, manifest_path)?;
    let declared = declared_dependencies(&document);

    Ok(CargoManifest { project, declared })
}

fn project_info(document: &Table, manifest_path: &Path) -> Result<ProjectInfo> {
    let workspace_version = lookup(document, &["workspace", "package", "version"])
        .and_then(Value::as_str)
        .map(str::to_string);

    let package_name = lookup(document, &["package", "name"]).and_then(Value::as_str);
    if let Some(name) = package_name {
        let version = match lookup(document, &["package", "version"]) {
            Some(Value::String(version)) => Some(version.clone()),
            Some(Value::Table(table)) if inherits_workspace(table) => workspace_version,
            _ => None,
        };
        return Ok(ProjectInfo::new(
            name,
            version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        ));
    }

    if document.contains_key("workspace") {
        let name = manifest_path
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or(FALLBACK_WORKSPACE_NAME);
        tracing::debug!(name, "no [package] name, using virtual workspace identity");
        return Ok(ProjectInfo::new(
            name,
            workspace_version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        ));
    }

    Err(SbomError::MissingProjectIdentity {
        path: manifest_path.to_path_buf(),
        reason: "Invalid Cargo.toml: no [package] or [workspace] section found".to_string(),
        hint: "Add a [package] section with a name, or a [workspace] section".to_string(),
    }
    .into())
}

fn inherits_workspace(table: &Table) -> bool {
    table.get("workspace").and_then(Value::as_bool) == Some(true)
}

fn declared_dependencies(document: &Table) -> BTreeSet<String> {
    let mut declared = BTreeSet::new();

    for section in DEPENDENCY_SECTIONS {
        if let Some(Value::Table(table)) = lookup(document, section) {
            declared.extend(table.keys().cloned());
        }
    }

    if let Some(Value::Table(targets)) = document.get("target") {
        for target in targets.values().filter_map(Value::as_table) {
            for section in TARGET_DEPENDENCY_SECTIONS {
                if let Some(Value::Table(table)) = target.get(section) {
                    declared.extend(table.keys().cloned());
                }
            }
        }
    }

    declared
}

fn lookup<'a>(document: &'a Table, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(document.get(*first)?, |value, key| value.get(*key))
}
