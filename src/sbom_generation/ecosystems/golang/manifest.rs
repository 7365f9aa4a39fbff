use crate::sbom_generation::domain::ProjectInfo;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::path::Path;

/// Version given to the main module, which has none of its own
pub const MAIN_MODULE_VERSION: &str = "v0.0.0";

/// What the extractor needs from a `go.mod`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoManifest {
    pub project: ProjectInfo,
    /// Module paths named by `require` directives
    pub declared: BTreeSet<String>,
}

/// Parses `go.mod` content.
///
/// # Errors
/// Returns an error when no `module` directive is present
pub fn parse_manifest(content: &str, manifest_path: &Path) -> Result<GoManifest> {
    let mut module = None;
    let mut declared = BTreeSet::new();
    let mut in_require_block = false;

    for line in content.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if in_require_block {
            if line == ")" {
                in_require_block = false;
            } else if let Some(path) = first_token(line) {
                declared.insert(path);
            }
            continue;
        }

        let (directive, rest) = match line.split_once(char::is_whitespace) {
            Some((directive, rest)) => (directive, rest.trim()),
            None => (line, ""),
        };

        match directive {
            "module" => module = first_token(rest),
            "require" if rest == "(" => in_require_block = true,
            "require" => {
                if let Some(path) = first_token(rest) {
                    declared.insert(path);
                }
            }
            _ if line == "require(" => in_require_block = true,
            _ => {}
        }
    }

    let Some(module) = module else {
        return Err(SbomError::MissingProjectIdentity {
            path: manifest_path.to_path_buf(),
            reason: "Invalid go.mod: no module directive found".to_string(),
            hint: "Declare the module path with a 'module' directive".to_string(),
        }
        .into());
    };

    Ok(GoManifest {
        project: ProjectInfo::new(module, MAIN_MODULE_VERSION),
        declared,
    })
}

fn strip_comment(line: &str) -> &str {
    line.split_once("//").map_or(line, |(code, _)| code)
}

fn first_token(text: &str) -> Option<String> {
    text.split_whitespace()
        .next()
        .map(|token| token.trim_matches('"').to_string())
        .filter(|token| !token.is_empty())
}
