use tracing::trace;

/// Longest bare package name accepted in the simple form
const MAX_BARE_NAME_LENGTH: usize = 64;

/// Name and version decoded from an opaque package identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPackageId {
    pub name: String,
    pub version: String,
}

impl ParsedPackageId {
    fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }
}

/// PackageIdParser decodes tool-assigned package identifiers.
///
/// Accepted grammars:
/// - simple: `regex@1.4.3`, `regex:1.4.3`
/// - source URL with fragment: `registry+https://host/index#regex@1.4.3`,
///   `git+ssh://git@host/org/regex.git?branch=dev#regex@1.4.3`
/// - source URL with a bare version fragment, the name taken from the last
///   URL path segment: `ssh://git@host/org/regex.git#1.4.3`,
///   `path+file:///work/my-lib#0.1.0`
///
/// Anything else is unparsable. Parsing never panics and never guesses.
pub struct PackageIdParser;

impl PackageIdParser {
    /// Parses an optional identifier.
    ///
    /// # Returns
    /// `None` for absent, blank or malformed input
    pub fn parse(package_id: Option<&str>) -> Option<ParsedPackageId> {
        Self::parse_str(package_id?)
    }

    /// Parses an identifier string.
    pub fn parse_str(package_id: &str) -> Option<ParsedPackageId> {
        if package_id.trim().is_empty() {
            return None;
        }

        let parsed = if package_id.contains("://") {
            Self::parse_url_form(package_id)
        } else {
            Self::parse_simple_form(package_id)
        };

        if parsed.is_none() {
            trace!(package_id, "unparsable package id");
        }
        parsed
    }

    /// `name@version` or `name:version`, '@' taking precedence.
    ///
    /// A bare name is valid but carries no version, so it is still
    /// reported as unparsable.
    fn parse_simple_form(package_id: &str) -> Option<ParsedPackageId> {
        for separator in ['@', ':'] {
            if let Some((name, version)) = package_id.rsplit_once(separator) {
                if !name.is_empty() && !version.is_empty() {
                    return Some(ParsedPackageId::new(name, version));
                }
            }
        }

        if Self::is_valid_bare_name(package_id) {
            trace!(package_id, "bare package name without version");
        }
        None
    }

    fn parse_url_form(package_id: &str) -> Option<ParsedPackageId> {
        let (url, fragment) = package_id.split_once('#')?;
        if fragment.is_empty() {
            return None;
        }

        if fragment.contains('@') || fragment.contains(':') {
            if let Some(parsed) = Self::parse_simple_form(fragment) {
                return Some(parsed);
            }
        }

        if Self::is_misseparated_fragment(fragment) {
            return None;
        }

        if fragment.starts_with(['@', ':']) || fragment.ends_with(['@', ':']) {
            return None;
        }

        let name = Self::name_from_url(url)?;
        Some(ParsedPackageId::new(&name, fragment))
    }

    /// `^[A-Za-z][A-Za-z0-9_-]*$`, not ending in '-', at most 64 chars.
    pub fn is_valid_bare_name(name: &str) -> bool {
        let mut chars = name.chars();
        let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());

        starts_with_letter
            && chars.all(Self::is_name_char)
            && !name.ends_with('-')
            && name.len() <= MAX_BARE_NAME_LENGTH
            && !name.contains("this-is-not")
    }

    fn is_name_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }

    /// Detects `name-1.2...` / `name_1.2...`: a name and version joined
    /// by '-' or '_' where '@' or ':' was expected.
    fn is_misseparated_fragment(fragment: &str) -> bool {
        let bytes = fragment.as_bytes();
        if !bytes.first().is_some_and(|b| b.is_ascii_alphabetic()) {
            return false;
        }

        let name_end = bytes
            .iter()
            .position(|&b| !Self::is_name_char(b as char))
            .unwrap_or(bytes.len());

        (1..name_end).any(|i| {
            if bytes[i] != b'-' && bytes[i] != b'_' {
                return false;
            }
            let digits = bytes[i + 1..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            digits > 0 && bytes.get(i + 1 + digits) == Some(&b'.')
        })
    }

    /// Last meaningful path segment of a source URL.
    ///
    /// A `kind+` transport prefix is dropped when the '+' comes before
    /// `://`. Query parameters and a trailing `.git` are ignored.
    fn name_from_url(url: &str) -> Option<String> {
        let scheme_end = url.find("://")?;
        let url = match url.find('+') {
            Some(plus) if plus < scheme_end => &url[plus + 1..],
            _ => url,
        };

        if let Some(path) = url.strip_prefix("file://") {
            let path = path.split('?').next().unwrap_or(path);
            return std::path::Path::new(path)
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string);
        }

        let after_scheme = &url[url.find("://")? + 3..];
        let path = match after_scheme.find('/') {
            Some(slash) => &after_scheme[slash..],
            None => return None,
        };
        let path = path.split('?').next().unwrap_or(path);
        let path = path.trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);

        match path.rsplit('/').next() {
            Some(segment) if !segment.is_empty() => Some(segment.to_string()),
            _ => None,
        }
    }
}
