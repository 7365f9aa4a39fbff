use super::Ecosystem;
use std::collections::BTreeMap;
use std::fmt;

/// Canonical identifier of a package: the key of every SBOM node.
///
/// Two coordinates are equal iff ecosystem, namespace, name, version and
/// qualifiers all match. The string form is a package URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageCoordinate {
    ecosystem: Ecosystem,
    namespace: Option<String>,
    name: String,
    version: String,
    qualifiers: BTreeMap<String, String>,
}

impl PackageCoordinate {
    pub fn new(ecosystem: Ecosystem, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            ecosystem,
            namespace: None,
            name: name.into(),
            version: version.into(),
            qualifiers: BTreeMap::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.namespace = (!namespace.is_empty()).then_some(namespace);
        self
    }

    pub fn with_qualifier(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.qualifiers.insert(key.into(), value.into());
        self
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn qualifiers(&self) -> &BTreeMap<String, String> {
        &self.qualifiers
    }

    /// Renders the coordinate as a package URL.
    ///
    /// Namespace segments, name, version and qualifier values are
    /// percent-encoded; qualifiers are emitted sorted by key.
    pub fn purl(&self) -> String {
        let mut purl = format!("pkg:{}/", self.ecosystem.purl_type());

        if let Some(namespace) = &self.namespace {
            let segments: Vec<String> = namespace
                .split('/')
                .filter(|s| !s.is_empty())
                .map(|s| urlencoding::encode(s).into_owned())
                .collect();
            if !segments.is_empty() {
                purl.push_str(&segments.join("/"));
                purl.push('/');
            }
        }

        purl.push_str(&urlencoding::encode(&self.name));
        purl.push('@');
        purl.push_str(&urlencoding::encode(&self.version));

        if !self.qualifiers.is_empty() {
            let qualifiers: Vec<String> = self
                .qualifiers
                .iter()
                .map(|(k, v)| format!("{}={}", k.to_lowercase(), urlencoding::encode(v)))
                .collect();
            purl.push('?');
            purl.push_str(&qualifiers.join("&"));
        }

        purl
    }
}

impl fmt::Display for PackageCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.purl())
    }
}
