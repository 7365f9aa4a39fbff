/// Classification of a dependency edge as reported by the native tool
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    /// Regular runtime dependency (reported as an absent/null kind by cargo)
    Normal,
    Development,
    Build,
    /// Any other tag the tool may report; treated as non-normal
    Other(String),
}

impl DependencyKind {
    /// Maps a tool-reported kind; `None` means normal.
    pub fn from_tool_kind(kind: Option<&str>) -> Self {
        match kind {
            None => DependencyKind::Normal,
            Some("normal") => DependencyKind::Normal,
            Some("dev") => DependencyKind::Development,
            Some("build") => DependencyKind::Build,
            Some(other) => DependencyKind::Other(other.to_string()),
        }
    }
}

/// One classification tag of an edge, optionally limited to a target platform
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KindTag {
    pub kind: DependencyKind,
    pub target: Option<String>,
}

impl KindTag {
    pub fn new(kind: DependencyKind, target: Option<String>) -> Self {
        Self { kind, target }
    }

    pub fn normal() -> Self {
        Self::new(DependencyKind::Normal, None)
    }
}

/// Resolved edge from one tool node to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Tool-assigned id of the child node
    pub target: String,
    /// Name the dependency is declared under (after renames)
    pub declared_name: String,
    pub kinds: Vec<KindTag>,
    pub optional: bool,
}

impl DependencyEdge {
    pub fn new(target: impl Into<String>, declared_name: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            declared_name: declared_name.into(),
            kinds: Vec::new(),
            optional: false,
        }
    }

    pub fn with_kinds(mut self, kinds: Vec<KindTag>) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// An edge counts as normal unless every tag it carries is non-normal.
    ///
    /// Untagged edges are normal; `[dev, normal]` is normal.
    pub fn is_normal(&self) -> bool {
        self.kinds.is_empty()
            || self
                .kinds
                .iter()
                .any(|tag| tag.kind == DependencyKind::Normal)
    }
}

/// A package node of the tool's resolved graph, before assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    pub id: String,
    pub name: String,
    pub edges: Vec<DependencyEdge>,
}

impl DependencyNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            edges: Vec::new(),
        }
    }

    pub fn with_edges(mut self, edges: Vec<DependencyEdge>) -> Self {
        self.edges = edges;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_with(kinds: Vec<DependencyKind>) -> DependencyEdge {
        DependencyEdge::new("id", "name")
            .with_kinds(kinds.into_iter().map(|k| KindTag::new(k, None)).collect())
    }

    #[test]
    fn test_from_tool_kind() {
        assert_eq!(DependencyKind::from_tool_kind(None), DependencyKind::Normal);
        assert_eq!(
            DependencyKind::from_tool_kind(Some("dev")),
            DependencyKind::Development
        );
        assert_eq!(
            DependencyKind::from_tool_kind(Some("build")),
            DependencyKind::Build
        );
        assert_eq!(
            DependencyKind::from_tool_kind(Some("proc")),
            DependencyKind::Other("proc".to_string())
        );
    }

    #[test]
    fn test_is_normal() {
        assert!(edge_with(vec![]).is_normal());
        assert!(edge_with(vec![DependencyKind::Normal]).is_normal());
        assert!(edge_with(vec![DependencyKind::Development, DependencyKind::Normal]).is_normal());
        assert!(!edge_with(vec![DependencyKind::Development]).is_normal());
        assert!(!edge_with(vec![DependencyKind::Build, DependencyKind::Development]).is_normal());
        assert!(!edge_with(vec![DependencyKind::Other("x".to_string())]).is_normal());
    }

    #[test]
    fn test_target_specific_normal_is_normal() {
        let edge = DependencyEdge::new("winapi 0.3.9", "winapi").with_kinds(vec![KindTag::new(
            DependencyKind::Normal,
            Some("cfg(windows)".to_string()),
        )]);
        assert!(edge.is_normal());
    }
}
