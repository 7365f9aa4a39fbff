use std::fmt;
use std::str::FromStr;

/// How an excluded dependency propagates through the graph
///
/// The policy is global for an analysis and applies to both component and
/// stack output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExclusionPolicy {
    /// Drop the excluded node together with everything reachable from it,
    /// even when some of it is also reachable another way
    #[default]
    Insensitive,
    /// Drop only the excluded edge; keep any dependency still reachable
    /// from the root through retained edges
    Sensitive,
}

impl ExclusionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionPolicy::Insensitive => "insensitive",
            ExclusionPolicy::Sensitive => "sensitive",
        }
    }

    /// Whether an excluded node takes its whole subtree with it
    pub fn prunes_subtree(&self) -> bool {
        matches!(self, ExclusionPolicy::Insensitive)
    }
}

impl FromStr for ExclusionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insensitive" => Ok(ExclusionPolicy::Insensitive),
            "sensitive" => Ok(ExclusionPolicy::Sensitive),
            _ => Err(format!(
                "Invalid ignore method: {}. Please specify 'insensitive' or 'sensitive'",
                s
            )),
        }
    }
}

impl fmt::Display for ExclusionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
