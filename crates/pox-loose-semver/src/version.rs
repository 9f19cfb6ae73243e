//! Parsed version data model

use std::fmt;
use std::str::FromStr;

use crate::version_parser::{ParseError, VersionParser};

/// One numeric position of a version (major, minor, bugfix or sub)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Not spelled out in the source
    Absent,
    /// Written as `*` or `x`, matches anything during equality checks
    Wildcard,
    /// A concrete number
    Value(u64),
}

impl Segment {
    /// Numeric value used for ordering; absent segments count as zero.
    /// Returns `None` for a wildcard.
    pub fn value(self) -> Option<u64> {
        match self {
            Segment::Absent => Some(0),
            Segment::Wildcard => None,
            Segment::Value(n) => Some(n),
        }
    }

    pub fn is_wildcard(self) -> bool {
        self == Segment::Wildcard
    }

    pub fn is_present(self) -> bool {
        self != Segment::Absent
    }
}

/// Pre-release keyword family, ordered from least to most released
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suffix {
    Alpha,
    Beta,
    Patch,
    Rc,
    Stable,
}

impl Suffix {
    /// Map a suffix keyword (case-insensitive) to its family
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "a" | "alpha" => Some(Suffix::Alpha),
            "b" | "beta" => Some(Suffix::Beta),
            "p" | "pl" | "patch" => Some(Suffix::Patch),
            "rc" => Some(Suffix::Rc),
            "" | "stable" => Some(Suffix::Stable),
            _ => None,
        }
    }

    /// Maturity rank, 1 (alpha) to 5 (stable)
    pub fn rank(self) -> u8 {
        match self {
            Suffix::Alpha => 1,
            Suffix::Beta => 2,
            Suffix::Patch => 3,
            Suffix::Rc => 4,
            Suffix::Stable => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Suffix::Alpha => "alpha",
            Suffix::Beta => "beta",
            Suffix::Patch => "patch",
            Suffix::Rc => "rc",
            Suffix::Stable => "stable",
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields of a numeric version such as `v1.2.3-rc2`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericVersion {
    pub(crate) major: Segment,
    pub(crate) minor: Segment,
    pub(crate) bugfix: Segment,
    pub(crate) sub: Segment,
    pub(crate) suffix: Suffix,
    pub(crate) suffix_increment: u64,
    pub(crate) dev: bool,
}

impl NumericVersion {
    pub(crate) fn segments(&self) -> [Segment; 4] {
        [self.major, self.minor, self.bugfix, self.sub]
    }

    /// Number of segments spelled out in the source (1 to 4)
    pub fn segment_count(&self) -> usize {
        self.segments().iter().filter(|s| s.is_present()).count()
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments().iter().any(|s| s.is_wildcard())
    }
}

/// The two shapes a version can take
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionKind {
    Numeric(NumericVersion),
    /// A `dev-<branch>` version; holds the normalized branch name
    Rolling(String),
}

/// A parsed version that remembers exactly how it was written
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    source: String,
    kind: VersionKind,
}

impl Version {
    pub(crate) fn new(source: String, kind: VersionKind) -> Self {
        Version { source, kind }
    }

    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        VersionParser::new().parse_version(input)
    }

    /// The original input, unmodified
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> &VersionKind {
        &self.kind
    }

    pub fn numeric(&self) -> Option<&NumericVersion> {
        match &self.kind {
            VersionKind::Numeric(n) => Some(n),
            VersionKind::Rolling(_) => None,
        }
    }

    pub fn is_rolling(&self) -> bool {
        matches!(self.kind, VersionKind::Rolling(_))
    }

    /// Branch name of a rolling version
    pub fn branch(&self) -> Option<&str> {
        match &self.kind {
            VersionKind::Rolling(b) => Some(b),
            VersionKind::Numeric(_) => None,
        }
    }

    pub fn major(&self) -> Option<Segment> {
        self.numeric().map(|n| n.major)
    }

    pub fn minor(&self) -> Option<Segment> {
        self.numeric().map(|n| n.minor)
    }

    pub fn bugfix(&self) -> Option<Segment> {
        self.numeric().map(|n| n.bugfix)
    }

    pub fn sub(&self) -> Option<Segment> {
        self.numeric().map(|n| n.sub)
    }

    /// Segments spelled out in the source, zero for rolling versions
    pub fn segment_count(&self) -> usize {
        self.numeric().map_or(0, NumericVersion::segment_count)
    }

    pub fn suffix(&self) -> Option<Suffix> {
        self.numeric().map(|n| n.suffix)
    }

    pub fn suffix_increment(&self) -> Option<u64> {
        self.numeric().map(|n| n.suffix_increment)
    }

    pub fn is_dev(&self) -> bool {
        self.numeric().is_some_and(|n| n.dev)
    }

    pub fn has_wildcard(&self) -> bool {
        self.numeric().is_some_and(NumericVersion::has_wildcard)
    }

    /// Key used for literal equality: the source without whitespace, lower-cased
    pub(crate) fn literal(&self) -> String {
        self.source
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_ranks() {
        assert_eq!(Suffix::from_keyword("a"), Some(Suffix::Alpha));
        assert_eq!(Suffix::from_keyword("ALPHA"), Some(Suffix::Alpha));
        assert_eq!(Suffix::from_keyword("b").map(Suffix::rank), Some(2));
        assert_eq!(Suffix::from_keyword("pl").map(Suffix::rank), Some(3));
        assert_eq!(Suffix::from_keyword("RC").map(Suffix::rank), Some(4));
        assert_eq!(Suffix::from_keyword("").map(Suffix::rank), Some(5));
        assert_eq!(Suffix::from_keyword("foo"), None);
        assert!(Suffix::Alpha < Suffix::Beta && Suffix::Rc < Suffix::Stable);
    }

    #[test]
    fn test_segment_value() {
        assert_eq!(Segment::Absent.value(), Some(0));
        assert_eq!(Segment::Value(7).value(), Some(7));
        assert_eq!(Segment::Wildcard.value(), None);
    }

    #[test]
    fn test_display_is_source() {
        let v: Version = " v1.2.3_RC2".parse().unwrap();
        assert_eq!(v.to_string(), " v1.2.3_RC2");
        assert_eq!(v.as_str(), " v1.2.3_RC2");
        assert_eq!(v.literal(), "v1.2.3_rc2");
    }

    #[test]
    fn test_rolling_accessors() {
        let v = Version::parse("dev-Feature").unwrap();
        assert!(v.is_rolling());
        assert_eq!(v.branch(), Some("feature"));
        assert_eq!(v.major(), None);
        assert_eq!(v.segment_count(), 0);
        assert!(!v.is_dev());
    }
}
