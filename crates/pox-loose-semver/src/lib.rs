//! Loose PHP-style version parsing and constraint matching
//!
//! Versions are written like `v1.2.3.4-rc2`, `1.2.*` or `dev-master`.
//! Constraint expressions are flat lists of clauses such as
//! `>=1.0,<2.0|dev-master`, evaluated strictly left to right.

pub mod constraint;
mod comparator;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use constraint::{Constraint, Constraints, InvalidOperatorError, Operator};
pub use semver::Semver;
pub use version::{NumericVersion, Segment, Suffix, Version, VersionKind};
pub use version_parser::{ParseError, VersionParser};

/// Parse a version string
pub fn parse_version(input: &str) -> Result<Version, ParseError> {
    VersionParser::new().parse_version(input)
}

/// Parse a constraint expression
pub fn parse_constraints(input: &str) -> Result<Constraints, ParseError> {
    VersionParser::new().parse_constraints(input)
}
