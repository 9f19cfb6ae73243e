//! Semver facade providing high-level version operations

use crate::{Constraints, ParseError, VersionParser};

/// Main facade for checking versions against constraint expressions
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a constraint expression.
    ///
    /// Returns false when either side fails to parse.
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let parser = VersionParser::new();

        let parsed_constraints = match parser.parse_constraints(constraints) {
            Ok(c) => c,
            Err(err) => {
                log::debug!("Cannot check {:?}: {}", version, err);
                return false;
            }
        };

        parsed_constraints.matches_str(version)
    }

    /// Return all versions that satisfy the given constraints, in input order
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let parsed_constraints = match VersionParser::new().parse_constraints(constraints) {
            Ok(c) => c,
            Err(err) => {
                log::debug!("Cannot filter versions: {}", err);
                return Vec::new();
            }
        };

        versions
            .iter()
            .filter(|v| parsed_constraints.matches_str(v))
            .map(|v| v.to_string())
            .collect()
    }

    /// Parse constraints and return a reusable representation.
    pub fn parse_constraints(constraints: &str) -> Result<Constraints, ParseError> {
        VersionParser::new().parse_constraints(constraints)
    }

    /// Check a version against pre-parsed constraints.
    pub fn satisfies_parsed(version: &str, constraints: &Constraints) -> bool {
        constraints.matches_str(version)
    }
}
