//! Ordered clause sequences and their evaluation

use std::fmt;
use std::str::FromStr;

use super::Constraint;
use crate::version::Version;
use crate::version_parser::{ParseError, VersionParser};

/// A parsed constraint expression: clauses in the order they were written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    constraints: Vec<Constraint>,
}

impl Constraints {
    /// Create a constraint sequence from already built clauses
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Constraints { constraints }
    }

    /// Parse a constraint expression
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        VersionParser::new().parse_constraints(input)
    }

    /// Get the clauses
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Check a version against the clauses.
    ///
    /// Clauses are folded strictly left to right starting from `true`; there
    /// is no AND-before-OR precedence, so `A,B|C` means `(A && B) || C` and
    /// `A|B,C` means `(A || B) && C`.
    pub fn matches(&self, version: &Version) -> bool {
        self.constraints.iter().fold(true, |acc, constraint| {
            let result = constraint.matches(version);
            if constraint.is_disjunctive() {
                acc || result
            } else {
                acc && result
            }
        })
    }

    /// Parse the version and check it against the clauses.
    ///
    /// An unparseable version never matches.
    pub fn matches_str(&self, version: &str) -> bool {
        match VersionParser::new().parse_version(version) {
            Ok(v) => self.matches(&v),
            Err(err) => {
                log::debug!("Treating {:?} as not matching: {}", version, err);
                false
            }
        }
    }
}

impl<'a> IntoIterator for &'a Constraints {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

impl FromStr for Constraints {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraints::parse(s)
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, constraint) in self.constraints.iter().enumerate() {
            if i > 0 {
                f.write_str(if constraint.is_disjunctive() { "|" } else { "," })?;
            }
            write!(f, "{}", constraint)?;
        }
        Ok(())
    }
}
