//! Single constraint clause

use std::fmt;

use super::Operator;
use crate::version::Version;

/// One clause of a constraint expression, e.g. `|!^1.2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    operator: Operator,
    version: Version,
    negated: bool,
    disjunctive: bool,
}

impl Constraint {
    /// Create a new constraint clause
    pub fn new(operator: Operator, version: Version, negated: bool, disjunctive: bool) -> Self {
        Constraint {
            operator,
            version,
            negated,
            disjunctive,
        }
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the operand
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Whether the clause result is inverted (`!`)
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether the clause joins the running result with OR (`|`) rather than AND
    pub fn is_disjunctive(&self) -> bool {
        self.disjunctive
    }

    /// Evaluate this clause alone against a candidate, negation applied
    pub fn matches(&self, candidate: &Version) -> bool {
        self.operator.compare(&self.version, candidate) != self.negated
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("!")?;
        }
        write!(f, "{}{}", self.operator, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_matches_applies_negation() {
        let c = Constraint::new(Operator::Equal, v("dev-develop"), false, false);
        assert!(!c.matches(&v("dev-master")));

        let c = Constraint::new(Operator::Equal, v("dev-develop"), true, false);
        assert!(c.matches(&v("dev-master")));
        assert!(!c.matches(&v("dev-develop")));
    }

    #[test]
    fn test_display() {
        let c = Constraint::new(Operator::GreaterThanOrEqual, v("1.0"), false, true);
        assert_eq!(c.to_string(), ">=1.0");

        let c = Constraint::new(Operator::Equal, v("1.5"), true, false);
        assert_eq!(c.to_string(), "!=1.5");
    }
}
