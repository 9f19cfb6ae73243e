//! Operator types for version constraints

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::comparator::Comparator;
use crate::version::Version;

/// Relations a constraint clause can require between its operand and a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=), the default when no operator is written
    Equal,
    /// Greater than or equal (>= or =>)
    GreaterThanOrEqual,
    /// Less than or equal (<= or =<)
    LessThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Greater than (>)
    GreaterThan,
    /// Same major, same or higher (^)
    Caret,
    /// Only the last written segment may grow (~)
    Tilde,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator: {0}")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::Caret => "^",
            Operator::Tilde => "~",
        }
    }

    /// Get all supported operators, aliases included
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", ">=", "=>", "<=", "=<", "<", ">", "^", "~"]
    }

    /// Check whether `candidate` stands in this relation to `operand`
    pub fn compare(&self, operand: &Version, candidate: &Version) -> bool {
        match self {
            Operator::Equal => Comparator::equal(operand, candidate),
            Operator::GreaterThanOrEqual => Comparator::same_or_higher(operand, candidate),
            Operator::LessThanOrEqual => Comparator::same_or_lower(operand, candidate),
            Operator::LessThan => Comparator::lower(operand, candidate),
            Operator::GreaterThan => Comparator::higher(operand, candidate),
            Operator::Caret => Comparator::caret(operand, candidate),
            Operator::Tilde => Comparator::tilde(operand, candidate),
        }
    }
}

impl FromStr for Operator {
    type Err = InvalidOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Operator::Equal),
            ">=" | "=>" => Ok(Operator::GreaterThanOrEqual),
            "<=" | "=<" => Ok(Operator::LessThanOrEqual),
            "<" => Ok(Operator::LessThan),
            ">" => Ok(Operator::GreaterThan),
            "^" => Ok(Operator::Caret),
            "~" => Ok(Operator::Tilde),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("=>".parse::<Operator>(), Ok(Operator::GreaterThanOrEqual));
        assert_eq!("=<".parse::<Operator>(), Ok(Operator::LessThanOrEqual));
        assert_eq!("^".parse::<Operator>(), Ok(Operator::Caret));
        assert_eq!("==".parse::<Operator>(), Err(InvalidOperatorError("==".to_string())));
        assert!("<>".parse::<Operator>().is_err());
    }

    #[test]
    fn test_supported_operators_parse() {
        for op in Operator::supported_operators() {
            let parsed: Operator = op.parse().unwrap();
            assert_eq!(parsed.as_str().parse::<Operator>().unwrap(), parsed);
        }
    }
}
