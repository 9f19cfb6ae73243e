//! Version and constraint parsing

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::constraint::{Constraint, Constraints, InvalidOperatorError, Operator};
use crate::version::{NumericVersion, Segment, Suffix, Version, VersionKind};

/// Error type for version and constraint parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed version \"{0}\"")]
    MalformedVersion(String),
    #[error("Cannot find constraints in \"{0}\"")]
    NoConstraintsFound(String),
    #[error("Unknown operator \"{0}\"")]
    UnknownOperator(String),
}

impl From<InvalidOperatorError> for ParseError {
    fn from(err: InvalidOperatorError) -> Self {
        ParseError::UnknownOperator(err.0)
    }
}

lazy_static! {
    // Suffix keywords, longest alternatives first so "pl" wins over "p"
    static ref MODIFIER_REGEX: &'static str = r"[._-]?(?:(stable|beta|b|rc|alpha|a|patch|pl|p)([.-]*\d+)?)?([.-]?dev)?";

    // Numeric versions; a segment is either digits or a run of wildcard characters
    static ref NUMERIC_VERSION_RE: Regex = Regex::new(&format!(
        r"(?i)^v?(\d{{1,5}}|[x*]+)(?:\.(\d+|[x*]+))?(?:\.(\d+|[x*]+))?(?:\.(\d+|[x*]+))?{}$",
        *MODIFIER_REGEX
    )).unwrap();

    // Rolling versions (dev-<branch>)
    static ref ROLLING_RE: Regex = Regex::new(r"(?i)^dev-").unwrap();

    // One constraint clause: connector, negation, operator, operand
    static ref CLAUSE_RE: Regex = Regex::new(
        r"(?P<or>[,|]+)(?P<not>!)?(?P<op>[\^~<>=]+)?(?P<ver>[._\-0-9*a-z]+)"
    ).unwrap();
}

/// Remove every whitespace character
fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Digits are validated by the grammar; values too large for u64 saturate.
fn digits_to_u64(digits: &str) -> u64 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

fn segment(caps: &Captures, index: usize) -> Segment {
    match caps.get(index).map(|m| m.as_str()) {
        None => Segment::Absent,
        Some(s) if s.starts_with(['x', 'X', '*']) => Segment::Wildcard,
        Some(s) => Segment::Value(digits_to_u64(s)),
    }
}

/// Parser for loose PHP-style versions and constraint expressions
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse_version(version).is_ok()
    }

    /// Parse a version string into a numeric or rolling version
    pub fn parse_version(&self, input: &str) -> Result<Version, ParseError> {
        if ROLLING_RE.is_match(input) {
            let branch = strip_whitespace(&input[4..]).to_lowercase();
            if branch.is_empty() {
                log::debug!("Rejected version {:?}: empty branch name", input);
                return Err(ParseError::MalformedVersion(input.to_string()));
            }
            log::trace!("Parsed rolling version {:?} (branch {})", input, branch);
            return Ok(Version::new(input.to_string(), VersionKind::Rolling(branch)));
        }

        let stripped = strip_whitespace(input);
        let Some(caps) = NUMERIC_VERSION_RE.captures(&stripped) else {
            log::debug!("Rejected version {:?}: does not match the version grammar", input);
            return Err(ParseError::MalformedVersion(input.to_string()));
        };

        let suffix = match caps.get(5) {
            Some(keyword) => Suffix::from_keyword(keyword.as_str()).ok_or_else(|| {
                log::debug!("Rejected version {:?}: unknown suffix {:?}", input, keyword.as_str());
                ParseError::MalformedVersion(input.to_string())
            })?,
            None => Suffix::Stable,
        };

        let numeric = NumericVersion {
            major: segment(&caps, 1),
            minor: segment(&caps, 2),
            bugfix: segment(&caps, 3),
            sub: segment(&caps, 4),
            suffix,
            suffix_increment: caps.get(6).map_or(0, |m| digits_to_u64(m.as_str())),
            dev: caps.get(7).is_some(),
        };

        log::trace!("Parsed version {:?} as {:?}", input, numeric);
        Ok(Version::new(input.to_string(), VersionKind::Numeric(numeric)))
    }

    /// Parse a constraint expression such as `^1.2,!=1.2.5|dev-master`
    pub fn parse_constraints(&self, input: &str) -> Result<Constraints, ParseError> {
        let normalized = format!(",{}", strip_whitespace(input).to_lowercase());

        let mut clauses = Vec::new();
        let mut last_end = 0;

        for caps in CLAUSE_RE.captures_iter(&normalized) {
            let (Some(whole), Some(connector), Some(operand)) =
                (caps.get(0), caps.name("or"), caps.name("ver"))
            else {
                continue;
            };

            if whole.start() > last_end {
                log::debug!(
                    "Skipping {:?} in constraint {:?}",
                    &normalized[last_end..whole.start()],
                    input
                );
            }
            last_end = whole.end();

            let operator = match caps.name("op") {
                Some(op) => op.as_str().parse::<Operator>()?,
                None => Operator::Equal,
            };
            let version = self.parse_version(operand.as_str())?;

            let constraint = Constraint::new(
                operator,
                version,
                caps.name("not").is_some(),
                connector.as_str().contains('|'),
            );
            log::trace!("Parsed constraint clause {:?}", constraint);
            clauses.push(constraint);
        }

        if last_end < normalized.len() && !clauses.is_empty() {
            log::debug!("Skipping {:?} in constraint {:?}", &normalized[last_end..], input);
        }

        if clauses.is_empty() {
            log::debug!("No constraint clauses found in {:?}", input);
            return Err(ParseError::NoConstraintsFound(input.to_string()));
        }

        Ok(Constraints::new(clauses))
    }
}
