//! Version comparison predicates
//!
//! Every predicate takes the constraint operand first and the candidate
//! version second, and answers whether the candidate stands in the given
//! relation to the operand.

use std::cmp::Ordering;

use crate::version::{NumericVersion, Segment, Version, VersionKind};

/// Comparator for checking a candidate version against a constraint operand
pub struct Comparator;

impl Comparator {
    /// Check if candidate == operand
    ///
    /// Numeric versions without wildcards compare by their literal spelling
    /// (ignoring whitespace and case), so `1.2` and `1.2.0` differ. An operand
    /// with wildcard segments compares segment by segment instead, and only up
    /// to the segments it spells out. Rolling versions compare by branch name.
    pub fn equal(operand: &Version, candidate: &Version) -> bool {
        match (operand.kind(), candidate.kind()) {
            (VersionKind::Rolling(a), VersionKind::Rolling(b)) => a == b,
            (VersionKind::Numeric(o), VersionKind::Numeric(c)) => {
                if o.has_wildcard() {
                    o.segments()
                        .into_iter()
                        .zip(c.segments())
                        .all(|(o, c)| o == Segment::Absent || segment_eq(o, c))
                } else {
                    operand.literal() == candidate.literal()
                }
            }
            _ => false,
        }
    }

    /// Check if candidate > operand
    pub fn higher(operand: &Version, candidate: &Version) -> bool {
        numeric_order(operand, candidate) == Some(Ordering::Greater)
    }

    /// Check if candidate < operand
    pub fn lower(operand: &Version, candidate: &Version) -> bool {
        numeric_order(operand, candidate) == Some(Ordering::Less)
    }

    /// Check if candidate >= operand
    pub fn same_or_higher(operand: &Version, candidate: &Version) -> bool {
        Self::equal(operand, candidate) || Self::higher(operand, candidate)
    }

    /// Check if candidate <= operand
    pub fn same_or_lower(operand: &Version, candidate: &Version) -> bool {
        Self::equal(operand, candidate) || Self::lower(operand, candidate)
    }

    /// Check if candidate shares the operand's major and is not older (`^`)
    pub fn caret(operand: &Version, candidate: &Version) -> bool {
        match (operand.numeric(), candidate.numeric()) {
            (Some(o), Some(c)) => {
                segment_eq(o.major, c.major) && Self::same_or_higher(operand, candidate)
            }
            _ => false,
        }
    }

    /// Check if candidate only moves within the operand's last segment (`~`)
    ///
    /// The major must match, every segment between major and the last one the
    /// operand spells out must match, and the last one may only grow. A
    /// single-segment operand never matches.
    pub fn tilde(operand: &Version, candidate: &Version) -> bool {
        let (Some(o), Some(c)) = (operand.numeric(), candidate.numeric()) else {
            return false;
        };

        if !segment_eq(o.major, c.major) {
            return false;
        }

        match o.segment_count() {
            2 => segment_le(o.minor, c.minor),
            3 => segment_eq(o.minor, c.minor) && segment_le(o.bugfix, c.bugfix),
            4 => {
                segment_eq(o.minor, c.minor)
                    && segment_eq(o.bugfix, c.bugfix)
                    && segment_le(o.sub, c.sub)
            }
            _ => false,
        }
    }
}

/// Operand segment equals candidate segment; an operand wildcard matches anything
fn segment_eq(operand: Segment, candidate: Segment) -> bool {
    match (operand.value(), candidate.value()) {
        (None, _) => true,
        (Some(o), Some(c)) => o == c,
        (Some(_), None) => false,
    }
}

/// Operand segment is at most the candidate segment
fn segment_le(operand: Segment, candidate: Segment) -> bool {
    match (operand.value(), candidate.value()) {
        (None, _) => true,
        (Some(o), Some(c)) => o <= c,
        (Some(_), None) => false,
    }
}

/// Order the candidate relative to the operand, most significant segment
/// first. Suffix and dev markers are not consulted. A wildcard sorts below
/// every concrete value and absent segments count as zero. Rolling versions
/// have no order.
fn numeric_order(operand: &Version, candidate: &Version) -> Option<Ordering> {
    let (o, c) = (operand.numeric()?, candidate.numeric()?);
    Some(segment_order(o, c))
}

fn segment_order(operand: &NumericVersion, candidate: &NumericVersion) -> Ordering {
    operand
        .segments()
        .into_iter()
        .zip(candidate.segments())
        .map(|(o, c)| segment_rank(c).cmp(&segment_rank(o)))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// `None` (wildcard) orders before every `Some`
fn segment_rank(segment: Segment) -> Option<u64> {
    segment.value()
}
