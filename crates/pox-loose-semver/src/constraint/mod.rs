//! Constraint types for version matching

#[allow(clippy::module_inception)]
mod constraint;
mod constraints;
mod operator;

pub use constraint::Constraint;
pub use constraints::Constraints;
pub use operator::{InvalidOperatorError, Operator};
