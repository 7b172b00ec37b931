//! Unified error types for Sputnik.
//!
//! These cover the "cannot build a problem" failure category: I/O and
//! format violations raised while reading a formula. Logical outcomes
//! (unsatisfiable, satisfiable, undetermined) are statuses on the
//! [`Problem`](crate::Problem), never errors.

use thiserror::Error;

/// The main error type for Sputnik operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure while reading the formula.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No `p cnf <vars> <clauses>` header before clause data.
    #[error("DIMACS header 'p cnf <vars> <clauses>' not found")]
    MissingHeader,

    /// Malformed header line.
    #[error("invalid DIMACS header {0:?}")]
    InvalidHeader(String),

    /// A token that should be a signed integer is not.
    #[error("invalid literal {0:?}")]
    InvalidLiteral(String),

    /// A literal references a variable outside the declared range.
    #[error("invalid literal {literal} for problem with {nb_vars} vars only")]
    LiteralOutOfRange { literal: i32, nb_vars: usize },

    /// End of input reached inside a clause with no terminating zero.
    #[error("unfinished clause at end of input")]
    UnterminatedClause,
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
