//! # sputnik-core
//!
//! Clause-simplification and variable-elimination engine for CNF
//! formulas. The preprocessor shrinks a satisfiability problem before a
//! solver sees it, preserving satisfiability throughout:
//!
//! - **Unit propagation**: folds forced assignments into the model and
//!   detects trivial unsatisfiability
//! - **Subsumption**: drops clauses implied by stronger ones and
//!   strengthens clauses by self-subsuming resolution
//! - **Bounded variable elimination**: replaces all clauses mentioning a
//!   low-occurrence variable with their pairwise resolvents
//!
//! The entry point is [`Preprocessor::run`], which mutates a [`Problem`]
//! in place and leaves its [`Status`] authoritative.

pub mod clause;
pub mod error;
pub mod lit;
pub mod preprocessor;
pub mod problem;
pub mod propagate;

mod eliminate;
mod subsume;

pub use clause::Clause;
pub use error::{Error, Result};
pub use lit::{Lit, Var};
pub use preprocessor::{PreprocessConfig, PreprocessStats, Preprocessor};
pub use problem::{Problem, Status};
