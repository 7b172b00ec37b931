//! Preprocessing entry point, configuration, and statistics.

use crate::problem::{Problem, Status};
use crate::{eliminate, subsume};

/// Configuration for the preprocessor.
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// A variable qualifies for elimination only if one of its
    /// polarities occurs in fewer clauses than this bound.
    pub occurrence_bound: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            occurrence_bound: 10,
        }
    }
}

/// Counters reported after a preprocessing run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreprocessStats {
    /// Forced literals folded into the model.
    pub units_folded: u64,
    /// Variables removed by resolution.
    pub variables_eliminated: u64,
    /// Resolvents appended to the live clause set.
    pub resolvents_added: u64,
    /// Tautological clauses discarded.
    pub tautologies_discarded: u64,
    /// Clauses dropped because another clause subsumes them.
    pub clauses_subsumed: u64,
    /// Clauses strengthened by self-subsuming resolution.
    pub clauses_strengthened: u64,
}

/// The preprocessing engine.
///
/// [`Preprocessor::run`] normalizes a [`Problem`] through unit
/// propagation, reduces it by subsumption and self-subsuming
/// resolution, then eliminates low-occurrence variables to a fixpoint,
/// mutating the problem in place and leaving its status authoritative.
///
/// The model covers only variables forced by units; assignments for
/// eliminated variables are not reconstructed after a satisfiable
/// verdict.
#[derive(Debug, Default)]
pub struct Preprocessor {
    config: PreprocessConfig,
}

impl Preprocessor {
    /// Creates a preprocessor with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PreprocessConfig::default(),
        }
    }

    /// Creates a preprocessor with a custom configuration.
    #[must_use]
    pub fn with_config(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Preprocesses `pb` to a fixpoint and returns run statistics.
    ///
    /// A problem whose status is already terminal is left untouched.
    pub fn run(&self, pb: &mut Problem) -> PreprocessStats {
        let mut stats = PreprocessStats::default();
        if pb.status != Status::Undetermined {
            return stats;
        }
        crate::propagate::propagate(pb);
        if pb.status == Status::Undetermined {
            subsume::reduce(pb, &mut stats);
        }
        if pb.status == Status::Undetermined {
            eliminate::eliminate(pb, &self.config, &mut stats);
        }
        stats.units_folded = pb.units.len() as u64;
        tracing::debug!(
            status = %pb.status,
            units = pb.units.len(),
            live = pb.clauses.len(),
            "preprocessing finished"
        );
        stats
    }
}
