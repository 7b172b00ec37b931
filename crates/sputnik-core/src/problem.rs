//! The problem aggregate: clause set, status, forced units, and model.

use crate::clause::Clause;
use crate::lit::Lit;
use std::fmt;

/// Verdict reached on a problem so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Not proven satisfiable or unsatisfiable yet.
    Undetermined,
    /// Every clause is satisfied by the forced assignments.
    Satisfied,
    /// A contradiction was derived.
    Unsatisfiable,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Undetermined => "UNDETERMINED",
            Status::Satisfied => "SATISFIABLE",
            Status::Unsatisfiable => "UNSATISFIABLE",
        };
        write!(f, "{s}")
    }
}

/// A CNF problem under preprocessing.
///
/// The problem exclusively owns its clause set and model. Once
/// normalized by unit propagation, the live clause set holds only
/// non-empty, non-unit clauses; forced literals live in `units` with
/// their assignments mirrored in `model`.
#[derive(Debug, Clone)]
pub struct Problem {
    /// Number of declared variables.
    pub nb_vars: usize,
    /// The live clause set.
    pub clauses: Vec<Clause>,
    /// Current verdict. Terminal once `Satisfied` or `Unsatisfiable`.
    pub status: Status,
    /// Forced literals, in discovery order.
    pub units: Vec<Lit>,
    /// Per-variable assignment; `None` is unbound.
    pub model: Vec<Option<bool>>,
}

impl Problem {
    /// Creates a problem over `nb_vars` variables with an all-unbound
    /// model. This is the shape the parser hands over; unit clauses may
    /// still sit in the clause set.
    #[must_use]
    pub fn new(nb_vars: usize, clauses: Vec<Clause>) -> Self {
        Self {
            nb_vars,
            clauses,
            status: Status::Undetermined,
            units: Vec::new(),
            model: vec![None; nb_vars],
        }
    }

    /// Folds a forced literal into the model and unit list.
    ///
    /// Returns `false` when the literal contradicts an earlier
    /// assignment; the caller then declares the problem unsatisfiable.
    /// A literal already assigned consistently is a no-op.
    pub(crate) fn fold_unit(&mut self, lit: Lit) -> bool {
        match self.model[lit.var().index()] {
            None => {
                self.model[lit.var().index()] = Some(lit.is_positive());
                self.units.push(lit);
                true
            }
            Some(value) => value == lit.is_positive(),
        }
    }

    /// Renders the problem in DIMACS CNF: a header counting live clauses
    /// plus recorded units, one line per unit, one line per live clause.
    /// Invertible by the parser up to clause and literal reordering.
    #[must_use]
    pub fn to_cnf(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "p cnf {} {}\n",
            self.nb_vars,
            self.clauses.len() + self.units.len()
        ));
        for unit in &self.units {
            out.push_str(&format!("{unit} 0\n"));
        }
        for clause in &self.clauses {
            out.push_str(&format!("{clause}\n"));
        }
        out
    }
}
