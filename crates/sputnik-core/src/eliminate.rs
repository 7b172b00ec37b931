//! Bounded variable elimination.
//!
//! Replaces all clauses mentioning a low-occurrence variable with their
//! pairwise resolvents, removing the variable from the formula. The
//! occurrence index stores positional indices into the live clause set
//! and is rebuilt from scratch after every structural change; it is
//! never patched incrementally, so stale entries cannot be read.

use crate::clause::Clause;
use crate::lit::{Lit, Var};
use crate::preprocessor::{PreprocessConfig, PreprocessStats};
use crate::problem::{Problem, Status};
use crate::propagate::propagate;

/// Per-literal occurrence lists over the live clause set.
struct OccurrenceIndex {
    lists: Vec<Vec<usize>>,
}

impl OccurrenceIndex {
    fn build(pb: &Problem) -> Self {
        let mut lists = vec![Vec::new(); pb.nb_vars * 2];
        for (i, clause) in pb.clauses.iter().enumerate() {
            for &lit in clause.lits() {
                lists[lit.index()].push(i);
            }
        }
        Self { lists }
    }

    fn of(&self, lit: Lit) -> &[usize] {
        &self.lists[lit.index()]
    }
}

/// Runs bounded variable elimination to a fixpoint.
///
/// The outer loop repeats until a full pass over all variables
/// eliminates nothing. An unbound variable is a candidate when both
/// polarities occur and at least one occurs in fewer clauses than the
/// configured bound: resolving trades `n_pos + n_neg` clauses for up to
/// `n_pos * n_neg` resolvents, so the bound caps the blow-up.
pub(crate) fn eliminate(pb: &mut Problem, config: &PreprocessConfig, stats: &mut PreprocessStats) {
    let mut index = OccurrenceIndex::build(pb);
    let mut modified = true;
    while modified && pb.status == Status::Undetermined {
        modified = false;
        for v in 0..pb.nb_vars {
            if pb.model[v].is_some() {
                continue;
            }
            let var = Var::new(v as u32);
            let pos = index.of(var.lit());
            let neg = index.of(var.lit().negation());
            if pos.is_empty() || neg.is_empty() {
                // Nothing to resolve; a one-sided or absent variable is
                // left alone so the live set stays logically equivalent.
                continue;
            }
            if pos.len() >= config.occurrence_bound && neg.len() >= config.occurrence_bound {
                continue;
            }
            eliminate_var(pb, var, pos, neg, stats);
            if pb.status != Status::Undetermined {
                return;
            }
            stats.variables_eliminated += 1;
            tracing::debug!(var = v + 1, live = pb.clauses.len(), "eliminated variable");
            index = OccurrenceIndex::build(pb);
            modified = true;
        }
    }
}

/// Eliminates `var` by resolution: classifies every pairwise resolvent
/// (tautology, contradiction, unit, or new clause), then swap-removes
/// every original clause mentioning `var` and appends the surviving
/// resolvents. New units are folded through unit propagation.
fn eliminate_var(
    pb: &mut Problem,
    var: Var,
    pos: &[usize],
    neg: &[usize],
    stats: &mut PreprocessStats,
) {
    let mut resolvents: Vec<Clause> = Vec::new();
    let mut folded_units = false;
    for &i in pos {
        for &j in neg {
            let mut resolvent = pb.clauses[i].resolve(&pb.clauses[j], var);
            if resolvent.simplify() {
                stats.tautologies_discarded += 1;
                continue;
            }
            match resolvent.len() {
                0 => {
                    pb.status = Status::Unsatisfiable;
                    return;
                }
                1 => {
                    let unit = resolvent.first();
                    if !pb.fold_unit(unit) {
                        pb.status = Status::Unsatisfiable;
                        return;
                    }
                    tracing::trace!(unit = %unit, "resolvent forced a literal");
                    folded_units = true;
                }
                _ => resolvents.push(resolvent),
            }
        }
    }

    let mut live = pb.clauses.len();
    let mut i = 0;
    while i < live {
        if pb.clauses[i].mentions(var) {
            pb.clauses.swap(i, live - 1);
            live -= 1;
        } else {
            i += 1;
        }
    }
    pb.clauses.truncate(live);

    stats.resolvents_added += resolvents.len() as u64;
    pb.clauses.append(&mut resolvents);

    if folded_units {
        propagate(pb);
    } else if pb.clauses.is_empty() {
        pb.status = Status::Satisfied;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(lits: &[i32]) -> Clause {
        Clause::new(lits.iter().map(|&i| Lit::from_dimacs(i)).collect())
    }

    fn run(clauses: Vec<Clause>, nb_vars: usize) -> (Problem, PreprocessStats) {
        let mut pb = Problem::new(nb_vars, clauses);
        let mut stats = PreprocessStats::default();
        eliminate(&mut pb, &PreprocessConfig::default(), &mut stats);
        (pb, stats)
    }

    #[test]
    fn test_one_sided_variable_is_not_eliminated() {
        let (pb, stats) = run(vec![clause(&[1, 2])], 2);
        assert_eq!(pb.status, Status::Undetermined);
        assert_eq!(pb.clauses.len(), 1);
        assert_eq!(stats.variables_eliminated, 0);
    }

    #[test]
    fn test_eliminate_replaces_clauses_with_resolvent() {
        // Eliminating 1 from {1,2} and {-1,3} leaves only {2,3}; 2 and 3
        // then occur one-sided and survive.
        let (pb, stats) = run(vec![clause(&[1, 2]), clause(&[-1, 3])], 3);
        assert_eq!(pb.status, Status::Undetermined);
        assert_eq!(pb.clauses.len(), 1);
        assert_eq!(pb.clauses[0].to_string(), "2 3 0");
        assert_eq!(stats.variables_eliminated, 1);
        assert_eq!(stats.resolvents_added, 1);
    }

    #[test]
    fn test_tautological_resolvents_satisfy() {
        // All resolvents of 1 are tautologies, so its clauses vanish.
        let (pb, stats) = run(vec![clause(&[1, 2]), clause(&[-1, -2])], 2);
        assert_eq!(pb.status, Status::Satisfied);
        assert_eq!(stats.tautologies_discarded, 1);
    }

    #[test]
    fn test_unit_resolvent_is_folded() {
        // Resolving 1 out of {1,2} and {-1,2} forces 2.
        let (pb, _) = run(vec![clause(&[1, 2]), clause(&[-1, 2])], 2);
        assert_eq!(pb.status, Status::Satisfied);
        assert_eq!(pb.model[1], Some(true));
        assert_eq!(pb.units, vec![Lit::from_dimacs(2)]);
    }

    #[test]
    fn test_conflicting_unit_resolvents_refute() {
        // Resolving 1 forces 2; resolving 3 forces -2.
        let (pb, _) = run(
            vec![
                clause(&[1, 2]),
                clause(&[-1, 2]),
                clause(&[3, -2]),
                clause(&[-3, -2]),
            ],
            3,
        );
        assert_eq!(pb.status, Status::Unsatisfiable);
    }
}
