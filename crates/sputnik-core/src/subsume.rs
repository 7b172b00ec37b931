//! Subsumption and self-subsuming resolution over the live clause set.
//!
//! A clause subsumed by another is dropped; a clause self-subsumed by
//! another is strengthened by removing the literal whose negation
//! witnessed the match. The scan restarts after every structural
//! change, so no index is ever read past a removal.

use crate::preprocessor::PreprocessStats;
use crate::problem::{Problem, Status};
use crate::propagate::propagate;

/// Reduces the live clause set to a subsumption fixpoint.
///
/// Every clause is first canonicalized through [`Clause::simplify`],
/// discarding tautologies and establishing the sortedness the pairwise
/// tests rely on. Strengthening a clause down to a unit folds it into
/// the model and re-runs unit propagation; since propagation breaks
/// clause sortedness, the whole pass then re-canonicalizes.
///
/// [`Clause::simplify`]: crate::Clause::simplify
pub(crate) fn reduce(pb: &mut Problem, stats: &mut PreprocessStats) {
    let mut dirty = true;
    while dirty && pb.status == Status::Undetermined {
        dirty = false;
        canonicalize(pb, stats);

        let mut changed = true;
        while changed && pb.status == Status::Undetermined {
            changed = false;
            'scan: for i in 0..pb.clauses.len() {
                for j in 0..pb.clauses.len() {
                    if i == j {
                        continue;
                    }
                    if pb.clauses[i].subsumes(&pb.clauses[j]) {
                        tracing::trace!(clause = %pb.clauses[j], "subsumed");
                        pb.clauses.swap_remove(j);
                        stats.clauses_subsumed += 1;
                        changed = true;
                        break 'scan;
                    }
                    if pb.clauses[i].self_subsumes(&pb.clauses[j]) {
                        stats.clauses_strengthened += 1;
                        changed = true;
                        if strengthen(pb, i, j) {
                            dirty = true;
                        }
                        break 'scan;
                    }
                }
            }
        }
    }
    if pb.clauses.is_empty() && pb.status == Status::Undetermined {
        pb.status = Status::Satisfied;
    }
}

/// Drops tautological clauses and canonicalizes the rest (sorted,
/// duplicate-free). Swap-removal, order not preserved.
fn canonicalize(pb: &mut Problem, stats: &mut PreprocessStats) {
    let mut live = pb.clauses.len();
    let mut i = 0;
    while i < live {
        if pb.clauses[i].simplify() {
            pb.clauses.swap(i, live - 1);
            live -= 1;
            stats.tautologies_discarded += 1;
        } else {
            i += 1;
        }
    }
    pb.clauses.truncate(live);
}

/// Strengthens clause `j` using clause `i`: removes from `j` the literal
/// whose negation occurs in `i`. Returns `true` when the strengthened
/// clause became a unit that was folded and propagated, leaving clause
/// internals unsorted.
fn strengthen(pb: &mut Problem, i: usize, j: usize) -> bool {
    let pos = pb.clauses[j]
        .lits()
        .iter()
        .position(|&l| pb.clauses[i].lits().contains(&l.negation()));
    // `self_subsumes` guarantees exactly one such literal.
    let Some(pos) = pos else { return false };
    pb.clauses[j].remove(pos);
    tracing::trace!(clause = %pb.clauses[j], "strengthened by self-subsumption");
    if pb.clauses[j].len() == 1 {
        let unit = pb.clauses[j].first();
        pb.clauses.swap_remove(j);
        if !pb.fold_unit(unit) {
            pb.status = Status::Unsatisfiable;
            return false;
        }
        propagate(pb);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Clause;
    use crate::lit::Lit;

    fn clause(lits: &[i32]) -> Clause {
        Clause::new(lits.iter().map(|&i| Lit::from_dimacs(i)).collect())
    }

    fn reduced(clauses: Vec<Clause>, nb_vars: usize) -> (Problem, PreprocessStats) {
        let mut pb = Problem::new(nb_vars, clauses);
        let mut stats = PreprocessStats::default();
        reduce(&mut pb, &mut stats);
        (pb, stats)
    }

    #[test]
    fn test_subsumed_clause_is_dropped() {
        let (pb, stats) = reduced(vec![clause(&[1, 2]), clause(&[1, 2, 3])], 3);
        assert_eq!(pb.clauses.len(), 1);
        assert_eq!(stats.clauses_subsumed, 1);
    }

    #[test]
    fn test_duplicate_clause_is_dropped() {
        let (pb, _) = reduced(vec![clause(&[2, 1]), clause(&[1, 2])], 2);
        assert_eq!(pb.clauses.len(), 1);
    }

    #[test]
    fn test_tautology_is_dropped() {
        let (pb, stats) = reduced(vec![clause(&[1, -1, 2]), clause(&[2, 3])], 3);
        assert_eq!(pb.clauses.len(), 1);
        assert_eq!(stats.tautologies_discarded, 1);
    }

    #[test]
    fn test_strengthening_folds_units() {
        // {1,2} self-subsumes {-1,2}: the latter strengthens to the unit
        // {2}, which then satisfies {1,2} as well.
        let (pb, stats) = reduced(vec![clause(&[1, 2]), clause(&[-1, 2])], 2);
        assert_eq!(pb.status, Status::Satisfied);
        assert_eq!(pb.model[1], Some(true));
        assert_eq!(stats.clauses_strengthened, 1);
    }

    #[test]
    fn test_strengthening_can_refute() {
        let (pb, _) = reduced(
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
