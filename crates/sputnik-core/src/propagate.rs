//! Unit propagation over the live clause set.
//!
//! The scan is restart-based rather than worklist-based: each newly
//! forced literal may unlock simplification of clauses scanned earlier,
//! so the whole live region is rescanned after every assignment.
//! Removals compact the live region by swapping with its tail, an O(1)
//! operation that does not preserve clause order; no consumer requires
//! clause order.

use crate::problem::{Problem, Status};

/// Runs unit propagation to a fixpoint, mutating `pb` in place.
///
/// Per clause: a literal matching its variable's assignment satisfies
/// the clause, which is dropped from the live set; a contradicted
/// literal is dropped from the clause. A clause shrunk to zero literals
/// makes the problem unsatisfiable; a clause shrunk to one literal is
/// folded into the model (unsatisfiable on conflict) and the scan
/// restarts. An empty live set with no contradiction means the problem
/// is satisfied. Idempotent, and leaves `pb.status` authoritative.
pub fn propagate(pb: &mut Problem) {
    let mut live = pb.clauses.len();
    let mut restart = true;
    while restart {
        restart = false;
        let mut i = 0;
        while i < live {
            let clause = &mut pb.clauses[i];
            let mut satisfied = false;
            let mut j = 0;
            while j < clause.len() {
                let lit = clause.get(j);
                match pb.model[lit.var().index()] {
                    None => j += 1,
                    Some(value) if value == lit.is_positive() => {
                        satisfied = true;
                        break;
                    }
                    Some(_) => clause.swap_remove(j),
                }
            }
            if satisfied {
                pb.clauses.swap(i, live - 1);
                live -= 1;
                continue;
            }
            match pb.clauses[i].len() {
                0 => {
                    pb.status = Status::Unsatisfiable;
                    pb.clauses.truncate(live);
                    return;
                }
                1 => {
                    let unit = pb.clauses[i].first();
                    pb.clauses.swap(i, live - 1);
                    live -= 1;
                    if !pb.fold_unit(unit) {
                        pb.status = Status::Unsatisfiable;
                        pb.clauses.truncate(live);
                        return;
                    }
                    tracing::trace!(unit = %unit, "forced literal");
                    restart = true;
                    break;
                }
                _ => i += 1,
            }
        }
    }
    pb.clauses.truncate(live);
    if pb.clauses.is_empty() && pb.status == Status::Undetermined {
        pb.status = Status::Satisfied;
    }
}
