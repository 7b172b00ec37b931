//! Clause representation and the resolution-level primitives.

use crate::lit::{Lit, Var};
use std::fmt;

/// A disjunction of literals.
///
/// Sortedness (ascending encoded value) is a precondition for
/// [`Clause::subsumes`] and [`Clause::self_subsumes`]; it is established
/// by [`Clause::sort`] or [`Clause::simplify`] and is not maintained by
/// the propagation-time mutations.
///
/// An empty clause denotes a contradiction; a one-literal clause forces
/// an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    lits: Vec<Lit>,
}

impl Clause {
    /// Creates a clause from the given literals.
    #[must_use]
    pub fn new(lits: Vec<Lit>) -> Self {
        Self { lits }
    }

    /// Returns the number of literals in the clause.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lits.len()
    }

    /// Returns whether the clause has no literals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    /// Returns the first literal.
    ///
    /// # Panics
    ///
    /// Panics if the clause is empty. Callers use this on unit clauses.
    #[must_use]
    pub fn first(&self) -> Lit {
        self.lits[0]
    }

    /// Returns the `i`th literal.
    #[must_use]
    pub fn get(&self, i: usize) -> Lit {
        self.lits[i]
    }

    /// Returns the literals as a slice.
    #[must_use]
    pub fn lits(&self) -> &[Lit] {
        &self.lits
    }

    /// Returns whether the clause contains a literal of `v`, in either
    /// polarity.
    #[must_use]
    pub fn mentions(&self, v: Var) -> bool {
        self.lits.iter().any(|l| l.var() == v)
    }

    /// Removes the `i`th literal by swapping the last one into its
    /// place. Does not preserve literal order.
    pub(crate) fn swap_remove(&mut self, i: usize) {
        self.lits.swap_remove(i);
    }

    /// Removes the `i`th literal, preserving literal order (and thus
    /// sortedness).
    pub(crate) fn remove(&mut self, i: usize) {
        self.lits.remove(i);
    }

    /// Sorts the literals ascending by their encoded value.
    pub fn sort(&mut self) {
        self.lits.sort_unstable();
    }

    /// Sorts the clause, collapses duplicate literals, and detects
    /// tautologies. Returns `true` when the clause contains a literal
    /// together with its negation; its contents are then unspecified
    /// since the caller discards it.
    pub fn simplify(&mut self) -> bool {
        self.sort();
        let mut kept: Vec<Lit> = Vec::with_capacity(self.lits.len());
        for &lit in &self.lits {
            match kept.last() {
                Some(&prev) if prev == lit => continue,
                Some(&prev) if prev == lit.negation() => return true,
                _ => kept.push(lit),
            }
        }
        self.lits = kept;
        false
    }

    /// Returns `true` iff every literal of `self` appears in `other`.
    ///
    /// Both clauses must be sorted. Sortedness lets the scan bail out as
    /// soon as a literal of `other` exceeds the one being matched.
    #[must_use]
    pub fn subsumes(&self, other: &Clause) -> bool {
        if self.len() > other.len() {
            return false;
        }
        for &lit in &self.lits {
            let mut matched = false;
            for &lit2 in &other.lits {
                if lit2 == lit {
                    matched = true;
                    break;
                }
                if lit2 > lit {
                    return false;
                }
            }
            if !matched {
                return false;
            }
        }
        true
    }

    /// Returns `true` iff every literal of `self` appears in `other`
    /// except exactly one, which appears negated in `other`.
    ///
    /// Both clauses must be sorted. More than one negated match, or a
    /// literal with no match at all, fails the test.
    #[must_use]
    pub fn self_subsumes(&self, other: &Clause) -> bool {
        let mut one_negated = false;
        for &lit in &self.lits {
            let mut found = false;
            for &lit2 in &other.lits {
                if lit2 == lit {
                    found = true;
                    break;
                }
                if lit2 == lit.negation() {
                    if one_negated {
                        return false;
                    }
                    one_negated = true;
                    found = true;
                    break;
                }
                if lit2 > lit {
                    return false;
                }
            }
            if !found {
                return false;
            }
        }
        one_negated
    }

    /// Builds the resolvent of `self` and `other` on `v`: every literal
    /// of both clauses whose variable is not `v`.
    ///
    /// `self` must contain `v` in one polarity and `other` in the other;
    /// those two occurrences cancel.
    #[must_use]
    pub fn resolve(&self, other: &Clause, v: Var) -> Clause {
        let mut lits = Vec::with_capacity(self.len() + other.len() - 2);
        lits.extend(self.lits.iter().copied().filter(|l| l.var() != v));
        lits.extend(other.lits.iter().copied().filter(|l| l.var() != v));
        Clause::new(lits)
    }
}

/// Renders the clause as its signed DIMACS literals followed by the
/// terminating zero, e.g. `1 -2 0`.
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lit in &self.lits {
            write!(f, "{} ", lit.to_dimacs())?;
        }
        write!(f, "0")
    }
}
