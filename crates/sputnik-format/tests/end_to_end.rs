//! End-to-end tests: parse a DIMACS formula, preprocess it, and check
//! the verdict and the exported result.

use sputnik_core::{Preprocessor, Status};
use sputnik_format::dimacs;

fn preprocess(input: &str) -> sputnik_core::Problem {
    let mut pb = dimacs::parse_str(input).expect("fixture must parse");
    Preprocessor::new().run(&mut pb);
    pb
}

// =============================================================================
// Verdict Tests
// =============================================================================

#[test]
fn test_contradictory_units_are_unsat() {
    let pb = preprocess("p cnf 1 2\n1 0\n-1 0\n");
    assert_eq!(pb.status, Status::Unsatisfiable);
}

#[test]
fn test_single_unit_is_sat() {
    let pb = preprocess("p cnf 1 1\n1 0\n");
    assert_eq!(pb.status, Status::Satisfied);
    assert_eq!(pb.model[0], Some(true));
    assert!(pb.clauses.is_empty());
}

#[test]
fn test_binary_clause_stays_undetermined() {
    let pb = preprocess("p cnf 2 1\n1 2 0\n");
    assert_eq!(pb.status, Status::Undetermined);
    assert_eq!(pb.clauses.len(), 1);
    assert_eq!(pb.model, vec![None, None]);

    let mut clause = pb.clauses[0].clone();
    assert!(!clause.simplify());
    assert_eq!(clause.to_string(), "1 2 0");
}

#[test]
fn test_satisfiable_triangle_is_not_refuted() {
    let pb = preprocess("p cnf 3 3\n1 2 0\n-1 3 0\n-2 -3 0\n");
    assert_ne!(pb.status, Status::Unsatisfiable);
    assert!(pb.clauses.len() <= 3);
}

// =============================================================================
// Export Round-Trip Tests
// =============================================================================

#[test]
fn test_export_is_parseable() {
    let pb = preprocess("p cnf 4 3\n1 0\n-1 2 3 0\n-2 4 0\n");
    let reparsed = dimacs::parse_str(&pb.to_cnf()).expect("export must parse");
    assert_eq!(reparsed.nb_vars, pb.nb_vars);
    assert_eq!(reparsed.clauses.len(), pb.clauses.len() + pb.units.len());
}

#[test]
fn test_round_trip_preserves_clauses() {
    let input = "p cnf 3 2\n1 -2 0\n2 3 0\n";
    let pb = dimacs::parse_str(input).expect("fixture must parse");
    let reparsed = dimacs::parse_str(&pb.to_cnf()).expect("export must parse");

    let render = |pb: &sputnik_core::Problem| {
        let mut lines: Vec<String> = pb.clauses.iter().map(|c| c.to_string()).collect();
        lines.sort();
        lines
    };
    assert_eq!(render(&pb), render(&reparsed));
}

// =============================================================================
// Preprocessing Effect Tests
// =============================================================================

#[test]
fn test_units_are_folded_into_the_formula() {
    let pb = preprocess("p cnf 3 2\n1 0\n-1 2 3 0\n");
    assert_eq!(pb.status, Status::Undetermined);
    assert_eq!(pb.units.len(), 1);
    assert_eq!(pb.clauses.len(), 1);
    // The falsified -1 was dropped from the long clause.
    assert_eq!(pb.clauses[0].len(), 2);
}

#[test]
fn test_stats_report_the_run() {
    let mut pb = dimacs::parse_str("p cnf 3 3\n1 2 0\n-1 3 0\n2 -3 0\n").expect("fixture");
    let stats = Preprocessor::new().run(&mut pb);
    assert_eq!(pb.status, Status::Satisfied);
    assert!(stats.variables_eliminated >= 1);
    assert!(stats.units_folded >= 1);
}
