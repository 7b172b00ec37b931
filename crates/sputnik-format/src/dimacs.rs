//! DIMACS CNF format parser.
//!
//! Standard format used in SAT competitions: `c` lines are comments,
//! one `p cnf <vars> <clauses>` header precedes the clause data, and
//! each clause is a run of whitespace-separated signed integers
//! terminated by `0`. Clauses may span lines and share lines.
//!
//! Parsing produces a fully built [`Problem`] with an all-unbound
//! model. Unit clauses are left in the clause set; the preprocessor's
//! own propagation pass folds them.

use sputnik_core::{Clause, Error, Lit, Problem, Result};
use std::io::{BufRead, BufReader, Read};

/// Parses DIMACS CNF from a reader.
pub fn parse<R: Read>(reader: R) -> Result<Problem> {
    let reader = BufReader::new(reader);
    let mut nb_vars: usize = 0;
    let mut clauses: Vec<Clause> = Vec::new();
    let mut pending: Vec<Lit> = Vec::new();
    let mut header_found = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('c') {
            continue;
        }

        if line.starts_with('p') {
            if header_found {
                return Err(Error::InvalidHeader(line.to_string()));
            }
            let (vars, nb_clauses) = parse_header(line)?;
            nb_vars = vars;
            clauses.reserve(nb_clauses);
            header_found = true;
            continue;
        }

        if !header_found {
            return Err(Error::MissingHeader);
        }

        for token in line.split_whitespace() {
            let value: i32 = token
                .parse()
                .map_err(|_| Error::InvalidLiteral(token.to_string()))?;
            if value == 0 {
                clauses.push(Clause::new(std::mem::take(&mut pending)));
            } else {
                if value.unsigned_abs() as usize > nb_vars {
                    return Err(Error::LiteralOutOfRange {
                        literal: value,
                        nb_vars,
                    });
                }
                pending.push(Lit::from_dimacs(value));
            }
        }
    }

    // Trailing whitespace is fine; literals with no terminating zero
    // are not.
    if !pending.is_empty() {
        return Err(Error::UnterminatedClause);
    }
    if !header_found {
        return Err(Error::MissingHeader);
    }
    Ok(Problem::new(nb_vars, clauses))
}

/// Parses DIMACS CNF from a string.
pub fn parse_str(s: &str) -> Result<Problem> {
    parse(s.as_bytes())
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 || fields[0] != "p" || fields[1] != "cnf" {
        return Err(Error::InvalidHeader(line.to_string()));
    }
    let nb_vars = fields[2]
        .parse()
        .map_err(|_| Error::InvalidHeader(line.to_string()))?;
    let nb_clauses = fields[3]
        .parse()
        .map_err(|_| Error::InvalidHeader(line.to_string()))?;
    Ok((nb_vars, nb_clauses))
}
