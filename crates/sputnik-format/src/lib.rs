//! # sputnik-format
//!
//! Formula file formats for Sputnik.
//!
//! Supports:
//! - **DIMACS CNF**: the standard SAT-competition format

pub mod dimacs;
