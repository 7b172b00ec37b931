//! Sputnik CLI - command-line front end for the CNF preprocessor.

use anyhow::Context;
use clap::Parser;
use sputnik_core::{Preprocessor, Status};
use sputnik_format::dimacs;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sputnik")]
#[command(author, version, about = "CNF preprocessor for SAT solvers", long_about = None)]
struct Cli {
    /// Input formula (DIMACS .cnf)
    input: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also print the formula before preprocessing
    #[arg(long)]
    show_input: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let extension = cli.input.extension().and_then(|e| e.to_str());
    if extension != Some("cnf") {
        anyhow::bail!(
            "unrecognized extension for {}: expected a .cnf file",
            cli.input.display()
        );
    }

    println!("c preprocessing {}", cli.input.display());
    let file = File::open(&cli.input)
        .with_context(|| format!("could not open {}", cli.input.display()))?;
    let mut problem = dimacs::parse(file)
        .with_context(|| format!("could not parse DIMACS file {}", cli.input.display()))?;
    tracing::info!(
        vars = problem.nb_vars,
        clauses = problem.clauses.len(),
        "loaded problem"
    );

    if cli.show_input {
        print!("{}", problem.to_cnf());
    }

    let stats = Preprocessor::new().run(&mut problem);
    tracing::info!(
        units = stats.units_folded,
        eliminated = stats.variables_eliminated,
        subsumed = stats.clauses_subsumed,
        strengthened = stats.clauses_strengthened,
        "preprocessing done"
    );

    match problem.status {
        Status::Satisfied => {
            println!("s SATISFIABLE");
            let model: Vec<String> = problem
                .units
                .iter()
                .map(|l| l.to_dimacs().to_string())
                .collect();
            println!("v {} 0", model.join(" "));
        }
        Status::Unsatisfiable => {
            println!("s UNSATISFIABLE");
        }
        Status::Undetermined => {
            println!("c simplified formula:");
            print!("{}", problem.to_cnf());
        }
    }
    Ok(())
}
