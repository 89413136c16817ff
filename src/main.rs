use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{debug, LevelFilter};
use twocnf::{
    parser::read_3cnf,
    transformer::transform_3sat_to_2sat,
    twosat::{solve_and_filter, FilterOutcome},
};

/// 3-SAT -> 2-SAT transform, 2-SAT solve and filtering of spurious models.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// 3-CNF input, DIMACS or three signed ints per line
    #[arg(short, long)]
    input: PathBuf,
    /// Also write the projected assignments to this file
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Stop after this many 2-SAT models
    #[arg(long, default_value_t = 1000)]
    max_models: usize,
    #[arg(short, long)]
    verbose: bool,
}

fn format_assignment(assignment: &[bool]) -> String {
    assignment
        .iter()
        .enumerate()
        .map(|(i, &b)| format!("v{}={}", i + 1, if b { 1 } else { 0 }))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_out(path: Option<&PathBuf>, contents: impl FnOnce() -> String) -> anyhow::Result<()> {
    if let Some(path) = path {
        fs::write(path, contents())
            .with_context(|| format!("couldn't write {}", path.display()))?;
        debug!("wrote results to {}", path.display());
    }
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let cnf = match read_3cnf(&args.input) {
        Ok(cnf) => cnf,
        Err(err) => {
            eprintln!("Failed to parse input: {err}");
            return Ok(ExitCode::from(2));
        }
    };
    debug!(
        "read {} clauses over {} original variables",
        cnf.clauses.len(),
        cnf.num_vars
    );

    let transformed = match transform_3sat_to_2sat(&cnf.clauses, cnf.num_vars) {
        Ok(t) => t,
        Err(err) => {
            eprintln!("Transformation failed: {err}");
            return Ok(ExitCode::from(3));
        }
    };

    if transformed.graph.solve().is_err() {
        println!("UNSAT (2-SAT relaxation is unsatisfiable => original 3-SAT unsatisfiable)");
        write_out(args.out.as_ref(), || "# UNSAT\n".to_string())?;
        return Ok(ExitCode::SUCCESS);
    }

    let FilterOutcome {
        satisfiable,
        models,
    } = solve_and_filter(
        &transformed.graph,
        &transformed.exclusions,
        transformed.num_original_vars,
        Some(args.max_models),
    );

    if !satisfiable {
        println!("UNSAT (no surviving assignments after filtering)");
        write_out(args.out.as_ref(), || "# UNSAT after filtering\n".to_string())?;
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "SAT (found {} distinct assignment(s) for original {} variables)",
        models.len(),
        transformed.num_original_vars
    );
    for (i, model) in models.iter().enumerate() {
        println!("Model {}: {}", i + 1, format_assignment(model));
    }
    write_out(args.out.as_ref(), || {
        let mut text = format!(
            "# Projected assignments for original {} vars\n",
            transformed.num_original_vars
        );
        for model in &models {
            text.push_str(&format_assignment(model));
            text.push('\n');
        }
        text
    })?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    run(&args).unwrap_or_else(|err| {
        eprintln!("{err:#}");
        ExitCode::FAILURE
    })
}
