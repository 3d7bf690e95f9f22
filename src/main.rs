use std::io::{self, BufRead};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use row_reduction::utils::parse_dimension;
use row_reduction::{Session, Strategy};

/// Solve a linear system step by step with Gaussian or Gauss-Jordan elimination.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of variables (defaults to the widest row minus its right-hand side)
    #[arg(short, long)]
    vars: Option<String>,

    /// Number of equations (defaults to the number of rows given)
    #[arg(short, long)]
    eqs: Option<String>,

    /// `gauss` (forward elimination + back-substitution) or `jordan` (full reduction)
    #[arg(short, long, default_value = "gauss")]
    method: Strategy,

    /// One equation: cells separated by commas or whitespace
    #[arg(short, long)]
    row: Vec<String>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

// Commas keep empty fields ("1,,3"), whitespace does not.
fn split_fields(line: &str) -> Vec<String> {
    if line.contains(',') {
        line.split(',').map(|s| s.trim().to_owned()).collect()
    } else {
        line.split_whitespace().map(str::to_owned).collect()
    }
}

fn read_stdin() -> Result<Vec<String>> {
    let mut lines = vec![];
    for line in io::stdin().lock().lines() {
        let line = line.context("reading equations from stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

// Without --vars/--eqs the grid is sized from the rows themselves.
fn dimensions(vars: Option<&str>, eqs: Option<&str>, fields: &[Vec<String>]) -> (usize, usize) {
    let variables = match vars {
        Some(raw) => parse_dimension(raw),
        None => fields
            .iter()
            .map(|f| f.len())
            .max()
            .unwrap_or(0)
            .saturating_sub(1),
    };
    let equations = match eqs {
        Some(raw) => parse_dimension(raw),
        None => fields.len(),
    };
    (variables, equations)
}

fn run(args: Args) -> Result<()> {
    let rows = if args.row.is_empty() {
        read_stdin()?
    } else {
        args.row
    };
    let fields: Vec<Vec<String>> = rows.iter().map(|r| split_fields(r)).collect();

    let (variables, equations) = dimensions(args.vars.as_deref(), args.eqs.as_deref(), &fields);

    let mut session = Session::new();
    session.set_strategy(args.method);

    let grid = session.build(variables, equations);
    log::debug!(
        "{} equation(s) of the form {} b",
        grid.equations(),
        grid.labels()
    );
    for (i, row) in fields.iter().enumerate().take(grid.equations()) {
        grid.set_row(i, row)
            .with_context(|| format!("filling equation {}", i + 1))?;
    }

    let report = session.solve().context("solving system")?;
    if args.json {
        println!("{}", report.to_json().context("serializing report")?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(args) {
        eprintln!("ran into solver error: {err:?}");
        process::exit(1)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
