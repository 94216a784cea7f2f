//! Interactive sparse matrix calculator.
//!
//! Loads two matrices from text files, applies `+`, `-` or `x`, and prints the dense
//! result one row per line. Any input that is not supplied on the command line is
//! prompted for on standard input. Every failure is reported on standard error and the
//! process exits with a non-zero status; no operation is attempted after a failed load.
use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use sparse_matrix::{Operation, SparseMatrix, utils::data_loader::load_matrix};
use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    str::FromStr,
};

/// Command-line interface for the calculator.
#[derive(Parser, Debug)]
#[clap(
    name = "sparse_calc",
    about = "Adds, subtracts or multiplies two sparse matrices loaded from text files."
)]
struct CalcArgs {
    /// Path to the left operand. Prompted for when omitted.
    #[clap(long, value_name = "PATH")]
    lhs: Option<PathBuf>,
    /// Path to the right operand. Prompted for when omitted.
    #[clap(long, value_name = "PATH")]
    rhs: Option<PathBuf>,
    /// Operator: '+', '-' or 'x' (case-insensitive). Prompted for when omitted.
    #[clap(long, value_name = "OP", value_parser = Operation::from_str)]
    op: Option<Operation>,
    /// Also write the result to this file, in the same format the loader reads.
    #[clap(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Increase log verbosity (-v for info, -vv for debug).
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = CalcArgs::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    // RUST_LOG, when set, takes precedence over the -v flags.
    if let Err(e) = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
    {
        eprintln!("Failed to initialize logger: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run failed: {e:?}");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CalcArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let lhs_path = match &args.lhs {
        Some(path) => path.clone(),
        None => prompt(&mut input, &mut stdout, "Enter the file path for Matrix 1: ")?.into(),
    };
    let rhs_path = match &args.rhs {
        Some(path) => path.clone(),
        None => prompt(&mut input, &mut stdout, "Enter the file path for Matrix 2: ")?.into(),
    };
    // A prompted operator is only validated once both matrices have loaded.
    let op_text = match args.op {
        Some(op) => op.symbol().to_string(),
        None => prompt(
            &mut input,
            &mut stdout,
            "Choose operation - Enter + for adding/Enter - for subtracting/Enter x for multiplying: ",
        )?,
    };

    let lhs = load(&lhs_path)?;
    let rhs = load(&rhs_path)?;

    let op: Operation = op_text.parse()?;
    let result = op
        .apply(&lhs, &rhs)
        .context("Error performing operation")?;
    log::info!(
        "Result is {}x{} with {} stored entries",
        result.rows(),
        result.cols(),
        result.nnz()
    );

    if let Some(path) = &args.output {
        std::fs::write(path, result.to_string())
            .with_context(|| format!("Failed to write result to {path:?}"))?;
        log::info!("Wrote result to {path:?}");
    }

    let mut out = stdout.lock();
    for row in result.to_dense() {
        writeln!(out, "{row:?}")?;
    }
    out.flush()?;
    Ok(())
}

fn load(path: &Path) -> Result<SparseMatrix> {
    load_matrix(path).with_context(|| format!("Error loading matrix from {}", path.display()))
}

/// Prints `message` and reads one trimmed line of input.
fn prompt(input: &mut impl BufRead, output: &mut impl Write, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("Unexpected end of input while waiting for: {}", message.trim()));
    }
    Ok(line.trim().to_string())
}
