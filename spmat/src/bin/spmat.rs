use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use spmat::{load, save, FileError, MatrixSummary, SparseMatrix};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "spmat - Add, subtract and multiply sparse integer matrices stored as text files")]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices of the same shape
    Add(BinaryArgs),
    /// Subtract the second matrix from the first
    Subtract(BinaryArgs),
    /// Multiply the first matrix by the second
    Multiply(BinaryArgs),
    /// Show dimensions and fill of a matrix file
    Info {
        /// Matrix file
        path: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct BinaryArgs {
    /// First matrix file
    first: PathBuf,

    /// Second matrix file
    second: PathBuf,

    /// Output file for the result
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Add(args) => binary_op(&args, "add", SparseMatrix::add)?,
        Commands::Subtract(args) => binary_op(&args, "subtract", SparseMatrix::subtract)?,
        Commands::Multiply(args) => binary_op(&args, "multiply", SparseMatrix::multiply)?,
        Commands::Info { path, json } => {
            let summary = MatrixSummary::of(&load(&path)?);
            if json {
                println!("{}", summary.to_json()?);
            } else {
                println!("{summary}");
            }
        }
    }
    Ok(())
}

fn binary_op(
    args: &BinaryArgs,
    name: &str,
    op: fn(&SparseMatrix, &SparseMatrix) -> spmat::Result<SparseMatrix>,
) -> Result<(), FileError> {
    let first = load(&args.first)?;
    let second = load(&args.second)?;
    let result = op(&first, &second)?;
    save(&result, &args.output)?;

    info!(
        op = name,
        rows = result.rows(),
        cols = result.cols(),
        nnz = result.nnz(),
        "operation complete"
    );
    print_saved(&args.output);
    Ok(())
}

fn print_saved(path: &Path) {
    println!("Result saved to {}", path.display());
}
