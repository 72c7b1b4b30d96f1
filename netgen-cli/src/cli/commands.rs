//! Command implementations and argument parsing for the netgen CLI.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use netgen_core::{DimacsFormat, Instance, NetgenError, generate};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::records::{Record, parse_records};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "netgen",
    about = "Generate NETGEN flow networks in DIMACS format."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one network per input record.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone, Default)]
pub struct GenerateCommand {
    /// File of records: seed, problem number and 13 parameters each.
    /// Reads standard input when omitted.
    pub input: Option<PathBuf>,

    /// Directory receiving one file per problem, named by problem number.
    #[arg(long = "output-dir", conflicts_with = "stdout")]
    pub output_dir: Option<PathBuf>,

    /// Write the DIMACS text to standard output instead of files.
    #[arg(long)]
    pub stdout: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading standard input failed.
    #[error("failed to read standard input: {source}")]
    Stdin {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input held no record.
    #[error("input contains no generation record")]
    EmptyInput,
    /// A token was not an integer.
    #[error("record {record}: `{token}` is not an integer")]
    Parse {
        /// 1-based record holding the token.
        record: usize,
        /// Offending token.
        token: String,
    },
    /// The input ended part-way through a record.
    #[error("record {record} is incomplete: found {found} of 15 values")]
    IncompleteRecord {
        /// 1-based record number.
        record: usize,
        /// Values present.
        found: usize,
    },
    /// The seed or problem number was not positive.
    #[error("record {record}: incorrect seed value ({seed}) or problem value ({problem})")]
    InvalidRecord {
        /// 1-based record number.
        record: usize,
        /// Seed as read.
        seed: i64,
        /// Problem number as read.
        problem: i64,
    },
    /// Generation failed.
    #[error("problem {problem}: {source}")]
    Core {
        /// Problem number of the failing record.
        problem: i64,
        /// Underlying generator error.
        #[source]
        source: NetgenError,
    },
}

/// Where a generated instance went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Written to this file.
    File(PathBuf),
    /// Held for rendering on standard output.
    Stdout(Box<Instance>),
}

/// Outcome of one generated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemSummary {
    /// Problem number.
    pub problem: i64,
    /// Seed used.
    pub seed: i64,
    /// DIMACS dialect written.
    pub format: DimacsFormat,
    /// Node count.
    pub nodes: usize,
    /// Arc count actually generated.
    pub arcs: usize,
    /// Output location.
    pub destination: Destination,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// One entry per input record, in input order.
    pub problems: Vec<ProblemSummary>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, generation or writing fails.
/// Records before the failing one have already been written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netgen_cli::cli::{Cli, Command, GenerateCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("records.txt");
/// std::fs::write(&input, "17 4 10 2 2 15 1 10 50 0 0 50 50 1 20\n")?;
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         input: Some(input),
///         output_dir: Some(dir.path().to_path_buf()),
///         stdout: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.problems.len(), 1);
/// assert!(dir.path().join("4").exists());
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(command) => {
            Span::current().record("command", field::display("generate"));
            run_command(command)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(input = field::Empty, output = field::Empty, records = field::Empty),
)]
pub(super) fn run_command(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let GenerateCommand {
        input,
        output_dir,
        stdout,
    } = command;
    let span = Span::current();
    span.record(
        "input",
        field::display(
            input
                .as_deref()
                .map_or_else(|| "<stdin>".into(), Path::to_string_lossy),
        ),
    );

    let text = match &input {
        Some(path) => read_input(path)?,
        None => read_stdin()?,
    };
    let records = parse_records(&text)?;
    span.record("records", records.len());

    let output_dir = if stdout {
        span.record("output", field::display("<stdout>"));
        None
    } else {
        let dir = output_dir.unwrap_or_else(|| PathBuf::from("."));
        span.record("output", field::display(dir.display()));
        Some(dir)
    };

    let mut summary = ExecutionSummary::default();
    for record in records {
        summary
            .problems
            .push(generate_record(record, output_dir.as_deref())?);
    }
    info!(problems = summary.problems.len(), "command completed");
    Ok(summary)
}

#[instrument(
    name = "cli.generate_record",
    err,
    skip(record, output_dir),
    fields(problem = record.problem, seed = record.seed),
)]
fn generate_record(record: Record, output_dir: Option<&Path>) -> Result<ProblemSummary, CliError> {
    let Record {
        seed,
        problem,
        params,
    } = record;
    let network = generate(seed, &params).map_err(|source| CliError::Core { problem, source })?;
    let instance = Instance::new(seed, problem, params, network);
    let format = instance.format();
    let nodes = instance.network().node_count();
    let arcs = instance.network().arc_count();

    let destination = match output_dir {
        Some(dir) => Destination::File(write_instance(dir, &instance)?),
        None => Destination::Stdout(Box::new(instance)),
    };
    info!(
        problem,
        format = format.designator(),
        nodes,
        arcs,
        "problem generated"
    );
    Ok(ProblemSummary {
        problem,
        seed,
        format,
        nodes,
        arcs,
        destination,
    })
}

#[instrument(name = "cli.read_input", err, fields(path = field::Empty))]
pub(super) fn read_input(path: &Path) -> Result<String, CliError> {
    Span::current().record("path", field::display(path.display()));
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin() -> Result<String, CliError> {
    let mut text = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .map_err(|source| CliError::Stdin { source })?;
    Ok(text)
}

/// Writes `instance` to `dir/<problem>`, creating `dir` when needed.
pub(super) fn write_instance(dir: &Path, instance: &Instance) -> Result<PathBuf, CliError> {
    let io_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| CliError::Io { path, source }
    };
    fs::create_dir_all(dir).map_err(io_error(dir))?;
    let path = dir.join(instance.problem().to_string());
    fs::write(&path, instance.to_string()).map_err(io_error(&path))?;
    Ok(path)
}

/// Renders `summary` to `writer`.
///
/// Instances kept for standard output are written as DIMACS text; instances
/// written to files get a one-line report instead.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use netgen_cli::cli::{Destination, ExecutionSummary, ProblemSummary, render_summary};
/// # use netgen_core::DimacsFormat;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     problems: vec![ProblemSummary {
///         problem: 3,
///         seed: 17,
///         format: DimacsFormat::MinCostFlow,
///         nodes: 10,
///         arcs: 14,
///         destination: Destination::File(PathBuf::from("out/3")),
///     }],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "problem 3: min, 10 nodes, 14 arcs -> out/3\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for problem in &summary.problems {
        match &problem.destination {
            Destination::File(path) => writeln!(
                writer,
                "problem {}: {}, {} nodes, {} arcs -> {}",
                problem.problem,
                problem.format.designator(),
                problem.nodes,
                problem.arcs,
                path.display()
            )?,
            Destination::Stdout(instance) => write!(writer, "{instance}")?,
        }
    }
    Ok(())
}
