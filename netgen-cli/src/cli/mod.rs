//! Command-line interface orchestration for the netgen generator.
//!
//! The `generate` command reads generation records from a file or standard
//! input, generates one network per record and writes each as DIMACS text,
//! either to a file named by its problem number or to standard output.

mod commands;
mod records;

pub use commands::{
    Cli, CliError, Command, Destination, ExecutionSummary, GenerateCommand, ProblemSummary,
    render_summary, run_cli,
};
pub use records::{RECORD_LEN, Record, parse_records};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
