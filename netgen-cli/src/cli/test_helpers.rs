//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests build temporary record files and output directories.
//! These helpers keep the test cases concise and consistent.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, GenerateCommand};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_records(dir: &TempDir, records: &[String]) -> io::Result<PathBuf> {
    let path = dir.path().join("records.txt");
    std::fs::write(&path, records.join("\n"))?;
    Ok(path)
}

pub(super) fn to_directory(input: PathBuf, output: &Path) -> GenerateCommand {
    GenerateCommand {
        input: Some(input),
        output_dir: Some(output.to_path_buf()),
        stdout: false,
    }
}

pub(super) fn run_command_expecting_error(command: GenerateCommand, panic_msg: &str) -> CliError {
    match run_command(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
