//! Parsing of generation requests from whitespace-separated integers.
//!
//! Each record holds fifteen integers: seed, problem number, then the
//! thirteen generation parameters in their historical order. Tokens may be
//! split across lines in any way.

use netgen_core::{GenerationParams, PROBLEM_PARMS};

use super::CliError;

/// Integers per record: seed, problem number and the parameters.
pub const RECORD_LEN: usize = PROBLEM_PARMS + 2;

/// One parsed generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Random seed; strictly positive.
    pub seed: i64,
    /// Problem number; strictly positive, also the output file name.
    pub problem: i64,
    /// Generation parameters.
    pub params: GenerationParams,
}

/// Parses every record in `input`.
///
/// # Errors
/// Returns [`CliError::Parse`] for a token that is not an integer,
/// [`CliError::IncompleteRecord`] when the input ends mid-record,
/// [`CliError::InvalidRecord`] for a non-positive seed or problem number and
/// [`CliError::EmptyInput`] when no record is present.
///
/// # Examples
/// ```
/// use netgen_cli::cli::parse_records;
///
/// let records = parse_records("17 1\n10 2 2 15 1 10 50 0 0 50 50 1 20\n")?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].problem, 1);
/// assert_eq!(records[0].params.density, 15);
/// # Ok::<(), netgen_cli::cli::CliError>(())
/// ```
pub fn parse_records(input: &str) -> Result<Vec<Record>, CliError> {
    let values = input
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<i64>().map_err(|_| CliError::Parse {
                record: index / RECORD_LEN + 1,
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(CliError::EmptyInput);
    }

    values
        .chunks(RECORD_LEN)
        .enumerate()
        .map(|(index, chunk)| record_from(index + 1, chunk))
        .collect()
}

fn record_from(record: usize, chunk: &[i64]) -> Result<Record, CliError> {
    let Some((&[seed, problem], parms)) = chunk.split_first_chunk::<2>() else {
        return Err(incomplete(record, chunk));
    };
    let parms: [i64; PROBLEM_PARMS] = parms
        .try_into()
        .map_err(|_| incomplete(record, chunk))?;
    if seed <= 0 || problem <= 0 {
        return Err(CliError::InvalidRecord {
            record,
            seed,
            problem,
        });
    }
    Ok(Record {
        seed,
        problem,
        params: GenerationParams::from_array(parms),
    })
}

fn incomplete(record: usize, chunk: &[i64]) -> CliError {
    CliError::IncompleteRecord {
        record,
        found: chunk.len(),
    }
}
