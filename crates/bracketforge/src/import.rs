//! Bulk team import from CSV.
//!
//! The file starts with a header row, followed by one team per row:
//!
//! ```text
//! name,division,coefficient
//! Team A,Division 1,10
//! Team B,Division 2,15
//! ```
//!
//! Fields are trimmed. The first bad row aborts the whole import.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use bracketforge_core::{BracketError, Result, Team};
use csv::{ReaderBuilder, StringRecord, Trim};

const FIELD_COUNT: usize = 3;

/// Reads teams from CSV data.
///
/// # Errors
///
/// - [`BracketError::MalformedImportRow`] for a row with the wrong number
///   of fields or an invalid team, with its 1-based line number.
/// - [`BracketError::Import`] if the data cannot be read at all.
pub fn import_teams<R: Read>(reader: R) -> Result<Vec<Team>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut teams = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        teams.push(team_from_record(&record)?);
    }
    Ok(teams)
}

/// Reads teams from a CSV file.
///
/// # Errors
///
/// Returns [`BracketError::Import`] if the file cannot be opened, otherwise
/// as [`import_teams`].
pub fn import_teams_from_path(path: impl AsRef<Path>) -> Result<Vec<Team>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| BracketError::Import(format!("{}: {}", path.display(), e)))?;
    import_teams(file)
}

fn team_from_record(record: &StringRecord) -> Result<Team> {
    let line = record.position().map_or(0, |p| p.line());

    if record.len() != FIELD_COUNT {
        return Err(BracketError::MalformedImportRow {
            line,
            reason: format!(
                "expected {} fields (name, division, coefficient), found {}",
                FIELD_COUNT,
                record.len()
            ),
        });
    }

    Team::parse(&record[0], &record[1], &record[2]).map_err(|e| {
        let reason = match e {
            BracketError::InvalidTeam(reason) => reason,
            other => other.to_string(),
        };
        BracketError::MalformedImportRow { line, reason }
    })
}

fn csv_error(err: csv::Error) -> BracketError {
    match err.position() {
        Some(pos) => BracketError::MalformedImportRow {
            line: pos.line(),
            reason: err.to_string(),
        },
        None => BracketError::Import(err.to_string()),
    }
}
