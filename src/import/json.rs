//! JSON import module for quiz exports.
//! Reads a list of term/definition records and turns them into questions.

use crate::error::{QuizError, Result};
use crate::models::{Question, RawRecord, build_questions};
use log::info;
use rand::Rng;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Imports the records of a JSON export: an array of `{"term", "definition"}` objects.
/// Returns an error if the file doesn't exist or any record is malformed.
pub fn import_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let io_error = |source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_error)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(io_error)?;

    let records: Vec<RawRecord> =
        serde_json::from_str(&contents).map_err(|source| QuizError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} records from '{}'", records.len(), path.display());
    Ok(records)
}

/// Imports a JSON export and builds its questions in source order.
pub fn import_questions<R: Rng + ?Sized>(
    path: impl AsRef<Path>,
    rng: &mut R,
) -> Result<Vec<Question>> {
    let records = import_records(path)?;
    let questions = build_questions(&records, rng);
    info!("Built {} questions", questions.len());
    Ok(questions)
}
