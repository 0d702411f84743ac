use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::domain::PersonSubmission;

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnsupportedFormat(PathBuf),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read person records: {}", err),
            ImportError::Csv(err) => write!(f, "invalid person CSV data: {}", err),
            ImportError::Json(err) => write!(f, "invalid person JSON data: {}", err),
            ImportError::UnsupportedFormat(path) => write!(
                f,
                "unsupported input {}: expected a .csv or .json file",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            ImportError::Json(err) => Some(err),
            ImportError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Reads one submission per row; headers are the submission field names and
/// empty cells come back as `None`.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<PersonSubmission>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut submissions = Vec::new();

    for record in csv_reader.deserialize::<PersonSubmission>() {
        submissions.push(record?);
    }

    Ok(submissions)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Many(Vec<PersonSubmission>),
    One(PersonSubmission),
}

/// Accepts either a single submission object or an array of them.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<PersonSubmission>, ImportError> {
    let submissions = match serde_json::from_reader(reader)? {
        JsonDocument::Many(submissions) => submissions,
        JsonDocument::One(submission) => vec![submission],
    };
    Ok(submissions)
}

/// Picks the reader from the file extension.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PersonSubmission>, ImportError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => read_csv(File::open(path)?),
        Some("json") => read_json(File::open(path)?),
        _ => Err(ImportError::UnsupportedFormat(path.to_path_buf())),
    }
}
