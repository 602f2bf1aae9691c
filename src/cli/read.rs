use std::{io::BufReader, path::Path, sync::Arc};

use dnf_fit::{
    config::ReadConfig,
    data::{read::read_dataset, Dataset},
    types::err::ErrorKind,
};

pub(super) enum ReadError {
    FailedToOpen(std::io::Error),
    ParseError(ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen(err) => write!(f, "Failed to open the dataset: {err}."),
            Self::ParseError(err) => write!(f, "Parse error: {err}."),
        }
    }
}

/// Reads the dataset at `path` and writes a report.
pub(super) fn load_dataset(path: &Path, config: &ReadConfig) -> Result<Arc<Dataset>, ReadError> {
    println!("c Reading dataset from {path:?}");

    let file = std::fs::File::open(path).map_err(ReadError::FailedToOpen)?;
    let dataset = read_dataset(BufReader::new(file), config).map_err(ReadError::ParseError)?;

    println!("c Rows:     {}", dataset.rows());
    println!("c Features: {}", dataset.feature_count());
    println!("c Positive: {}", dataset.positive_count());

    Ok(Arc::new(dataset))
}
