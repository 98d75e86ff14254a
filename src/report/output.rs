// Chart output
// Writes encoded chart images to disk and fingerprints them
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Write a chart image into `dir`, replacing any existing file,
/// and return its path and SHA256 hash
pub fn write_chart(dir: &Path, file_name: &str, data: &[u8]) -> OutputResult<(PathBuf, String)> {
    let file_path = dir.join(file_name);
    let write_error = |source: io::Error| OutputError::Write {
        path: file_path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(write_error)?;

    let mut file = fs::File::create(&file_path).map_err(write_error)?;
    file.write_all(data).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    Ok((file_path, calculate_sha256(data)))
}

/// Calculate SHA256 hash of data
pub fn calculate_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
