//! File-backed record source.

use crate::model::error::InputError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Reads an input file as one record per line.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    reader: BufReader<File>,
}

impl FileSource {
    /// Open `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every remaining line.
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        read_lines(&mut self.reader)
    }
}

/// Split a reader into lines.
///
/// Line terminators (`\n` or `\r\n`) are stripped, a final line without a
/// terminator is kept, and invalid UTF-8 is replaced rather than rejected.
pub fn read_lines<R: BufRead>(reader: &mut R) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        let bytes_read = reader.read_until(b'\n', &mut buffer)?;
        if bytes_read == 0 {
            break;
        }

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
            if buffer.last() == Some(&b'\r') {
                buffer.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buffer).into_owned());
    }

    Ok(lines)
}
