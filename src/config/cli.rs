use crate::core::WordSource;
use crate::utils::error::{IsogramError, Result};
use std::cell::RefCell;
use std::fs;
use std::io::BufRead;
use std::path::PathBuf;

/// Words given directly on the command line.
#[derive(Debug, Clone)]
pub struct ArgsSource {
    words: Vec<String>,
}

impl ArgsSource {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl WordSource for ArgsSource {
    fn words(&self) -> Result<Vec<String>> {
        Ok(self.words.clone())
    }
}

/// One word or phrase per line of a text file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn words(&self) -> Result<Vec<String>> {
        let data = fs::read(&self.path)?;
        let text = String::from_utf8(data).map_err(|e| {
            IsogramError::invalid_argument(format!(
                "{} is not valid UTF-8 (byte {})",
                self.path.display(),
                e.utf8_error().valid_up_to()
            ))
        })?;
        tracing::debug!("Read {} bytes from {}", text.len(), self.path.display());
        Ok(split_lines(text.lines().map(str::to_string)))
    }
}

/// Lines from any buffered reader, typically stdin. Drained on first use.
pub struct ReaderSource<R: BufRead> {
    reader: RefCell<R>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: RefCell::new(reader),
        }
    }
}

impl<R: BufRead> WordSource for ReaderSource<R> {
    fn words(&self) -> Result<Vec<String>> {
        let mut reader = self.reader.borrow_mut();
        let mut lines = Vec::new();
        for (index, line) in (&mut *reader).lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                std::io::ErrorKind::InvalidData => IsogramError::invalid_argument(format!(
                    "line {} is not valid UTF-8",
                    index + 1
                )),
                _ => IsogramError::IoError(e),
            })?;
            lines.push(line);
        }
        Ok(split_lines(lines.into_iter()))
    }
}

fn split_lines(lines: impl Iterator<Item = String>) -> Vec<String> {
    lines
        .map(|line| match line.strip_suffix('\r') {
            Some(stripped) => stripped.to_string(),
            None => line,
        })
        .filter(|line| !line.trim().is_empty())
        .collect()
}
