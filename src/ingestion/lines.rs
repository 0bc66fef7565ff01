//! Line-by-line text sources.
//!
//! A [`LineSource`] owns its reader for as long as it lives; the file handle is released when the
//! source is dropped, whether the read finished, failed, or was abandoned part way.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{ProcessingError, ProcessingResult};
use crate::processing::{line_transform, TrimMode};

/// Forward-only, non-restartable sequence of text lines.
///
/// Yields `Ok(line)` without its line terminator for each line read. Only `\n` and `\r\n` end a
/// line; a lone `\r` (classic Mac line ending) stays inside the line. A read failure (I/O error or
/// invalid UTF-8) is yielded once as [`ProcessingError::ResourceUnavailable`] carrying the 1-based
/// line number, after which the source is exhausted.
#[derive(Debug)]
pub struct LineSource<R> {
    label: PathBuf,
    reader: R,
    lines_read: usize,
    done: bool,
}

impl LineSource<BufReader<File>> {
    /// Open `path` for line-by-line reading.
    pub fn open(path: impl AsRef<Path>) -> ProcessingResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ProcessingError::unavailable(path, None, e))?;
        tracing::debug!(path = %path.display(), "opened line source");
        Ok(Self::from_reader(path, BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    /// Wrap an already-open buffered reader. `label` is used in error messages only.
    pub fn from_reader(label: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            label: label.into(),
            reader,
            lines_read: 0,
            done: false,
        }
    }

    /// Path or label this source reads from.
    pub fn label(&self) -> &Path {
        &self.label
    }

    /// Number of lines successfully read so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = ProcessingResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if buf.ends_with('\n') {
                    buf.pop();
                    if buf.ends_with('\r') {
                        buf.pop();
                    }
                }
                self.lines_read += 1;
                Some(Ok(buf))
            }
            Err(e) => {
                self.done = true;
                Some(Err(ProcessingError::unavailable(
                    self.label.clone(),
                    Some(self.lines_read + 1),
                    e,
                )))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineSource<R> {}

/// Read every line of `path`, applying `transform` to each.
///
/// Returns all transformed lines, or the first error; never a partial result.
pub fn read_transformed_lines<F>(path: impl AsRef<Path>, transform: F) -> ProcessingResult<Vec<String>>
where
    F: FnMut(String) -> String,
{
    let source = LineSource::open(path)?;
    let lines = line_transform(source, transform).collect::<ProcessingResult<Vec<_>>>()?;
    tracing::debug!(lines = lines.len(), "read transformed lines");
    Ok(lines)
}

/// Read every line of `path` with leading and trailing whitespace removed.
pub fn read_trimmed_lines(path: impl AsRef<Path>) -> ProcessingResult<Vec<String>> {
    read_transformed_lines(path, TrimMode::Both.transform())
}
