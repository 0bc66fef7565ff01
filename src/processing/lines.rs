//! Per-line text transforms.
//!
//! [`line_transform`] adapts any iterator of fallible lines (typically a
//! [`crate::ingestion::LineSource`]) into an iterator of transformed lines. It yields exactly one
//! output per input line, in order, and stops for good after the first error.

use serde::{Deserialize, Serialize};

/// Which whitespace to strip from each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimMode {
    /// Strip leading and trailing whitespace (default).
    #[default]
    Both,
    /// Strip leading whitespace only.
    Leading,
    /// Strip trailing whitespace only.
    Trailing,
    /// Leave lines as read.
    None,
}

impl TrimMode {
    /// Apply this trim mode to `line`.
    pub fn apply<'a>(&self, line: &'a str) -> &'a str {
        match self {
            Self::Both => line.trim(),
            Self::Leading => line.trim_start(),
            Self::Trailing => line.trim_end(),
            Self::None => line,
        }
    }

    /// Owned-string transform suitable for [`line_transform`].
    pub fn transform(self) -> impl FnMut(String) -> String {
        move |line| match self {
            Self::None => line,
            _ => self.apply(&line).to_owned(),
        }
    }
}

/// Lazy iterator returned by [`line_transform`].
#[derive(Debug)]
pub struct LineTransform<I, F> {
    source: I,
    transform: F,
    failed: bool,
}

impl<I, F, E> Iterator for LineTransform<I, F>
where
    I: Iterator<Item = Result<String, E>>,
    F: FnMut(String) -> String,
{
    type Item = Result<String, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.source.next()? {
            Ok(line) => Some(Ok((self.transform)(line))),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            let (_, upper) = self.source.size_hint();
            (0, upper)
        }
    }
}

impl<I, F, E> std::iter::FusedIterator for LineTransform<I, F>
where
    I: std::iter::FusedIterator<Item = Result<String, E>>,
    F: FnMut(String) -> String,
{
}

/// Apply `transform` to every line produced by `source`, lazily and in order.
///
/// Errors from `source` are passed through unchanged; after the first error the iterator yields
/// nothing more.
pub fn line_transform<I, F, E>(source: I, transform: F) -> LineTransform<I::IntoIter, F>
where
    I: IntoIterator<Item = Result<String, E>>,
    F: FnMut(String) -> String,
{
    LineTransform {
        source: source.into_iter(),
        transform,
        failed: false,
    }
}

/// Convenience for `line_transform(source, TrimMode::Both.transform())`.
pub fn trim_lines<I, E>(source: I) -> LineTransform<I::IntoIter, impl FnMut(String) -> String>
where
    I: IntoIterator<Item = Result<String, E>>,
{
    line_transform(source, TrimMode::Both.transform())
}
