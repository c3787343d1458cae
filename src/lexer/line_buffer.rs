use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::Result;

/// Character source that reads its input one physical line at a time
///
/// Every line is followed by a `\n`, whatever terminator (if any) the source
/// used, so an empty line still yields exactly one character.
pub struct LineBuffer<R> {
    /// Underlying line source
    source: R,
    /// Unread characters of the current line, plus at most one pushed back
    chars: VecDeque<char>,
    /// Set once the source reports end of input
    closed: bool,
    /// Physical lines fetched so far (1-indexed once the first line is read)
    line: usize,
}

impl<R: BufRead> LineBuffer<R> {
    /// Creates an empty buffer; nothing is read until the first `next_char`
    pub fn new(source: R) -> Self {
        LineBuffer {
            source,
            chars: VecDeque::new(),
            closed: false,
            line: 0,
        }
    }

    /// Returns the next character, or `None` once the source is exhausted
    pub fn next_char(&mut self) -> Result<Option<char>> {
        if self.chars.is_empty() && !self.closed {
            self.fetch_line()?;
        }
        Ok(self.chars.pop_front())
    }

    /// Returns `c` to the front of the buffer
    ///
    /// Only one character of pushback is supported between reads.
    pub fn push_back(&mut self, c: char) {
        self.chars.push_front(c);
    }

    /// Drops the rest of the current line
    pub fn discard_line(&mut self) {
        self.chars.clear();
    }

    /// Number of physical lines read so far
    pub fn line(&self) -> usize {
        self.line
    }

    /// True once the source is exhausted and every buffered character consumed
    pub fn is_exhausted(&self) -> bool {
        self.closed && self.chars.is_empty()
    }

    fn fetch_line(&mut self) -> Result<()> {
        let mut raw = String::new();
        let read = match self.source.read_line(&mut raw) {
            Ok(read) => read,
            Err(err) => {
                // A failed source will not recover; stop reading from it
                self.closed = true;
                return Err(err.into());
            }
        };

        if read == 0 {
            tracing::debug!(lines = self.line, "line source exhausted");
            self.closed = true;
            return Ok(());
        }

        if raw.ends_with('\n') {
            raw.pop();
            if raw.ends_with('\r') {
                raw.pop();
            }
        }

        self.line += 1;
        tracing::debug!(line = self.line, len = raw.len(), "fetched line");

        self.chars.clear();
        self.chars.extend(raw.chars());
        self.chars.push_back('\n');
        Ok(())
    }
}
