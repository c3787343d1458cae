use std::io::{BufRead, Cursor};
use std::iter::FusedIterator;

use regex::Regex;

use super::escape::decode_escape;
use super::line_buffer::LineBuffer;
use super::token::Token;
use crate::error::{Error, Result};

lazy_static::lazy_static! {
    static ref INTEGER_RE: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    static ref FLOAT_RE: Regex =
        Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)(e[+-][0-9]+)?$").unwrap();
}

/// Streaming scanner for uLisp S-expression source
///
/// Tokens are produced one at a time, on demand, from a line-oriented source.
/// The scanner owns its source and is not restartable: once end of input is
/// reached every further call reports end of input again.
pub struct SExprScanner<R> {
    /// Characters of the current line, with one level of pushback
    buffer: LineBuffer<R>,
}

impl SExprScanner<Cursor<String>> {
    /// Creates a new S-expression scanner over in-memory source code
    pub fn new(source: &str) -> Self {
        SExprScanner::from_reader(Cursor::new(source.to_string()))
    }
}

impl<R: BufRead> SExprScanner<R> {
    /// Creates a scanner reading lines from `reader`
    pub fn from_reader(reader: R) -> Self {
        SExprScanner {
            buffer: LineBuffer::new(reader),
        }
    }

    /// Reads the next token
    ///
    /// Returns `Ok(None)` at end of input. A lexical error leaves the scanner
    /// usable; call [`skip_line`](Self::skip_line) to resume at the next line.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            let c = match self.skip_whitespace()? {
                Some(c) => c,
                None => return Ok(None),
            };

            let token = match c {
                // Comments run to the end of the physical line
                ';' => {
                    self.skip_line_comment();
                    continue;
                }

                '(' => Token::LeftParen,
                ')' => Token::RightParen,
                '\'' => Token::Quote,

                '"' => self.scan_string()?,

                _ => {
                    self.buffer.push_back(c);
                    self.scan_word()?
                }
            };

            tracing::trace!(line = self.buffer.line(), %token, "scanned token");
            return Ok(Some(token));
        }
    }

    /// Scans all remaining tokens, stopping at the first error
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        self.by_ref().collect()
    }

    /// Discards the rest of the current line
    ///
    /// Used to resynchronize after an error; scanning resumes at the start of
    /// the next physical line.
    pub fn skip_line(&mut self) {
        tracing::debug!(line = self.buffer.line(), "skipping rest of line");
        self.buffer.discard_line();
    }

    /// Current line number (1-indexed, 0 before anything has been read)
    pub fn line(&self) -> usize {
        self.buffer.line()
    }

    fn skip_whitespace(&mut self) -> Result<Option<char>> {
        loop {
            match self.buffer.next_char()? {
                Some(c) if is_whitespace(c) => {}
                other => return Ok(other),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        tracing::debug!(line = self.buffer.line(), "skipping comment");
        self.buffer.discard_line();
    }

    fn scan_string(&mut self) -> Result<Token> {
        let mut value = String::new();

        loop {
            match self.buffer.next_char()? {
                None => {
                    return Err(Error::UnterminatedString {
                        line: self.buffer.line(),
                    })
                }
                Some('"') => break,
                Some('\\') => {
                    let code = self.buffer.next_char()?;
                    value.push(decode_escape(code, self.buffer.line())?);
                }
                Some(c) => value.push(c),
            }
        }

        Ok(Token::Str(value))
    }

    fn scan_word(&mut self) -> Result<Token> {
        let mut word = String::new();

        while let Some(c) = self.buffer.next_char()? {
            if is_break(c) {
                self.buffer.push_back(c);
                break;
            }
            word.push(c);
        }

        classify_word(word, self.buffer.line())
    }
}

impl<R: BufRead> Iterator for SExprScanner<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<R: BufRead> FusedIterator for SExprScanner<R> {}

/// Classifies a bare word as a boolean, integer, float or symbol
///
/// Rules are tried in that order and the first match wins. Numeric words
/// that match a pattern but do not fit `i32`, or are not finite as `f32`,
/// are reported as [`Error::NumberOutOfRange`].
pub fn classify_word(word: String, line: usize) -> Result<Token> {
    match word.as_str() {
        "#t" => return Ok(Token::Bool(true)),
        "#f" => return Ok(Token::Bool(false)),
        _ => {}
    }

    if INTEGER_RE.is_match(&word) {
        return match word.parse::<i32>() {
            Ok(n) => Ok(Token::Int(n)),
            Err(_) => Err(Error::NumberOutOfRange {
                literal: word,
                line,
            }),
        };
    }

    if FLOAT_RE.is_match(&word) {
        return match word.parse::<f32>() {
            Ok(f) if f.is_finite() => Ok(Token::Float(f)),
            _ => Err(Error::NumberOutOfRange {
                literal: word,
                line,
            }),
        };
    }

    Ok(Token::Symbol(word))
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\u{0C}' | '\n' | '\r' | '\t' | '\u{0B}')
}

fn is_break(c: char) -> bool {
    is_whitespace(c) || matches!(c, '(' | ')' | '\'' | ';')
}
