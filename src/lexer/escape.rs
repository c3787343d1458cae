//! Backslash escapes inside string literals

use crate::error::{Error, Result};

/// Decodes the character that followed a backslash
///
/// `code` is `None` when the input ended right after the backslash.
/// `line` is only used for error reporting.
pub fn decode_escape(code: Option<char>, line: usize) -> Result<char> {
    match code {
        None => Err(Error::UnterminatedString { line }),
        Some('\\') => Ok('\\'),
        Some('"') => Ok('"'),
        Some('b') => Ok('\u{08}'),
        Some('f') => Ok('\u{0C}'),
        Some('n') => Ok('\n'),
        Some('r') => Ok('\r'),
        Some('t') => Ok('\t'),
        Some('v') => Ok('\u{0B}'),
        Some(escape) => Err(Error::UnsupportedEscape { escape, line }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_escapes() {
        let cases = [
            ('\\', '\\'),
            ('"', '"'),
            ('b', '\u{08}'),
            ('f', '\u{0C}'),
            ('n', '\n'),
            ('r', '\r'),
            ('t', '\t'),
            ('v', '\u{0B}'),
        ];
        for (code, expected) in cases {
            assert_eq!(decode_escape(Some(code), 1).unwrap(), expected);
        }
    }

    #[test]
    fn test_eof_after_backslash() {
        assert_eq!(
            decode_escape(None, 4),
            Err(Error::UnterminatedString { line: 4 })
        );
    }

    #[test]
    fn test_unknown_escape() {
        assert_eq!(
            decode_escape(Some('q'), 2),
            Err(Error::UnsupportedEscape {
                escape: 'q',
                line: 2
            })
        );
        // Single quotes are not escapable either
        assert!(decode_escape(Some('\''), 1).is_err());
    }
}
