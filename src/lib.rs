//! # uLisp - a streaming S-expression scanner
//!
//! Turns uLisp source text into a stream of typed tokens: integers, floats,
//! strings, booleans, symbols, parentheses and quote marks. Input is read one
//! physical line at a time, so the scanner works equally well over a file, a
//! pipe or standard input.
//!
//! ## Quick Start
//!
//! ```rust
//! use ulisp::{SExprScanner, Token};
//!
//! # fn main() -> ulisp::Result<()> {
//! let mut scanner = SExprScanner::new(r#"(+ 1 2.5 #t "hi")"#);
//! let tokens = scanner.scan_tokens()?;
//!
//! assert_eq!(tokens[0], Token::LeftParen);
//! assert_eq!(tokens[1], Token::Symbol("+".to_string()));
//! assert_eq!(tokens[2], Token::Int(1));
//! assert_eq!(tokens[3], Token::Float(2.5));
//! assert_eq!(tokens[4], Token::Bool(true));
//! assert_eq!(tokens[5], Token::Str("hi".to_string()));
//! assert_eq!(tokens[6], Token::RightParen);
//! # Ok(())
//! # }
//! ```
//!
//! ### Streaming
//!
//! Any [`std::io::BufRead`] can feed the scanner, and tokens are produced on
//! demand:
//!
//! ```rust
//! use std::io::Cursor;
//! use ulisp::{SExprScanner, Token};
//!
//! # fn main() -> ulisp::Result<()> {
//! let input = Cursor::new("; greeting\n'(hello \"world\")\n");
//! let mut scanner = SExprScanner::from_reader(input);
//!
//! while let Some(token) = scanner.next_token()? {
//!     println!("{}", token);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Lexical Rules
//!
//! - `;` starts a comment running to the end of the line
//! - `(`, `)` and `'` are single-character tokens
//! - `"..."` is a string; escapes are `\\ \" \b \f \n \r \t \v`
//! - any other run of characters up to whitespace, `(`, `)`, `'` or `;` is a
//!   word: `#t`/`#f` are booleans, then integers, then floats, and anything
//!   else is a symbol
//!
//! ## Error Handling
//!
//! Errors are returned, never fatal. After a lexical error the scanner can
//! pick up again at the next line:
//!
//! ```rust
//! use ulisp::{Error, SExprScanner, Token};
//!
//! let mut scanner = SExprScanner::new("\"bad \\q\"\n(ok)");
//!
//! match scanner.next_token() {
//!     Err(Error::UnsupportedEscape { escape, .. }) => assert_eq!(escape, 'q'),
//!     other => panic!("expected an escape error, got {:?}", other),
//! }
//!
//! scanner.skip_line();
//! assert_eq!(scanner.next_token().unwrap(), Some(Token::LeftParen));
//! ```

/// Version of the uLisp scanner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{SExprScanner, Token};
