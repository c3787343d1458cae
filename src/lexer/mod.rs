//! Lexical analysis for uLisp
//!
//! Converts a line-oriented character stream into tokens, one at a time.

mod escape;
mod line_buffer;
mod sexpr_scanner;
mod token;

pub use escape::decode_escape;
pub use line_buffer::LineBuffer;
pub use sexpr_scanner::{classify_word, SExprScanner};
pub use token::Token;
