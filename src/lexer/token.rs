use serde::{Deserialize, Serialize};

/// A single lexeme read from the input
///
/// Serializes adjacently tagged, e.g. `{"type":"int","value":42}` or
/// `{"type":"left_paren"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// Integer literal
    Int(i32),
    /// Floating-point literal (single precision)
    Float(f32),
    /// String literal with escapes already decoded
    #[serde(rename = "string")]
    Str(String),
    /// Boolean literal, `#t` or `#f`
    #[serde(rename = "boolean")]
    Bool(bool),
    /// Any other bare word, kept verbatim
    Symbol(String),
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Quote mark (')
    Quote,
}

impl Token {
    /// Name of this token's kind, as used in the rendered form
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Int(_) => "int",
            Token::Float(_) => "float",
            Token::Str(_) => "string",
            Token::Bool(_) => "boolean",
            Token::Symbol(_) => "symbol",
            Token::LeftParen => "left_paren",
            Token::RightParen => "right_paren",
            Token::Quote => "quote",
        }
    }

    /// Check if token is a literal value (number, string or boolean)
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::Int(_) | Token::Float(_) | Token::Str(_) | Token::Bool(_)
        )
    }

    /// Check if token is punctuation with no payload
    pub fn is_punctuation(&self) -> bool {
        matches!(self, Token::LeftParen | Token::RightParen | Token::Quote)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "<Lexeme, type: {}", self.kind_name())?;
        match self {
            Token::Int(n) => write!(f, ", value = {}", n)?,
            // Debug keeps the fractional part: 3.0 rather than 3
            Token::Float(fl) => write!(f, ", value = {:?}", fl)?,
            Token::Str(s) | Token::Symbol(s) => write!(f, ", value = {}", s)?,
            Token::Bool(b) => write!(f, ", value = {}", b)?,
            Token::LeftParen | Token::RightParen | Token::Quote => {}
        }
        write!(f, ">")
    }
}
