//! Token layer of the UDMF grammar.
//!
//! The token definitions are compiled once by the `logos` derive into
//! static match tables; there is no per-parse grammar construction.

use logos::Logos;

/// A UDMF token.
///
/// Lexing is maximal-munch; the explicit priorities break equal-length
/// ties so that literal forms always win over the catch-all [`Keyword`]
/// run and a lexeme containing a decimal point is a float, never an
/// integer.
///
/// One deviation from the published keyword run: `=` is excluded from
/// [`Keyword`] so that unspaced input like `x=5;` tokenizes as an
/// assignment. A keyword run containing `=` (as in `a = b=c;`) therefore
/// splits at the `=` and fails in the parser with a syntax error at the
/// embedded `=`, instead of reporting the whole run as an unsupported
/// value. Keyword values are rejected in the semantic layer either way,
/// so no accepted input is affected.
///
/// [`Keyword`]: Token::Keyword
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub enum Token {
    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("=")]
    Assign,

    #[token(";")]
    Semicolon,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", priority = 5)]
    Identifier,

    /// Decimal integer: `0`, signed non-zero, or leading-zero form.
    /// Leading-zero literals are decimal, not octal.
    #[regex(r"[+-]?[0-9]+", priority = 6)]
    Integer,

    #[regex(r"0x[0-9A-Fa-f]+", priority = 7)]
    HexInteger,

    #[regex(r"[+-]?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", priority = 8)]
    Float,

    #[regex(r#""([^"\\]|\\.)*""#)]
    QuotedString,

    /// Catch-all run of characters with no other meaning.
    #[regex(r#"[^{}();"'=\s]+"#, priority = 1)]
    Keyword,
}

impl Token {
    /// A short description for error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::BraceOpen => "'{'",
            Self::BraceClose => "'}'",
            Self::Assign => "'='",
            Self::Semicolon => "';'",
            Self::Identifier => "identifier",
            Self::Integer => "integer literal",
            Self::HexInteger => "integer literal",
            Self::Float => "float literal",
            Self::QuotedString => "quoted string",
            Self::Keyword => "keyword",
        }
    }
}
