//! Raw spanned parse tree, prior to semantic analysis.
//!
//! Leaves borrow their lexemes from the source text; nothing is converted
//! or validated at this stage beyond grammar shape.

use std::ops::Range;

/// A tree node together with its byte span in the source text.
#[derive(Debug, Clone)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Range<usize>,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Range<usize>) -> Self {
        Self { node, span }
    }
}

/// A value lexeme, still in source form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    /// Decimal integer literal (`0`, signed non-zero, or leading-zero).
    Integer(&'a str),
    /// Hexadecimal integer literal, including the `0x` prefix.
    HexInteger(&'a str),
    /// Float literal.
    Float(&'a str),
    /// Boolean literal.
    Boolean(bool),
    /// String literal, including the surrounding quotes, escapes intact.
    QuotedString(&'a str),
    /// A bare keyword. Carried through so the semantic layer can reject it
    /// with the verbatim token text.
    Keyword(&'a str),
}

/// `identifier '=' value ';'`
#[derive(Debug, Clone)]
pub struct Assignment<'a> {
    pub name: Spanned<&'a str>,
    pub value: Spanned<RawValue<'a>>,
}

/// `identifier '{' { assignment_expr } '}'`
#[derive(Debug, Clone)]
pub struct RawBlock<'a> {
    pub name: Spanned<&'a str>,
    pub assignments: Vec<Assignment<'a>>,
}

/// A top-level expression: either a block or a global assignment.
#[derive(Debug, Clone)]
pub enum GlobalExpr<'a> {
    Assignment(Assignment<'a>),
    Block(RawBlock<'a>),
}

/// The whole parsed source text.
#[derive(Debug, Clone)]
pub struct TranslationUnit<'a> {
    pub expressions: Vec<GlobalExpr<'a>>,
}
