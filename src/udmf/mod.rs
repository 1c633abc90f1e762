//! UDMF text parsing.
//!
//! The Universal Doom Map Format is a brace-delimited, line-oriented text
//! format. A translation unit is a sequence of top-level assignments and
//! typed blocks:
//!
//! ```text
//! translation_unit = { global_expr } EOF
//! global_expr      = block | assignment_expr
//! block            = identifier '{' { assignment_expr } '}'
//! assignment_expr  = identifier '=' value ';'
//! identifier       = [A-Za-z_][A-Za-z0-9_]*
//! value            = float | integer | quoted_string | boolean | keyword
//! integer          = '0' | [+-]?[1-9][0-9]* | 0[0-9]+ | 0x[0-9A-Fa-f]+
//! float            = [+-]?[0-9]+ '.' [0-9]* ([eE][+-]?[0-9]+)?
//! boolean          = 'true' | 'false'
//! quoted_string    = '"' (char-except-quote-or-backslash | '\' any-char)* '"'
//! keyword          = any run of characters excluding { } ( ) ; " ' and whitespace
//! ```
//!
//! `//` line comments and `/* */` block comments are skipped. Value
//! alternatives are tried in grammar order, so a lexeme with a decimal
//! point is always a float and never an integer. Bare `keyword` values are
//! part of the grammar but carry no supported meaning; they are rejected
//! during semantic analysis with [`Error::UnsupportedValue`].
//!
//! The pipeline is lexer → raw spanned tree → semantic analysis, producing
//! a [`MapDocument`]. Parsing is a single blocking pass over the complete
//! text; the whole input must be consumed, and any failure aborts with a
//! positioned error instead of a partial document.
//!
//! [`Error::UnsupportedValue`]: crate::Error::UnsupportedValue
//! [`MapDocument`]: crate::map::MapDocument

mod ast;
mod lexer;
mod parser;
mod semantics;

use crate::Result;
use crate::map::MapDocument;

/// Parses a complete UDMF translation unit into a [`MapDocument`].
///
/// Typed and generic blocks land in the document's block sequence in
/// source order; top-level assignments land in the global metadata map.
///
/// # Example
///
/// ```rust
/// let doc = textmap::udmf::parse_document(
///     "namespace = \"doom\";\nthing { x = 32.0; y = 32.0; type = 1; }\n",
/// )?;
/// assert_eq!(doc.things().count(), 1);
/// # Ok::<(), textmap::Error>(())
/// ```
pub fn parse_document(source: &str) -> Result<MapDocument> {
    let unit = parser::Parser::new(source)?.parse()?;
    semantics::analyze(unit, source)
}

/// Converts a byte offset into 1-based line and column numbers.
pub(crate) fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let prefix = &source[..offset.min(source.len())];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
    (line, offset - line_start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_is_one_based() {
        let src = "a = 1;\nb = 2;\n";
        assert_eq!(line_col(src, 0), (1, 1));
        assert_eq!(line_col(src, 4), (1, 5));
        assert_eq!(line_col(src, 7), (2, 1));
        assert_eq!(line_col(src, 11), (2, 5));
    }
}
