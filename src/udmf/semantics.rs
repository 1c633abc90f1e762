//! Semantic analysis: raw tree nodes to typed scalars and blocks.
//!
//! This is the only place lexemes become values. Integer literals honor
//! all three source forms (decimal, leading-zero-as-decimal, hex), quoted
//! strings lose their quotes and backslash escapes, and bare keywords are
//! rejected with the verbatim token text.

use crate::map::{Block, BlockKind, MapDocument};
use crate::udmf::ast::{Assignment, GlobalExpr, RawValue, Spanned, TranslationUnit};
use crate::udmf::line_col;
use crate::value::Scalar;
use crate::{Error, Result};

/// Folds a raw translation unit into a [`MapDocument`].
///
/// Blocks are resolved through the typed block registry in source order;
/// top-level assignments accumulate into global metadata, last write wins
/// per key.
pub fn analyze(unit: TranslationUnit<'_>, source: &str) -> Result<MapDocument> {
    let mut document = MapDocument::new();
    for expr in unit.expressions {
        match expr {
            GlobalExpr::Assignment(assignment) => {
                let (name, value) = evaluate(assignment, source)?;
                document.set_metadata(name, value);
            }
            GlobalExpr::Block(raw) => {
                let mut block = Block::new(BlockKind::from_identifier(raw.name.node));
                for assignment in raw.assignments {
                    let (name, value) = evaluate(assignment, source)?;
                    block.set(name, value);
                }
                document.push_block(block);
            }
        }
    }
    Ok(document)
}

fn evaluate(assignment: Assignment<'_>, source: &str) -> Result<(String, Scalar)> {
    let value = scalar(&assignment.value, source)?;
    Ok((assignment.name.node.to_string(), value))
}

fn scalar(value: &Spanned<RawValue<'_>>, source: &str) -> Result<Scalar> {
    match value.node {
        RawValue::Integer(text) => text
            .parse::<i64>()
            .map(Scalar::Integer)
            .map_err(|_| out_of_range(text, value.span.start, source)),
        RawValue::HexInteger(text) => i64::from_str_radix(&text[2..], 16)
            .map(Scalar::Integer)
            .map_err(|_| out_of_range(text, value.span.start, source)),
        RawValue::Float(text) => text
            .parse::<f64>()
            .map(Scalar::Float)
            .map_err(|_| out_of_range(text, value.span.start, source)),
        RawValue::Boolean(b) => Ok(Scalar::Boolean(b)),
        RawValue::QuotedString(text) => Ok(Scalar::String(unescape(text))),
        RawValue::Keyword(text) => {
            let (line, column) = line_col(source, value.span.start);
            Err(Error::UnsupportedValue {
                token: text.to_string(),
                line,
                column,
            })
        }
    }
}

fn out_of_range(text: &str, offset: usize, source: &str) -> Error {
    let (line, column) = line_col(source, offset);
    Error::Syntax {
        line,
        column,
        message: format!("numeric literal {:?} out of range", text),
    }
}

/// Strips the surrounding quotes and resolves `\<char>` to `<char>`.
///
/// Escapes are stripped, not interpreted: `\n` is the letter `n`, not a
/// newline.
fn unescape(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    if !inner.contains('\\') {
        return inner.to_string();
    }
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // The lexer guarantees every backslash is followed by a char.
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::udmf::parse_document;

    #[test]
    fn test_integer_literal_forms() {
        let doc = parse_document("a = 0; b = -17; c = 007; d = 0x1F; e = +3;").unwrap();
        assert_eq!(doc.metadata("a"), Some(&Scalar::Integer(0)));
        assert_eq!(doc.metadata("b"), Some(&Scalar::Integer(-17)));
        assert_eq!(doc.metadata("c"), Some(&Scalar::Integer(7)));
        assert_eq!(doc.metadata("d"), Some(&Scalar::Integer(31)));
        assert_eq!(doc.metadata("e"), Some(&Scalar::Integer(3)));
    }

    #[test]
    fn test_float_literal_forms() {
        let doc = parse_document("a = 32.0; b = 3.; c = -1.5e2;").unwrap();
        assert_eq!(doc.metadata("a"), Some(&Scalar::Float(32.0)));
        assert_eq!(doc.metadata("b"), Some(&Scalar::Float(3.0)));
        assert_eq!(doc.metadata("c"), Some(&Scalar::Float(-150.0)));
    }

    #[test]
    fn test_string_escapes_are_stripped() {
        let doc = parse_document(r#"a = "he said \"hi\" \\ \n";"#).unwrap();
        assert_eq!(
            doc.metadata("a"),
            Some(&Scalar::String(r#"he said "hi" \ n"#.to_string()))
        );
    }

    #[test]
    fn test_keyword_value_is_unsupported() {
        let err = parse_document("thing { arg = SOMEVALUE; }").unwrap_err();
        match err {
            Error::UnsupportedValue { token, line, column } => {
                assert_eq!(token, "SOMEVALUE");
                assert_eq!((line, column), (1, 15));
            }
            other => panic!("expected UnsupportedValue, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_overflow_is_a_syntax_error() {
        let err = parse_document("a = 99999999999999999999;").unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_duplicate_attribute_last_value_first_position() {
        let doc = parse_document("thing { x = 1; y = 2; x = 3; }").unwrap();
        let block = &doc.blocks()[0];
        let attrs: Vec<_> = block
            .attributes()
            .map(|(name, value)| (name, value.clone()))
            .collect();
        assert_eq!(
            attrs,
            vec![
                ("x", Scalar::Integer(3)),
                ("y", Scalar::Integer(2)),
            ]
        );
    }

    #[test]
    fn test_duplicate_metadata_key_overwrites() {
        let doc = parse_document("ns = 1; ns = 2;").unwrap();
        assert_eq!(doc.metadata("ns"), Some(&Scalar::Integer(2)));
    }

    #[test]
    fn test_unknown_block_maps_to_generic() {
        let doc = parse_document("custom { foo = 1; }").unwrap();
        let block = &doc.blocks()[0];
        assert_eq!(block.kind(), &BlockKind::Generic("custom".to_string()));
        assert_eq!(block.get("foo"), Some(&Scalar::Integer(1)));
    }

    #[test]
    fn test_registry_is_case_sensitive() {
        let doc = parse_document("Thing { x = 1; }").unwrap();
        assert_eq!(
            doc.blocks()[0].kind(),
            &BlockKind::Generic("Thing".to_string())
        );
        assert_eq!(doc.things().count(), 0);
    }
}
