//! Recursive-descent parser from the token stream to the raw tree.

use std::ops::Range;

use logos::Logos;

use crate::udmf::ast::{Assignment, GlobalExpr, RawBlock, RawValue, Spanned, TranslationUnit};
use crate::udmf::lexer::Token;
use crate::udmf::line_col;
use crate::{Error, Result};

/// Parser state over a fully lexed token stream.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Lexes the whole source up front.
    ///
    /// Unrecognized input (a stray `'`, an unterminated string or comment)
    /// surfaces here as a positioned syntax error.
    pub fn new(source: &'a str) -> Result<Self> {
        let mut lexer = Token::lexer(source);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next() {
            match token {
                Ok(token) => tokens.push((token, lexer.span())),
                Err(()) => {
                    return Err(syntax_error(
                        source,
                        lexer.span().start,
                        format!("unrecognized token {:?}", lexer.slice()),
                    ));
                }
            }
        }
        Ok(Self {
            source,
            tokens,
            pos: 0,
        })
    }

    /// Parses a complete translation unit, consuming the entire input.
    pub fn parse(mut self) -> Result<TranslationUnit<'a>> {
        let mut expressions = Vec::new();
        while self.pos < self.tokens.len() {
            expressions.push(self.global_expr()?);
        }
        Ok(TranslationUnit { expressions })
    }

    fn global_expr(&mut self) -> Result<GlobalExpr<'a>> {
        let name = self.expect_identifier("block or assignment")?;
        match self.peek() {
            Some(Token::BraceOpen) => Ok(GlobalExpr::Block(self.block(name)?)),
            Some(Token::Assign) => Ok(GlobalExpr::Assignment(self.assignment(name)?)),
            _ => Err(self.error_here("expected '{' or '=' after identifier")),
        }
    }

    fn block(&mut self, name: Spanned<&'a str>) -> Result<RawBlock<'a>> {
        self.expect(Token::BraceOpen)?;
        let mut assignments = Vec::new();
        loop {
            match self.peek() {
                Some(Token::BraceClose) => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    let name = self.expect_identifier("attribute assignment or '}'")?;
                    assignments.push(self.assignment(name)?);
                }
                None => {
                    return Err(self.error_here(format!(
                        "unterminated block {:?}: expected '}}'",
                        name.node
                    )));
                }
            }
        }
        Ok(RawBlock { name, assignments })
    }

    fn assignment(&mut self, name: Spanned<&'a str>) -> Result<Assignment<'a>> {
        self.expect(Token::Assign)?;
        let value = self.value()?;
        self.expect(Token::Semicolon)?;
        Ok(Assignment { name, value })
    }

    fn value(&mut self) -> Result<Spanned<RawValue<'a>>> {
        let (token, span) = match self.advance() {
            Some(entry) => entry,
            None => return Err(self.error_here("expected value")),
        };
        let text = &self.source[span.clone()];
        let node = match token {
            Token::Float => RawValue::Float(text),
            Token::Integer => RawValue::Integer(text),
            Token::HexInteger => RawValue::HexInteger(text),
            Token::QuotedString => RawValue::QuotedString(text),
            // The boolean literals lex as identifiers; any other identifier
            // in value position is a bare keyword.
            Token::Identifier => match text {
                "true" => RawValue::Boolean(true),
                "false" => RawValue::Boolean(false),
                _ => RawValue::Keyword(text),
            },
            Token::Keyword => RawValue::Keyword(text),
            other => {
                return Err(syntax_error(
                    self.source,
                    span.start,
                    format!("expected value, found {}", other.describe()),
                ));
            }
        };
        Ok(Spanned::new(node, span))
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(token, _)| *token)
    }

    fn advance(&mut self) -> Option<(Token, Range<usize>)> {
        let entry = self.tokens.get(self.pos).cloned();
        if entry.is_some() {
            self.pos += 1;
        }
        entry
    }

    fn expect(&mut self, expected: Token) -> Result<Range<usize>> {
        match self.advance() {
            Some((token, span)) if token == expected => Ok(span),
            Some((token, span)) => Err(syntax_error(
                self.source,
                span.start,
                format!("expected {}, found {}", expected.describe(), token.describe()),
            )),
            None => Err(self.error_here(format!(
                "expected {}, found end of input",
                expected.describe()
            ))),
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<Spanned<&'a str>> {
        match self.advance() {
            Some((Token::Identifier, span)) => {
                Ok(Spanned::new(&self.source[span.clone()], span))
            }
            Some((token, span)) => Err(syntax_error(
                self.source,
                span.start,
                format!("expected {}, found {}", what, token.describe()),
            )),
            None => Err(self.error_here(format!("expected {}, found end of input", what))),
        }
    }

    /// Builds a syntax error at the current token, or at end of input.
    fn error_here(&self, message: impl Into<String>) -> Error {
        let offset = self
            .tokens
            .get(self.pos)
            .map(|(_, span)| span.start)
            .unwrap_or(self.source.len());
        syntax_error(self.source, offset, message)
    }
}

fn syntax_error(source: &str, offset: usize, message: impl Into<String>) -> Error {
    let (line, column) = line_col(source, offset);
    Error::Syntax {
        line,
        column,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<TranslationUnit<'_>> {
        Parser::new(source)?.parse()
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(parse("").unwrap().expressions.is_empty());
        assert!(parse("  // just a comment\n").unwrap().expressions.is_empty());
    }

    #[test]
    fn test_global_assignment_and_block() {
        let unit = parse("namespace = \"doom\";\nthing { x = 1; }\n").unwrap();
        assert_eq!(unit.expressions.len(), 2);
        match &unit.expressions[0] {
            GlobalExpr::Assignment(a) => {
                assert_eq!(a.name.node, "namespace");
                assert_eq!(a.value.node, RawValue::QuotedString("\"doom\""));
            }
            other => panic!("expected assignment, got {:?}", other),
        }
        match &unit.expressions[1] {
            GlobalExpr::Block(b) => {
                assert_eq!(b.name.node, "thing");
                assert_eq!(b.assignments.len(), 1);
                assert_eq!(b.assignments[0].value.node, RawValue::Integer("1"));
            }
            other => panic!("expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_boolean_and_keyword_values() {
        let unit = parse("a = true; b = false; c = SOMEVALUE;").unwrap();
        let values: Vec<_> = unit
            .expressions
            .iter()
            .map(|e| match e {
                GlobalExpr::Assignment(a) => a.value.node,
                other => panic!("expected assignment, got {:?}", other),
            })
            .collect();
        assert_eq!(
            values,
            vec![
                RawValue::Boolean(true),
                RawValue::Boolean(false),
                RawValue::Keyword("SOMEVALUE"),
            ]
        );
    }

    #[test]
    fn test_trailing_garbage_is_rejected() {
        let err = parse("a = 1; }").unwrap_err();
        match err {
            Error::Syntax { line, column, .. } => {
                assert_eq!((line, column), (1, 8));
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_semicolon_is_rejected() {
        let err = parse("a = 1").unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }));
        assert!(err.to_string().contains("';'"));
    }

    #[test]
    fn test_unterminated_block_is_rejected() {
        let err = parse("thing { x = 1;").unwrap_err();
        assert!(err.to_string().contains("thing"));
    }

    #[test]
    fn test_error_position_is_line_accurate() {
        let err = parse("a = 1;\nb = ;\n").unwrap_err();
        match err {
            Error::Syntax { line, column, .. } => {
                assert_eq!((line, column), (2, 5));
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_embedded_equals_splits_the_value() {
        // The keyword run stops at `=`, so the error lands on the second
        // `=` rather than reporting `b=c` as an unsupported value.
        let err = parse("a = b=c;").unwrap_err();
        match err {
            Error::Syntax { line, column, .. } => {
                assert_eq!((line, column), (1, 6));
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_token_is_rejected() {
        let err = parse("a = 'x';").unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }));
    }
}
