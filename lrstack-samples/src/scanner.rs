//! # Scanner
//!
//! Token source shared by the samples. It is built on the [`logos`] crate:
//! [`Lexeme`] declares the recognised punctuation and integer literals,
//! whitespace is skipped, and [`Scanner`] turns the raw stream into
//! `Result<Lexeme, SampleError>` items.
//!
//! The scanner knows nothing about grammars. Each sample maps lexemes onto
//! its own `TokenID` and rejects the ones it does not declare.

use crate::SampleError;
use logos::Logos;
use std::ops::Range;

/// Lexemes recognised in sample input.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Lexeme {
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    /// Decimal integer literal. Literals that do not fit an `i64` are
    /// reported as scan errors.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Number(i64),
}

impl Lexeme {
    pub fn label(&self) -> &'static str {
        match self {
            Lexeme::Plus => "'+'",
            Lexeme::Minus => "'-'",
            Lexeme::Star => "'*'",
            Lexeme::Slash => "'/'",
            Lexeme::LParen => "'('",
            Lexeme::RParen => "')'",
            Lexeme::Comma => "','",
            Lexeme::Number(_) => "number",
        }
    }
}

/// Iterator over the lexemes of a source string.
pub struct Scanner<'source> {
    inner: logos::Lexer<'source, Lexeme>,
}

impl<'source> Scanner<'source> {
    pub fn new(input: &'source str) -> Self {
        Self {
            inner: Lexeme::lexer(input),
        }
    }

    /// Byte range of the most recently returned lexeme.
    pub fn span(&self) -> Range<usize> {
        self.inner.span()
    }

    /// Scans the whole input.
    pub fn tokenize_all(input: &'source str) -> Result<Vec<Lexeme>, SampleError> {
        Scanner::new(input).collect()
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Lexeme, SampleError>;

    fn next(&mut self) -> Option<Self::Item> {
        let lexeme = self.inner.next()?;
        Some(lexeme.map_err(|()| {
            let err = SampleError::Scan {
                offset: self.inner.span().start,
                text: self.inner.slice().into(),
            };
            log::debug!("{}", err);
            err
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_numbers() {
        let lexemes = Scanner::tokenize_all(" (12, 3)\n* + - /").unwrap();
        assert_eq!(
            lexemes,
            vec![
                Lexeme::LParen,
                Lexeme::Number(12),
                Lexeme::Comma,
                Lexeme::Number(3),
                Lexeme::RParen,
                Lexeme::Star,
                Lexeme::Plus,
                Lexeme::Minus,
                Lexeme::Slash,
            ]
        );
    }

    #[test]
    fn empty_input_has_no_lexemes() {
        assert_eq!(Scanner::tokenize_all("  \t").unwrap(), vec![]);
    }

    #[test]
    fn unknown_character_is_a_scan_error() {
        let err = Scanner::tokenize_all("1 + @").unwrap_err();
        assert_eq!(
            err,
            SampleError::Scan {
                offset: 4,
                text: "@".into()
            }
        );
    }

    #[test]
    fn oversized_literal_is_a_scan_error() {
        let err = Scanner::tokenize_all("99999999999999999999").unwrap_err();
        assert!(matches!(err, SampleError::Scan { offset: 0, .. }));
    }

    #[test]
    fn span_tracks_the_last_lexeme() {
        let mut scanner = Scanner::new("7 +  42");
        scanner.next();
        scanner.next();
        assert_eq!(scanner.next(), Some(Ok(Lexeme::Number(42))));
        assert_eq!(scanner.span(), 5..7);
    }
}
