//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry points.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: variable and function declarations, type annotations
//! - `statements`: statement dispatch, blocks and `return`
//! - `expressions`: expressions with one routine per precedence level
//!
//! The parser holds exactly two tokens, `current` and `peek`, and pulls the
//! next one from its [`Scanner`] each time it advances.
//!
//! # Error model
//!
//! Every parse routine returns `Result<_, ParseError>` and aborts on the first
//! unexpected token. [`Parser::parse_program`] turns that into truncation: it
//! keeps the statements parsed before the failure and records the error in
//! [`Parser::last_error`]. [`Parser::try_parse_program`] returns the error.

use crate::parser::ast::*;
use crate::parser::lexer::{Scanner, Token, TokenKind};
use thiserror::Error;

/// What went wrong while parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },

    #[error("expected a statement, found {found}")]
    UnexpectedStatement { found: String },

    #[error("unrecognized character '{0}'")]
    IllegalCharacter(char),
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at {location}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: SourceLocation,
}

/// Recursive descent parser for sild source
pub struct Parser {
    scanner: Scanner,
    pub(crate) current: Token,
    pub(crate) peek: Token,
    last_error: Option<ParseError>,
}

impl Parser {
    /// Create a parser over a permissive scanner.
    pub fn new(source: &str) -> Self {
        Self::from_scanner(Scanner::new(source))
    }

    /// Create a parser whose scanner reports unrecognized characters.
    pub fn strict(source: &str) -> Self {
        Self::from_scanner(Scanner::new(source).with_strict(true))
    }

    pub fn from_scanner(mut scanner: Scanner) -> Self {
        let current = scanner.next_token();
        let peek = scanner.next_token();
        Self {
            scanner,
            current,
            peek,
            last_error: None,
        }
    }

    /// Parse the entire program, stopping silently at the first syntax error.
    ///
    /// The returned program holds every statement parsed before the error.
    /// The error itself is available from [`Parser::last_error`].
    pub fn parse_program(&mut self) -> Program {
        let (program, error) = self.parse_until_error();

        if let Some(err) = &error {
            log::warn!(
                "{}; keeping {} statement(s) parsed before it",
                err,
                program.statements.len()
            );
        }
        self.last_error = error;

        program
    }

    /// Parse the entire program, failing on the first syntax error.
    pub fn try_parse_program(&mut self) -> Result<Program, ParseError> {
        match self.parse_until_error() {
            (program, None) => Ok(program),
            (_, Some(err)) => Err(err),
        }
    }

    /// The error that stopped the last [`Parser::parse_program`] call, if any
    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    fn parse_until_error(&mut self) -> (Program, Option<ParseError>) {
        let mut program = Program::new();

        while !self.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => {
                    log::debug!("parsed statement at {}: {}", stmt.location(), stmt);
                    program.statements.push(stmt);
                }
                Err(err) => return (program, Some(err)),
            }
        }

        (program, None)
    }

    // ===== Helper methods =====

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Move `peek` into `current`, pull a new `peek`, and return the token
    /// that was current.
    pub(crate) fn advance(&mut self) -> Token {
        let next = self.scanner.next_token();
        let peek = std::mem::replace(&mut self.peek, next);
        std::mem::replace(&mut self.current, peek)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.current.location
    }

    /// Build an error for the current token, which was not `expected`.
    pub(crate) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let kind = match self.illegal_character() {
            Some(ch) => ParseErrorKind::IllegalCharacter(ch),
            None => ParseErrorKind::Expected {
                expected: expected.into(),
                found: self.current.to_string(),
            },
        };
        self.error(kind)
    }

    pub(crate) fn unexpected_statement(&self) -> ParseError {
        let kind = match self.illegal_character() {
            Some(ch) => ParseErrorKind::IllegalCharacter(ch),
            None => ParseErrorKind::UnexpectedStatement {
                found: self.current.to_string(),
            },
        };
        self.error(kind)
    }

    fn illegal_character(&self) -> Option<char> {
        if self.check(TokenKind::Illegal) {
            self.current.literal.chars().next()
        } else {
            None
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            location: self.current_location(),
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        ctx: &str,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(format!("{kind} {ctx}")))
        }
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        if self.check(TokenKind::Ident) {
            Ok(self.advance().literal)
        } else {
            Err(self.unexpected(format!("identifier {ctx}")))
        }
    }
}
