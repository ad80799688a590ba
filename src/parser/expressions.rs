//! Expression parsing implementation
//!
//! One routine per precedence level, lowest first:
//!
//! ```text
//! expression ::= term
//! term       ::= factor (("+" | "-") factor)*
//! factor     ::= unary (("*" | "/") unary)*
//! unary      ::= ("!" | "-") unary | primary
//! primary    ::= number | string | boolean | identifier
//!              | identifier "(" (expression ("," expression)*)? ")"
//!              | "(" expression ")"
//! ```
//!
//! Binary operators are left-associative; unary operators nest to the right.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_term()
    }

    /// Parse additive (+ -)
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        loop {
            let op = if self.match_token(TokenKind::Plus) {
                BinOp::Add
            } else if self.match_token(TokenKind::Minus) {
                BinOp::Sub
            } else {
                break;
            };

            let right = self.parse_factor()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse multiplicative (* /)
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = if self.match_token(TokenKind::Star) {
                BinOp::Mul
            } else if self.match_token(TokenKind::Slash) {
                BinOp::Div
            } else {
                break;
            };

            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse unary (! -)
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = if self.match_token(TokenKind::Bang) {
            UnOp::Not
        } else if self.match_token(TokenKind::Minus) {
            UnOp::Neg
        } else {
            return self.parse_primary();
        };

        let operand = self.parse_unary()?;
        Ok(Expr::unary(op, operand))
    }

    /// Parse primary (literals, identifiers, calls, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current.kind {
            TokenKind::Number => Ok(Expr::NumberLiteral(self.advance().literal)),
            TokenKind::String => Ok(Expr::StringLiteral(self.advance().literal)),
            TokenKind::Boolean => Ok(Expr::BooleanLiteral(self.advance().literal == "true")),
            TokenKind::Ident if self.check_peek(TokenKind::LParen) => {
                let callee = self.advance().literal;
                self.advance(); // consume '('
                let args = self.parse_argument_list()?;
                self.expect_token(TokenKind::RParen, "after function arguments")?;
                Ok(Expr::Call { callee, args })
            }
            TokenKind::Ident => Ok(Expr::Identifier(self.advance().literal)),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_token(TokenKind::RParen, "after expression")?;
                Ok(Expr::Parenthesized(Box::new(inner)))
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parse argument list: expr, expr, ...
    fn parse_argument_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        if self.check(TokenKind::RParen) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        Ok(args)
    }
}
