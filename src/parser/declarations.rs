//! Declaration parsing implementation
//!
//! This module handles parsing of the two declaration forms:
//!
//! - Variable declarations: `let name: type = expr;`
//! - Function declarations: `function name(params): type { ... }`
//! - Type annotations and function parameters
//!
//! # Grammar
//!
//! ```text
//! var_decl      ::= "let" identifier ":" value_type "=" expression ";"
//! function_decl ::= "function" identifier "(" params? ")" ":" return_type
//!                   "{" statement* "}"
//! params        ::= identifier ":" value_type ("," identifier ":" value_type)*
//! value_type    ::= "number" | "string" | "boolean"
//! return_type   ::= value_type | "void"
//! ```
//!
//! The leading keyword has already been consumed when these methods run.
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse variable declaration after `let`
    pub(crate) fn parse_variable_declaration(
        &mut self,
        location: SourceLocation,
    ) -> Result<Statement, ParseError> {
        let name = self.expect_identifier("after 'let'")?;
        self.expect_token(TokenKind::Colon, "after variable name")?;
        let var_type = self.parse_value_type(false, "in variable declaration")?;
        self.expect_token(TokenKind::Assign, "after variable type")?;
        let init = self.parse_expression()?;
        self.expect_token(TokenKind::Semicolon, "after variable declaration")?;

        Ok(Statement::VarDecl {
            name,
            var_type,
            init,
            location,
        })
    }

    /// Parse function declaration after `function`
    pub(crate) fn parse_function_declaration(
        &mut self,
        location: SourceLocation,
    ) -> Result<Statement, ParseError> {
        let name = self.expect_identifier("after 'function'")?;

        self.expect_token(TokenKind::LParen, "after function name")?;
        let params = self.parse_parameter_list()?;
        self.expect_token(TokenKind::RParen, "after parameters")?;

        self.expect_token(TokenKind::Colon, "before return type")?;
        let return_type = self.parse_value_type(true, "after ':'")?;

        self.expect_token(TokenKind::LBrace, "before function body")?;
        let body = self.parse_block_statements()?;
        self.expect_token(TokenKind::RBrace, "after function body")?;

        Ok(Statement::FunctionDecl {
            name,
            params,
            body,
            return_type,
            location,
        })
    }

    /// Parse parameter list: name: type, name: type, ...
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();

        if self.check(TokenKind::RParen) {
            return Ok(params);
        }

        loop {
            let name = self.expect_identifier("in parameter list")?;
            self.expect_token(TokenKind::Colon, "after parameter name")?;
            let param_type = self.parse_value_type(false, "for parameter")?;
            params.push(Param { name, param_type });

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }

    /// Parse a type name. `void` is only accepted where `allow_void` is set.
    pub(crate) fn parse_value_type(
        &mut self,
        allow_void: bool,
        ctx: &str,
    ) -> Result<ValueType, ParseError> {
        let value_type = match self.current.kind {
            TokenKind::TypeNumber => ValueType::Number,
            TokenKind::TypeString => ValueType::String,
            TokenKind::TypeBoolean => ValueType::Boolean,
            TokenKind::TypeVoid if allow_void => ValueType::Void,
            _ => {
                let expected = if allow_void {
                    "'number', 'string', 'boolean' or 'void'"
                } else {
                    "'number', 'string' or 'boolean'"
                };
                return Err(self.unexpected(format!("{expected} {ctx}")));
            }
        };

        self.advance();
        Ok(value_type)
    }
}
