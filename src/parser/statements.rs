//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement ::= var_decl | function_decl | return_stmt
//! return_stmt ::= "return" expression ";"?
//! ```
//!
//! The `;` after a return value may only be left out when the statement is
//! the last one in its block or in the input.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse block statements (inside braces, excluding the braces themselves)
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let loc = self.current_location();

        if self.match_token(TokenKind::Let) {
            return self.parse_variable_declaration(loc);
        }

        if self.match_token(TokenKind::Function) {
            return self.parse_function_declaration(loc);
        }

        if self.match_token(TokenKind::Return) {
            return self.parse_return_statement(loc);
        }

        Err(self.unexpected_statement())
    }

    /// Parse return statement
    fn parse_return_statement(&mut self, location: SourceLocation) -> Result<Statement, ParseError> {
        let value = self.parse_expression()?;

        if !self.match_token(TokenKind::Semicolon)
            && !self.check(TokenKind::RBrace)
            && !self.is_at_end()
        {
            return Err(self.unexpected("';' after return value"));
        }

        Ok(Statement::Return { value, location })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{ParseErrorKind, Parser};

    #[test]
    fn test_return_semicolon_optional_at_end() {
        for source in ["return 1;", "return 1"] {
            let program = Parser::new(source).try_parse_program().unwrap();
            assert_eq!(program.statements.len(), 1);
            assert!(matches!(program.statements[0], Statement::Return { .. }));
        }
    }

    #[test]
    fn test_return_semicolon_required_between_statements() {
        let err = Parser::new("return 1 return 2;")
            .try_parse_program()
            .unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::Expected {
                expected: "';' after return value".to_string(),
                found: "'return'".to_string(),
            }
        );
    }

    #[test]
    fn test_nested_function_declaration() {
        let program = Parser::new(
            "function outer(): number { function inner(): number { return 1; } return inner(); }",
        )
        .try_parse_program()
        .unwrap();

        match &program.statements[0] {
            Statement::FunctionDecl { body, .. } => {
                assert_eq!(body.len(), 2);
                assert!(body[0].is_function());
                assert_eq!(body[1].to_string(), "return inner();");
            }
            _ => panic!("Expected function declaration"),
        }
    }

    #[test]
    fn test_statement_locations() {
        let program = Parser::new("let a: number = 1;\n  return a;")
            .try_parse_program()
            .unwrap();
        assert_eq!(*program.statements[0].location(), SourceLocation::new(1, 1));
        assert_eq!(*program.statements[1].location(), SourceLocation::new(2, 3));
    }

    #[test]
    fn test_stray_closing_brace_stops_program() {
        let mut parser = Parser::new("let a: number = 1; } let b: number = 2;");
        let program = parser.parse_program();
        assert_eq!(program.statements.len(), 1);
        assert!(matches!(
            parser.last_error().map(|e| &e.kind),
            Some(ParseErrorKind::UnexpectedStatement { found }) if found == "'}'"
        ));
    }
}
