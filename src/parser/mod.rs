//! sild source code parser
//!
//! This module transforms sild source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Scanning (source text → tokens, one at a time)
//! - [`parse`]: Parsing (tokens → AST), extended by the private
//!   `declarations`, `statements` and `expressions` modules
//! - [`ast`]: AST node definitions
//!
//! # Supported language
//!
//! - Types: `number`, `string`, `boolean`, and `void` for function results
//! - Statements: `let` declarations, `function` declarations, `return`
//! - Expressions: `+ - * /`, prefix `!` and `-`, parentheses, function calls,
//!   number/string/boolean literals and identifiers
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one routine per precedence level.
//! No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parse;

mod declarations;
mod expressions;
mod statements;
