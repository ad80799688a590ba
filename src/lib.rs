//! # Introduction
//!
//! sild translates a small statically-typed scripting notation into Go source.
//!
//! ```text
//! let x: number = 1 + 2 * 3;
//! function double(n: number): number { return n * 2; }
//! ```
//!
//! becomes
//!
//! ```text
//! package main
//!
//! func double(n int) int {
//!     return (n * 2)
//! }
//!
//! func main() {
//!     x := (1 + (2 * 3))
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Parser → AST → Generator → Go source
//! ```
//!
//! 1. [`parser`]: scans tokens on demand and builds an AST by recursive descent.
//! 2. [`codegen`]: walks the AST once and emits Go.
//!
//! ## Error handling
//!
//! By default a syntax error truncates the program: everything parsed before
//! the error is still translated and nothing is reported besides a `warn` log
//! line. [`try_transpile`] (or `strict` in [`TranspileOptions`]) reports the
//! first error with its line and column instead, and also rejects characters
//! the scanner does not recognize.

pub mod codegen;
pub mod parser;

pub use codegen::Generator;
pub use parser::ast::Program;
pub use parser::parse::{ParseError, ParseErrorKind, Parser};

/// Options for a single run of the pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranspileOptions {
    /// Fail on the first syntax error or unrecognized character instead of
    /// truncating the program.
    pub strict: bool,
}

/// Parse `source` into a program.
///
/// Never fails unless `options.strict` is set.
pub fn parse(source: &str, options: TranspileOptions) -> Result<Program, ParseError> {
    if options.strict {
        Parser::strict(source).try_parse_program()
    } else {
        Ok(Parser::new(source).parse_program())
    }
}

/// Translate `source` to Go, truncating at the first syntax error.
pub fn transpile(source: &str) -> String {
    let program = Parser::new(source).parse_program();
    Generator::new().generate(&program)
}

/// Translate `source` to Go, failing on the first syntax error.
pub fn try_transpile(source: &str) -> Result<String, ParseError> {
    transpile_with(source, TranspileOptions { strict: true })
}

/// Translate `source` to Go under `options`.
///
/// Fails only when `options.strict` is set and the source has a syntax error
/// or an unrecognized character.
pub fn transpile_with(source: &str, options: TranspileOptions) -> Result<String, ParseError> {
    let program = parse(source, options)?;
    Ok(Generator::new().generate(&program))
}
