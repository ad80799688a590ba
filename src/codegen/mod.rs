//! Go code generation
//!
//! - [`generator`]: walks a [`Program`](crate::parser::ast::Program) and emits Go source
//! - [`types`]: the fixed mapping from declared types to Go types

pub mod generator;
pub mod types;

pub use generator::Generator;
