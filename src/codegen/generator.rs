//! Go source generator
//!
//! Walks the AST once. Top-level function declarations become Go functions,
//! emitted first; every other top-level statement goes into `func main()` in
//! source order.
//!
//! Binary expressions are always wrapped in parentheses so the evaluation
//! order of the source survives regardless of Go's own precedence rules.

use crate::codegen::types::{go_type, quote, FALLBACK_TYPE};
use crate::parser::ast::*;

/// One level of indentation in generated code
pub const INDENT: &str = "    ";

/// How a function declaration is spelled in Go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FunctionForm {
    /// `func name(...)` at package level
    Named,
    /// `name := func(...)` inside another body
    Closure,
}

#[derive(Debug, Default)]
pub struct Generator {
    output: String,
    indent: usize,
}

impl Generator {
    pub fn new() -> Self {
        Generator::default()
    }

    /// Generate a complete Go source file for `program`.
    pub fn generate(&mut self, program: &Program) -> String {
        self.output.clear();
        self.indent = 0;

        let (functions, statements): (Vec<&Statement>, Vec<&Statement>) =
            program.statements.iter().partition(|stmt| stmt.is_function());

        log::debug!(
            "generating {} function(s) and {} main statement(s)",
            functions.len(),
            statements.len()
        );

        self.emit_line("package main");
        self.emit_newline();

        for function in functions {
            self.emit_statement(function, FunctionForm::Named);
            self.emit_newline();
        }

        self.emit_line("func main() {");
        self.indent += 1;
        for stmt in statements {
            self.emit_statement(stmt, FunctionForm::Closure);
        }
        self.indent -= 1;
        self.emit_line("}");

        std::mem::take(&mut self.output)
    }

    // === Statements ===

    fn emit_statement(&mut self, stmt: &Statement, form: FunctionForm) {
        match stmt {
            Statement::VarDecl {
                name,
                var_type,
                init,
                ..
            } => {
                let value = render_expression(init);
                let value = if *var_type == ValueType::String {
                    quote(&value)
                } else {
                    value
                };
                self.emit_line(&format!("{} := {}", name, value));
            }
            Statement::Return { value, .. } => {
                self.emit_line(&format!("return {}", render_expression(value)));
            }
            Statement::FunctionDecl {
                name,
                params,
                body,
                return_type,
                ..
            } => {
                let signature = render_signature(params, return_type);
                match form {
                    FunctionForm::Named => {
                        self.emit_line(&format!("func {}{} {{", name, signature))
                    }
                    FunctionForm::Closure => {
                        self.emit_line(&format!("{} := func{} {{", name, signature))
                    }
                }

                self.indent += 1;
                for stmt in body {
                    self.emit_statement(stmt, FunctionForm::Closure);
                }
                self.indent -= 1;
                self.emit_line("}");
            }
        }
    }

    // === Output helpers ===

    fn emit_line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn emit_newline(&mut self) {
        self.output.push('\n');
    }
}

/// `(a int, b int) int`, with the result type left out for `void`
fn render_signature(params: &[Param], return_type: &ValueType) -> String {
    let params = params
        .iter()
        .map(|param| {
            let ty = go_type(&param.param_type).unwrap_or(FALLBACK_TYPE);
            format!("{} {}", param.name, ty)
        })
        .collect::<Vec<_>>()
        .join(", ");

    match go_type(return_type) {
        Some(ty) => format!("({}) {}", params, ty),
        None => format!("({})", params),
    }
}

fn render_expression(expr: &Expr) -> String {
    let mut out = String::new();
    expr.write_to(&mut out, StringStyle::Raw);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn var(name: &str, var_type: ValueType, init: Expr) -> Statement {
        Statement::VarDecl {
            name: name.to_string(),
            var_type,
            init,
            location: SourceLocation::default(),
        }
    }

    fn program(statements: Vec<Statement>) -> Program {
        Program { statements }
    }

    #[test]
    fn test_basic_variable_declarations() {
        let cases = [
            (
                var("x", ValueType::Number, Expr::NumberLiteral("42".to_string())),
                "x := 42",
            ),
            (
                var("name", ValueType::String, Expr::StringLiteral("hello".to_string())),
                "name := \"hello\"",
            ),
            (
                var("isActive", ValueType::Boolean, Expr::BooleanLiteral(true)),
                "isActive := true",
            ),
        ];

        for (stmt, line) in cases {
            let output = Generator::new().generate(&program(vec![stmt]));
            assert_eq!(
                output,
                format!("package main\n\nfunc main() {{\n    {}\n}}\n", line)
            );
        }
    }

    #[test]
    fn test_empty_program() {
        let output = Generator::new().generate(&Program::new());
        assert_eq!(output, "package main\n\nfunc main() {\n}\n");
    }

    #[test]
    fn test_functions_are_hoisted_before_main() {
        let add = Statement::FunctionDecl {
            name: "add".to_string(),
            params: vec![Param::new("a", ValueType::Number), Param::new("b", ValueType::Number)],
            body: vec![Statement::Return {
                value: Expr::binary(
                    BinOp::Add,
                    Expr::Identifier("a".to_string()),
                    Expr::Identifier("b".to_string()),
                ),
                location: SourceLocation::default(),
            }],
            return_type: ValueType::Number,
            location: SourceLocation::default(),
        };
        let greet = Statement::FunctionDecl {
            name: "greet".to_string(),
            params: Vec::new(),
            body: Vec::new(),
            return_type: ValueType::Void,
            location: SourceLocation::default(),
        };
        let stmts = vec![
            var("a", ValueType::Number, Expr::NumberLiteral("1".to_string())),
            add,
            var("b", ValueType::Number, Expr::NumberLiteral("2".to_string())),
            greet,
        ];

        let output = Generator::new().generate(&program(stmts));
        assert_eq!(
            output,
            "package main\n\
             \n\
             func add(a int, b int) int {\n\
             \x20   return (a + b)\n\
             }\n\
             \n\
             func greet() {\n\
             }\n\
             \n\
             func main() {\n\
             \x20   a := 1\n\
             \x20   b := 2\n\
             }\n"
        );
    }

    #[test]
    fn test_nested_function_becomes_closure() {
        let inner = Statement::FunctionDecl {
            name: "inner".to_string(),
            params: vec![Param::new("s", ValueType::String)],
            body: vec![Statement::Return {
                value: Expr::Identifier("s".to_string()),
                location: SourceLocation::default(),
            }],
            return_type: ValueType::String,
            location: SourceLocation::default(),
        };
        let outer = Statement::FunctionDecl {
            name: "outer".to_string(),
            params: Vec::new(),
            body: vec![inner],
            return_type: ValueType::Void,
            location: SourceLocation::default(),
        };

        let output = Generator::new().generate(&program(vec![outer]));
        assert_eq!(
            output,
            "package main\n\
             \n\
             func outer() {\n\
             \x20   inner := func(s string) string {\n\
             \x20       return s\n\
             \x20   }\n\
             }\n\
             \n\
             func main() {\n\
             }\n"
        );
    }

    #[test]
    fn test_unknown_types_fall_back_to_any() {
        let func = Statement::FunctionDecl {
            name: "id".to_string(),
            params: vec![Param::new("v", ValueType::Unknown("thing".to_string()))],
            body: Vec::new(),
            return_type: ValueType::Unknown("thing".to_string()),
            location: SourceLocation::default(),
        };
        let output = Generator::new().generate(&program(vec![func]));
        assert!(output.contains("func id(v any) any {\n}\n"));
    }

    #[test]
    fn test_expression_rendering() {
        let expr = Expr::binary(
            BinOp::Mul,
            Expr::Parenthesized(Box::new(Expr::binary(
                BinOp::Add,
                Expr::NumberLiteral("1".to_string()),
                Expr::NumberLiteral("2".to_string()),
            ))),
            Expr::unary(UnOp::Neg, Expr::Identifier("x".to_string())),
        );
        assert_eq!(render_expression(&expr), "((1 + 2) * -x)");

        let call = Expr::Call {
            callee: "f".to_string(),
            args: vec![
                Expr::Parenthesized(Box::new(Expr::BooleanLiteral(false))),
                Expr::unary(UnOp::Not, Expr::Identifier("ok".to_string())),
            ],
        };
        assert_eq!(render_expression(&call), "f((false), !ok)");
    }

    #[test]
    fn test_string_declaration_quotes_rendered_initializer() {
        let stmt = var(
            "s",
            ValueType::String,
            Expr::binary(
                BinOp::Add,
                Expr::Identifier("a".to_string()),
                Expr::Identifier("b".to_string()),
            ),
        );
        let output = Generator::new().generate(&program(vec![stmt]));
        assert!(output.contains("    s := \"(a + b)\"\n"));
    }

    #[test]
    fn test_generator_is_reusable() {
        let mut generator = Generator::new();
        let first = generator.generate(&program(vec![var(
            "x",
            ValueType::Number,
            Expr::NumberLiteral("1".to_string()),
        )]));
        let second = generator.generate(&program(vec![var(
            "x",
            ValueType::Number,
            Expr::NumberLiteral("1".to_string()),
        )]));
        assert_eq!(first, second);
    }
}
