// AST (Abstract Syntax Tree) definitions for the sild front end

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Declared types of variables, parameters and function results.
///
/// The parser only produces the first four variants. `Unknown` keeps the
/// name of a type the generator has no mapping for, which can only happen
/// for trees built by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    Number,
    String,
    Boolean,
    Void,
    Unknown(String),
}

impl ValueType {
    /// Source-level spelling of the type.
    pub fn name(&self) -> &str {
        match self {
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Void => "void",
            ValueType::Unknown(name) => name,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Not, // !x
    Neg, // -x
}

impl UnOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Not => "!",
            UnOp::Neg => "-",
        }
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub param_type: ValueType,
}

impl Param {
    pub fn new(name: impl Into<String>, param_type: ValueType) -> Self {
        Param {
            name: name.into(),
            param_type,
        }
    }
}

/// Statements: the only nodes that can appear in a statement list
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VarDecl {
        name: String,
        var_type: ValueType,
        init: Expr,
        location: SourceLocation,
    },
    FunctionDecl {
        name: String,
        params: Vec<Param>,
        body: Vec<Statement>,
        return_type: ValueType,
        location: SourceLocation,
    },
    Return {
        value: Expr,
        location: SourceLocation,
    },
}

impl Statement {
    /// Get the source location of this statement's first token
    pub fn location(&self) -> &SourceLocation {
        match self {
            Statement::VarDecl { location, .. } => location,
            Statement::FunctionDecl { location, .. } => location,
            Statement::Return { location, .. } => location,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Statement::FunctionDecl { .. })
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Digits exactly as written in the source
    NumberLiteral(String),
    /// Raw text between the quotes
    StringLiteral(String),
    BooleanLiteral(bool),
    Identifier(String),
    Unary {
        op: UnOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Parenthesized(Box<Expr>),
    Call {
        callee: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// True if this expression already renders inside a pair of parentheses.
    ///
    /// A parenthesized group whose contents are wrapped this way renders with
    /// that single pair instead of adding a second one. This covers a binary
    /// expression (`((1 + 2))` renders as `(1 + 2)`) and a nested group
    /// (`((x))` renders as `(x)`).
    pub fn renders_wrapped(&self) -> bool {
        matches!(self, Expr::Binary { .. } | Expr::Parenthesized(_))
    }

    /// Append the fully parenthesized rendering of this expression to `out`.
    pub fn write_to(&self, out: &mut String, strings: StringStyle) {
        match self {
            Expr::NumberLiteral(text) | Expr::Identifier(text) => out.push_str(text),
            Expr::StringLiteral(text) => match strings {
                StringStyle::Quoted => {
                    out.push('"');
                    out.push_str(text);
                    out.push('"');
                }
                StringStyle::Raw => out.push_str(text),
            },
            Expr::BooleanLiteral(value) => out.push_str(if *value { "true" } else { "false" }),
            Expr::Unary { op, operand } => {
                out.push_str(op.symbol());
                operand.write_to(out, strings);
            }
            Expr::Binary { op, left, right } => {
                out.push('(');
                left.write_to(out, strings);
                out.push(' ');
                out.push_str(op.symbol());
                out.push(' ');
                right.write_to(out, strings);
                out.push(')');
            }
            Expr::Parenthesized(inner) if inner.renders_wrapped() => inner.write_to(out, strings),
            Expr::Parenthesized(inner) => {
                out.push('(');
                inner.write_to(out, strings);
                out.push(')');
            }
            Expr::Call { callee, args } => {
                out.push_str(callee);
                out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    arg.write_to(out, strings);
                }
                out.push(')');
            }
        }
    }
}

/// How [`Expr::write_to`] writes string literals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringStyle {
    /// Between double quotes, as in source notation
    Quoted,
    /// The literal's text alone
    Raw,
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out, StringStyle::Quoted);
        f.write_str(&out)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::VarDecl {
                name,
                var_type,
                init,
                ..
            } => write!(f, "let {}: {} = {};", name, var_type, init),
            Statement::Return { value, .. } => write!(f, "return {};", value),
            Statement::FunctionDecl {
                name,
                params,
                body,
                return_type,
                ..
            } => {
                write!(f, "function {}(", name)?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", param.name, param.param_type)?;
                }
                write!(f, "): {} {{", return_type)?;
                for stmt in body {
                    write!(f, " {}", stmt)?;
                }
                if body.is_empty() {
                    f.write_str("}")
                } else {
                    f.write_str(" }")
                }
            }
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
