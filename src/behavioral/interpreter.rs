//! Interpreter: integer arithmetic over `+ - * /`, parentheses and named
//! variables.
//!
//! Text is split into tokens with a regex, parsed by recursive descent
//! (`*` and `/` bind tighter than `+` and `-`, all left-associative) into an
//! `Expr` tree, and the tree is evaluated against a `Context`.
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := NUMBER | IDENT | '(' expr ')' | '-' factor
//! ```

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{PatternError, Result};

/// Deepest expression tree `parse` accepts. Bounds the recursion of parsing
/// and of everything that walks the tree afterwards.
pub const MAX_DEPTH: usize = 256;

lazy_static! {
    static ref TOKEN: Regex =
        Regex::new(r"^\s*(?:(?P<num>\d+)|(?P<ident>[A-Za-z_][A-Za-z0-9_]*)|(?P<op>[-+*/()]))")
            .expect("token regex is valid");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Variable(String),
    Add(Box<Expr>, Box<Expr>),
    Subtract(Box<Expr>, Box<Expr>),
    Multiply(Box<Expr>, Box<Expr>),
    Divide(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn interpret(&self, context: &Context) -> Result<i64> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Variable(name) => context.get(name),
            Expr::Add(l, r) => l
                .interpret(context)?
                .checked_add(r.interpret(context)?)
                .ok_or(PatternError::Overflow),
            Expr::Subtract(l, r) => l
                .interpret(context)?
                .checked_sub(r.interpret(context)?)
                .ok_or(PatternError::Overflow),
            Expr::Multiply(l, r) => l
                .interpret(context)?
                .checked_mul(r.interpret(context)?)
                .ok_or(PatternError::Overflow),
            Expr::Divide(l, r) => {
                let dividend = l.interpret(context)?;
                match r.interpret(context)? {
                    0 => Err(PatternError::DivisionByZero),
                    divisor => dividend.checked_div(divisor).ok_or(PatternError::Overflow),
                }
            }
        }
    }
}

/// Fully parenthesized, so the tree shape is visible.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Add(l, r) => write!(f, "({l} + {r})"),
            Expr::Subtract(l, r) => write!(f, "({l} - {r})"),
            Expr::Multiply(l, r) => write!(f, "({l} * {r})"),
            Expr::Divide(l, r) => write!(f, "({l} / {r})"),
        }
    }
}

/// Variable bindings.
#[derive(Debug, Clone, Default)]
pub struct Context {
    variables: HashMap<String, i64>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: i64) {
        self.variables.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Result<i64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| PatternError::UndefinedVariable(name.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Number(i64),
    Ident(String),
    Op(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    kind: TokenKind,
    position: usize,
}

fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while !text[offset..].trim_start().is_empty() {
        let rest = &text[offset..];
        let caps = TOKEN.captures(rest).ok_or_else(|| {
            let position = offset + (rest.len() - rest.trim_start().len());
            PatternError::parse(position, "unexpected character")
        })?;

        let (kind, matched) = if let Some(m) = caps.name("num") {
            let value = m
                .as_str()
                .parse::<i64>()
                .map_err(|_| PatternError::parse(offset + m.start(), "number too large"))?;
            (TokenKind::Number(value), m)
        } else if let Some(m) = caps.name("ident") {
            (TokenKind::Ident(m.as_str().to_string()), m)
        } else if let Some(m) = caps.name("op") {
            let op = m.as_str().chars().next().unwrap_or_default();
            (TokenKind::Op(op), m)
        } else {
            return Err(PatternError::parse(offset, "unexpected character"));
        };

        tokens.push(Token {
            kind,
            position: offset + matched.start(),
        });
        offset += matched.end();
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    /// Open parentheses and unary minus signs around the current token.
    nesting: usize,
    /// Byte length of the input, reported for errors at end of input.
    end: usize,
}

impl Parser {
    fn peek_op(&self) -> Option<char> {
        match self.tokens.get(self.cursor) {
            Some(Token {
                kind: TokenKind::Op(op),
                ..
            }) => Some(*op),
            _ => None,
        }
    }

    fn position(&self) -> usize {
        self.tokens
            .get(self.cursor)
            .map_or(self.end, |token| token.position)
    }

    fn too_deep(position: usize) -> PatternError {
        PatternError::parse(position, "expression nested too deeply")
    }

    /// Depth of the node joining two subtrees, checked against `MAX_DEPTH`.
    fn join(position: usize, left: usize, right: usize) -> Result<usize> {
        let depth = left.max(right) + 1;
        if depth > MAX_DEPTH {
            return Err(Self::too_deep(position));
        }
        Ok(depth)
    }

    fn enter(&mut self, position: usize) -> Result<()> {
        if self.nesting >= MAX_DEPTH {
            return Err(Self::too_deep(position));
        }
        self.nesting += 1;
        Ok(())
    }

    // Each rule returns the subtree with its depth.
    fn expr(&mut self) -> Result<(Expr, usize)> {
        let (mut left, mut depth) = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek_op() {
            let position = self.position();
            self.cursor += 1;
            let (right, right_depth) = self.term()?;
            depth = Self::join(position, depth, right_depth)?;
            left = match op {
                '+' => Expr::Add(Box::new(left), Box::new(right)),
                _ => Expr::Subtract(Box::new(left), Box::new(right)),
            };
        }
        Ok((left, depth))
    }

    fn term(&mut self) -> Result<(Expr, usize)> {
        let (mut left, mut depth) = self.factor()?;
        while let Some(op @ ('*' | '/')) = self.peek_op() {
            let position = self.position();
            self.cursor += 1;
            let (right, right_depth) = self.factor()?;
            depth = Self::join(position, depth, right_depth)?;
            left = match op {
                '*' => Expr::Multiply(Box::new(left), Box::new(right)),
                _ => Expr::Divide(Box::new(left), Box::new(right)),
            };
        }
        Ok((left, depth))
    }

    fn factor(&mut self) -> Result<(Expr, usize)> {
        let position = self.position();
        let token = self
            .tokens
            .get(self.cursor)
            .cloned()
            .ok_or_else(|| PatternError::parse(position, "unexpected end of expression"))?;
        self.cursor += 1;

        match token.kind {
            TokenKind::Number(n) => Ok((Expr::Number(n), 1)),
            TokenKind::Ident(name) => Ok((Expr::Variable(name), 1)),
            TokenKind::Op('-') => {
                self.enter(token.position)?;
                let (operand, depth) = self.factor()?;
                self.nesting -= 1;
                let depth = Self::join(token.position, 1, depth)?;
                Ok((
                    Expr::Subtract(Box::new(Expr::Number(0)), Box::new(operand)),
                    depth,
                ))
            }
            TokenKind::Op('(') => {
                self.enter(token.position)?;
                let inner = self.expr()?;
                if self.peek_op() != Some(')') {
                    return Err(PatternError::parse(self.position(), "expected ')'"));
                }
                self.cursor += 1;
                self.nesting -= 1;
                Ok(inner)
            }
            TokenKind::Op(op) => Err(PatternError::parse(
                token.position,
                format!("unexpected '{op}'"),
            )),
        }
    }
}

/// Parses `text` into an expression tree.
pub fn parse(text: &str) -> Result<Expr> {
    let mut parser = Parser {
        tokens: tokenize(text)?,
        cursor: 0,
        nesting: 0,
        end: text.len(),
    };
    let (expr, _) = parser.expr()?;
    if parser.cursor < parser.tokens.len() {
        return Err(PatternError::parse(parser.position(), "unexpected trailing input"));
    }
    Ok(expr)
}

pub struct Interpreter {
    context: Context,
}

impl Interpreter {
    pub fn new(context: Context) -> Self {
        Self { context }
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub fn interpret(&self, text: &str) -> Result<i64> {
        let expr = parse(text)?;
        tracing::debug!(%expr, "Parsed expression");
        expr.interpret(&self.context)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut interpreter = Interpreter::new(Context::new());

    let result = interpreter.interpret("2 + 3 * 4")?;
    writeln!(out, "Result: {result}")?;

    writeln!(out)?;
    interpreter.context_mut().set("x", 5);
    interpreter.context_mut().set("y", 3);
    for text in ["(x + y) * 2", "x - y - 1", "10 / (x - 5)", "z * 2", "2 +"] {
        match interpreter.interpret(text) {
            Ok(value) => writeln!(out, "{text} = {value}")?,
            Err(err) => writeln!(out, "{text} -> {err}")?,
        }
    }
    Ok(())
}
