//! Restricted arithmetic language for formula steps.
//!
//! A step is a single statement, either `const name = expr;` or a bare
//! expression. Expressions support numbers, variables, `+ - * /`, unary
//! minus, parentheses and the conversion helpers `mmToInch(x[, d])`,
//! `round(x, d)` and `toMetric(x)`.

use std::collections::HashMap;
use std::fmt;

use super::FormulaError;
use crate::config::INCH_DECIMALS;
use crate::units::{mm_to_inch, round, to_metric};

/// Deepest expression tree a statement may build. Chained operators count
/// as one level each, so evaluation and drop stay within the same bound.
pub const MAX_EXPR_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Comma,
    Assign,
    Semicolon,
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Comma => f.write_str(","),
            Token::Assign => f.write_str("="),
            Token::Semicolon => f.write_str(";"),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

fn tokenize(src: &str) -> Result<Vec<(Token, usize)>, FormulaError> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        let token = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => {
                let mut end = pos;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let text = &src[pos..end];
                let value = text.parse().map_err(|_| FormulaError::InvalidNumber {
                    text: text.to_string(),
                    pos,
                })?;
                tokens.push((Token::Number(value), pos));
                continue;
            }
            c if c.is_alphabetic() || c == '_' || c == '$' => {
                let mut end = pos;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' || c == '$' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push((Token::Ident(src[pos..end].to_string()), pos));
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            '=' => Token::Assign,
            ';' => Token::Semicolon,
            other => return Err(FormulaError::UnexpectedChar { ch: other, pos }),
        };
        chars.next();
        tokens.push((token, pos));
    }

    tokens.push((Token::Eof, src.len()));
    Ok(tokens)
}

/// Built-in functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    MmToInch,
    Round,
    ToMetric,
}

impl Func {
    fn lookup(name: &str) -> Option<Self> {
        match name {
            "mmToInch" => Some(Func::MmToInch),
            "round" => Some(Func::Round),
            "toMetric" => Some(Func::ToMetric),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Func::MmToInch => "mmToInch",
            Func::Round => "round",
            Func::ToMetric => "toMetric",
        }
    }

    fn apply(&self, args: &[f64]) -> Result<f64, FormulaError> {
        let arity = |expected: &'static str| FormulaError::Arity {
            name: self.name(),
            expected,
            found: args.len(),
        };
        match (self, args) {
            (Func::MmToInch, [mm]) => Ok(mm_to_inch(*mm, INCH_DECIMALS)),
            (Func::MmToInch, [mm, d]) => Ok(mm_to_inch(*mm, decimals(*d))),
            (Func::MmToInch, _) => Err(arity("1 or 2")),
            (Func::Round, [x, d]) => Ok(round(*x, decimals(*d))),
            (Func::Round, _) => Err(arity("2")),
            (Func::ToMetric, [inches]) => Ok(to_metric(*inches)),
            (Func::ToMetric, _) => Err(arity("1")),
        }
    }
}

fn decimals(d: f64) -> i32 {
    d.round() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn precedence(&self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
        }
    }
}

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Var(String),
    Neg(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Call(Func, Vec<Expr>),
}

impl Expr {
    /// Evaluate against a variable context.
    pub fn eval(&self, ctx: &HashMap<String, f64>) -> Result<f64, FormulaError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Var(name) => ctx
                .get(name)
                .copied()
                .ok_or_else(|| FormulaError::UnknownVariable(name.clone())),
            Expr::Neg(inner) => Ok(-inner.eval(ctx)?),
            Expr::Binary(op, lhs, rhs) => {
                let (a, b) = (lhs.eval(ctx)?, rhs.eval(ctx)?);
                match op {
                    BinOp::Add => Ok(a + b),
                    BinOp::Sub => Ok(a - b),
                    BinOp::Mul => Ok(a * b),
                    BinOp::Div if b == 0.0 => Err(FormulaError::DivisionByZero),
                    BinOp::Div => Ok(a / b),
                }
            }
            Expr::Call(func, args) => {
                let values = args
                    .iter()
                    .map(|arg| arg.eval(ctx))
                    .collect::<Result<Vec<_>, _>>()?;
                func.apply(&values)
            }
        }
    }
}

/// A parsed step: optional assignment target plus expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub target: Option<String>,
    pub expr: Expr,
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    // the stream always ends with Eof and `pos` never passes it
    fn peek(&self) -> &Token {
        &self.tokens[self.pos].0
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|(t, _)| t)
    }

    fn offset(&self) -> usize {
        self.tokens[self.pos].1
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn unexpected(&self, expected: &str) -> FormulaError {
        FormulaError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.peek().to_string(),
            pos: self.offset(),
        }
    }

    fn expect(&mut self, token: Token, expected: &str) -> Result<(), FormulaError> {
        if *self.peek() == token {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn parse_statement(&mut self) -> Result<Statement, FormulaError> {
        let declared = matches!(
            self.peek(),
            Token::Ident(kw) if kw == "const" || kw == "let" || kw == "var"
        );
        if declared {
            self.advance();
        }

        let assigns = self.peek_at(1) == Some(&Token::Assign);
        let target = match self.peek().clone() {
            Token::Ident(name) if assigns => {
                self.advance();
                self.advance();
                Some(name)
            }
            _ if declared => return Err(self.unexpected("assignment")),
            _ => None,
        };

        let expr = self.parse_expr(0)?;
        if *self.peek() == Token::Semicolon {
            self.advance();
        }
        if *self.peek() != Token::Eof {
            return Err(self.unexpected("end of statement"));
        }
        Ok(Statement { target, expr })
    }

    fn descend(&mut self) -> Result<(), FormulaError> {
        if self.depth >= MAX_EXPR_DEPTH {
            return Err(FormulaError::TooDeep {
                limit: MAX_EXPR_DEPTH,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_expr(&mut self, min_prec: u8) -> Result<Expr, FormulaError> {
        let entry = self.depth;
        let result = self.parse_binary(min_prec);
        self.depth = entry;
        result
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, FormulaError> {
        self.descend()?;
        let mut lhs = self.parse_prefix()?;
        loop {
            let op = match self.peek() {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Sub,
                Token::Star => BinOp::Mul,
                Token::Slash => BinOp::Div,
                _ => break,
            };
            let prec = op.precedence();
            if prec <= min_prec {
                break;
            }
            self.advance();
            self.descend()?;
            let rhs = self.parse_expr(prec)?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Expr, FormulaError> {
        match self.peek().clone() {
            Token::Number(n) => {
                self.advance();
                Ok(Expr::Number(n))
            }
            Token::Minus => {
                self.advance();
                Ok(Expr::Neg(Box::new(self.parse_expr(2)?)))
            }
            Token::Plus => {
                self.advance();
                self.parse_expr(2)
            }
            Token::LParen => {
                self.advance();
                let inner = self.parse_expr(0)?;
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            Token::Ident(name) => {
                self.advance();
                if *self.peek() != Token::LParen {
                    return Ok(Expr::Var(name));
                }
                let func = Func::lookup(&name).ok_or(FormulaError::UnknownFunction(name))?;
                self.advance();
                let mut args = Vec::new();
                if *self.peek() != Token::RParen {
                    loop {
                        args.push(self.parse_expr(0)?);
                        if *self.peek() != Token::Comma {
                            break;
                        }
                        self.advance();
                    }
                }
                self.expect(Token::RParen, "')'")?;
                Ok(Expr::Call(func, args))
            }
            _ => Err(self.unexpected("expression")),
        }
    }
}

/// Parse a statement such as `const sashWidth = mmToInch(widthMm / 2 - 14.5 + 1);`.
pub fn parse_statement(src: &str) -> Result<Statement, FormulaError> {
    let tokens = tokenize(src)?;
    Parser {
        tokens,
        pos: 0,
        depth: 0,
    }
    .parse_statement()
}
