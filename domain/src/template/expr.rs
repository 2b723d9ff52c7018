//! Expression language for `@{...}` template blocks.
//!
//! A deliberately small, side-effect free language: field lookups, member
//! access, literals, a handful of built-in functions and the usual
//! boolean/comparison/concatenation operators. Nothing in it can reach
//! outside the record it is evaluated against.
//!
//! ```text
//! ternary  := or ('?' ternary ':' ternary)?
//! or       := and ('||' and)*
//! and      := equality ('&&' equality)*
//! equality := concat (('==' | '!=') concat)*
//! concat   := unary ('+' unary)*
//! unary    := '!' unary | postfix
//! postfix  := primary ('.' ident)*
//! primary  := ident ('(' args ')')? | string | number | true | false | null | '(' ternary ')'
//! ```

use serde_json::{Number, Value};

/// Parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Field(String),
    Member(Box<Expr>, String),
    Call(String, Vec<Expr>),
    Not(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Ternary(Box<Expr>, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Add,
}

/// Parse failure, `position` is a byte offset into the expression source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub position: usize,
    pub reason: String,
}

impl ParseError {
    fn new(position: usize, reason: impl Into<String>) -> Self {
        Self {
            position,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Str(String),
    Num(Number),
    Dot,
    Comma,
    LParen,
    RParen,
    Question,
    Colon,
    Bang,
    Plus,
    OrOr,
    AndAnd,
    EqEq,
    NotEq,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Ident(name) => format!("identifier '{name}'"),
            Token::Str(_) => "string literal".to_string(),
            Token::Num(n) => format!("number {n}"),
            Token::Dot => "'.'".to_string(),
            Token::Comma => "','".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Question => "'?'".to_string(),
            Token::Colon => "':'".to_string(),
            Token::Bang => "'!'".to_string(),
            Token::Plus => "'+'".to_string(),
            Token::OrOr => "'||'".to_string(),
            Token::AndAnd => "'&&'".to_string(),
            Token::EqEq => "'=='".to_string(),
            Token::NotEq => "'!='".to_string(),
        }
    }
}

fn tokenize(src: &str) -> Result<Vec<(usize, Token)>, ParseError> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        let start = i;
        match c {
            b' ' | b'\t' | b'\n' | b'\r' => {
                i += 1;
                continue;
            }
            b'.' => tokens.push((start, Token::Dot)),
            b',' => tokens.push((start, Token::Comma)),
            b'(' => tokens.push((start, Token::LParen)),
            b')' => tokens.push((start, Token::RParen)),
            b'?' => tokens.push((start, Token::Question)),
            b':' => tokens.push((start, Token::Colon)),
            b'+' => tokens.push((start, Token::Plus)),
            b'|' | b'&' | b'=' => {
                if bytes.get(i + 1) != Some(&c) {
                    return Err(ParseError::new(
                        start,
                        format!("expected '{0}{0}'", c as char),
                    ));
                }
                let token = match c {
                    b'|' => Token::OrOr,
                    b'&' => Token::AndAnd,
                    _ => Token::EqEq,
                };
                tokens.push((start, token));
                i += 2;
                continue;
            }
            b'!' => {
                if bytes.get(i + 1) == Some(&b'=') {
                    tokens.push((start, Token::NotEq));
                    i += 2;
                    continue;
                }
                tokens.push((start, Token::Bang));
            }
            b'\'' | b'"' => {
                let (literal, next) = read_string(src, i)?;
                tokens.push((start, Token::Str(literal)));
                i = next;
                continue;
            }
            b'0'..=b'9' => {
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                let text = &src[start..i];
                let number = parse_number(text)
                    .ok_or_else(|| ParseError::new(start, format!("invalid number '{text}'")))?;
                tokens.push((start, Token::Num(number)));
                continue;
            }
            c if c.is_ascii_alphabetic() || c == b'_' || c == b'$' => {
                while i < bytes.len()
                    && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_' || bytes[i] == b'$')
                {
                    i += 1;
                }
                tokens.push((start, Token::Ident(src[start..i].to_string())));
                continue;
            }
            _ => {
                let ch = src[start..].chars().next().unwrap_or('?');
                return Err(ParseError::new(start, format!("unexpected character '{ch}'")));
            }
        }
        i += 1;
    }

    Ok(tokens)
}

fn read_string(src: &str, start: usize) -> Result<(String, usize), ParseError> {
    let mut chars = src[start..].char_indices();
    let Some((_, quote)) = chars.next() else {
        return Err(ParseError::new(start, "unterminated string"));
    };
    let mut literal = String::new();
    while let Some((offset, ch)) = chars.next() {
        match ch {
            c if c == quote => return Ok((literal, start + offset + c.len_utf8())),
            '\\' => match chars.next() {
                Some((_, 'n')) => literal.push('\n'),
                Some((_, 't')) => literal.push('\t'),
                Some((_, other)) => literal.push(other),
                None => break,
            },
            other => literal.push(other),
        }
    }
    Err(ParseError::new(start, "unterminated string"))
}

fn parse_number(text: &str) -> Option<Number> {
    if let Ok(int) = text.parse::<i64>() {
        return Some(Number::from(int));
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

/// Parse the content of an `@{...}` block
pub fn parse(src: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(src)?;
    if tokens.is_empty() {
        return Err(ParseError::new(0, "empty expression"));
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        end: src.len(),
    };
    let expr = parser.ternary()?;
    if let Some((offset, token)) = parser.tokens.get(parser.pos) {
        return Err(ParseError::new(
            *offset,
            format!("unexpected {}", token.describe()),
        ));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, t)| t)
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|(o, _)| *o)
            .unwrap_or(self.end)
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if self.eat(&expected) {
            return Ok(());
        }
        let found = self
            .peek()
            .map(Token::describe)
            .unwrap_or_else(|| "end of expression".to_string());
        Err(ParseError::new(
            self.offset(),
            format!("expected {}, found {}", expected.describe(), found),
        ))
    }

    fn ternary(&mut self) -> Result<Expr, ParseError> {
        let condition = self.or()?;
        if !self.eat(&Token::Question) {
            return Ok(condition);
        }
        let then = self.ternary()?;
        self.expect(Token::Colon)?;
        let otherwise = self.ternary()?;
        Ok(Expr::Ternary(
            Box::new(condition),
            Box::new(then),
            Box::new(otherwise),
        ))
    }

    fn or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.and()?;
        while self.eat(&Token::OrOr) {
            let right = self.and()?;
            left = Expr::Binary(BinaryOp::Or, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.equality()?;
        while self.eat(&Token::AndAnd) {
            let right = self.equality()?;
            left = Expr::Binary(BinaryOp::And, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.concat()?;
        loop {
            let op = if self.eat(&Token::EqEq) {
                BinaryOp::Eq
            } else if self.eat(&Token::NotEq) {
                BinaryOp::NotEq
            } else {
                return Ok(left);
            };
            let right = self.concat()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
    }

    fn concat(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;
        while self.eat(&Token::Plus) {
            let right = self.unary()?;
            left = Expr::Binary(BinaryOp::Add, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Bang) {
            return Ok(Expr::Not(Box::new(self.unary()?)));
        }
        self.postfix()
    }

    fn postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        while self.eat(&Token::Dot) {
            let offset = self.offset();
            match self.tokens.get(self.pos) {
                Some((_, Token::Ident(name))) => {
                    expr = Expr::Member(Box::new(expr), name.clone());
                    self.pos += 1;
                }
                _ => return Err(ParseError::new(offset, "expected property name after '.'")),
            }
            if self.peek() == Some(&Token::LParen) {
                return Err(ParseError::new(
                    self.offset(),
                    "only built-in functions can be called",
                ));
            }
        }
        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let offset = self.offset();
        let Some((_, token)) = self.tokens.get(self.pos).cloned() else {
            return Err(ParseError::new(offset, "unexpected end of expression"));
        };
        self.pos += 1;

        match token {
            Token::Str(s) => Ok(Expr::Literal(Value::String(s))),
            Token::Num(n) => Ok(Expr::Literal(Value::Number(n))),
            Token::LParen => {
                let inner = self.ternary()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Token::Ident(name) => {
                let keyword = match name.as_str() {
                    "true" => Some(Value::Bool(true)),
                    "false" => Some(Value::Bool(false)),
                    "null" | "undefined" => Some(Value::Null),
                    _ => None,
                };
                if let Some(value) = keyword {
                    return Ok(Expr::Literal(value));
                }
                if self.eat(&Token::LParen) {
                    let args = self.arguments()?;
                    return Ok(Expr::Call(name, args));
                }
                Ok(Expr::Field(name))
            }
            other => Err(ParseError::new(
                offset,
                format!("unexpected {}", other.describe()),
            )),
        }
    }

    fn arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if self.eat(&Token::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.ternary()?);
            if self.eat(&Token::Comma) {
                continue;
            }
            self.expect(Token::RParen)?;
            return Ok(args);
        }
    }
}
