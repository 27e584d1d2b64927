use std::fmt::{Display, Formatter};
use num_bigint::BigUint;
use crate::compiler::lexer::{Token, TokenPos, TokenType};
use crate::compiler::ast::{ConstDecl, Expr, Program, MAX_NESTING_DEPTH};


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedToken {
        pos: TokenPos,
        expected: TokenType,
        got: TokenType,
        source: String,
    },
    ExpectedValue {
        pos: TokenPos,
        got: TokenType,
        source: String,
    },
    InvalidNumber {
        pos: TokenPos,
        literal: String,
    },
    TooDeep {
        pos: TokenPos,
        limit: usize,
    },
}

impl ParseError {
    pub fn get_pos(&self) -> TokenPos {
        match self {
            ParseError::UnexpectedToken { pos, .. } => *pos,
            ParseError::ExpectedValue { pos, .. } => *pos,
            ParseError::InvalidNumber { pos, .. } => *pos,
            ParseError::TooDeep { pos, .. } => *pos,
        }
    }
}

fn describe_found(f: &mut Formatter<'_>, got: TokenType, source: &str) -> std::fmt::Result {
    match got {
        TokenType::Identifier | TokenType::Hex => write!(f, "found {} '{}'", got, source),
        _ => write!(f, "found {}", got),
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedToken { pos, expected, got, source } => {
                write!(f, "{} Expected {}, ", pos, expected)?;
                describe_found(f, *got, source)
            },
            ParseError::ExpectedValue { pos, got, source } => {
                write!(f, "{} Expected value, ", pos)?;
                describe_found(f, *got, source)
            },
            ParseError::InvalidNumber { pos, literal } => write!(f, "{} Invalid hex literal '{}'", pos, literal),
            ParseError::TooDeep { pos, limit } => write!(f, "{} Values nested deeper than {} levels", pos, limit),
        }
    }
}

impl std::error::Error for ParseError {}

type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser with one token of lookahead. Stops at the first error.
pub struct Parser {
    tokens: std::vec::IntoIter<Token>,
    previous: Token, current: Token,

    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Parser {
        let mut parser = Parser {
            tokens: tokens.into_iter(),
            previous: Token::empty(), current: Token::empty(),
            depth: 0,
        };

        parser.consume();
        parser
    }

    // Declaration parsing

    pub fn parse(mut self) -> ParseResult<Program> {
        let mut declarations = Vec::new();

        while self.matches(TokenType::Var) {
            declarations.push(self.parse_const_declaration()?);
        }

        let root = self.parse_value()?;
        self.expect(TokenType::Eof)?;

        Ok(Program { declarations, root })
    }

    fn parse_const_declaration(&mut self) -> ParseResult<ConstDecl> {
        self.expect(TokenType::Identifier)?;
        let name = self.previous.clone();

        self.expect(TokenType::Assign)?;
        let expr = self.parse_value()?;

        // The terminating ';' is optional
        self.matches(TokenType::Semicolon);

        Ok(ConstDecl { name, expr })
    }

    // Value parsing

    fn parse_value(&mut self) -> ParseResult<Expr> {
        if self.matches(TokenType::Hex) {
            return self.parse_number();
        } else if self.matches(TokenType::Array) {
            return self.parse_nested(Parser::parse_array);
        } else if self.matches(TokenType::BracketLeft) {
            return self.parse_nested(Parser::parse_map);
        } else if self.matches(TokenType::Question) {
            return self.parse_const_ref();
        }

        Err(ParseError::ExpectedValue {
            pos: *self.current.start(),
            got: self.current.token_type(),
            source: self.current.source().to_owned(),
        })
    }

    fn parse_nested(&mut self, parse: fn(&mut Parser) -> ParseResult<Expr>) -> ParseResult<Expr> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeep { pos: *self.previous.start(), limit: MAX_NESTING_DEPTH });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;

        result
    }

    fn parse_number(&mut self) -> ParseResult<Expr> {
        let number = &self.previous;

        number.hex_digits()
            .and_then(|digits| BigUint::parse_bytes(digits.as_bytes(), 16))
            .map(Expr::Number)
            .ok_or_else(|| ParseError::InvalidNumber { pos: *number.start(), literal: number.source().to_owned() })
    }

    fn parse_array(&mut self) -> ParseResult<Expr> {
        self.expect(TokenType::ParenthesisLeft)?;
        let mut elements = vec![];

        if !self.check(TokenType::ParenthesisRight) {
            elements.push(self.parse_value()?);

            while self.matches(TokenType::Comma) {
                elements.push(self.parse_value()?);
            }
        }

        self.expect(TokenType::ParenthesisRight)?;
        Ok(Expr::Array(elements))
    }

    fn parse_map(&mut self) -> ParseResult<Expr> {
        let mut fields = vec![];

        while !self.check(TokenType::BracketRight) {
            self.expect(TokenType::Identifier)?;
            let name = self.previous.clone();

            self.expect(TokenType::Assign)?;
            let expr = self.parse_value()?;
            self.expect(TokenType::Semicolon)?;

            fields.push((name, expr));
        }

        self.expect(TokenType::BracketRight)?;
        Ok(Expr::Map(fields))
    }

    fn parse_const_ref(&mut self) -> ParseResult<Expr> {
        self.expect(TokenType::SquareBracketLeft)?;
        self.expect(TokenType::Identifier)?;
        let name = self.previous.clone();
        self.expect(TokenType::SquareBracketRight)?;

        Ok(Expr::ConstRef(name))
    }

    fn consume(&mut self) {
        std::mem::swap(&mut self.previous, &mut self.current); // self.previous = self.current; self.current gets replaced below

        self.current = match self.tokens.next() {
            Some(token) => token,
            None => Token::new(TokenType::Eof, String::new(), *self.previous.end(), *self.previous.end()),
        };
    }

    fn expect(&mut self, token_type: TokenType) -> ParseResult<()> {
        if self.current.token_type() == token_type {
            self.consume();
            return Ok(());
        }

        Err(ParseError::UnexpectedToken {
            pos: *self.current.start(),
            expected: token_type,
            got: self.current.token_type(),
            source: self.current.source().to_owned(),
        })
    }

    fn matches(&mut self, token_type: TokenType) -> bool { // Should be called "match", but that's a keyword
        if !self.check(token_type) {
            return false;
        }

        self.consume();
        true
    }

    #[inline]
    fn check(&self, token_type: TokenType) -> bool {
        self.current.token_type() == token_type
    }
}
