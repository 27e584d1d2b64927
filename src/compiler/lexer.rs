use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::Chars;
use lazy_static::lazy_static;
use crate::util;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenPos {
    pub line: i32,
    pub column: i32,
}

impl TokenPos {
    pub fn new(line: i32, column: i32) -> TokenPos {
        TokenPos { line, column }
    }

    pub fn begin() -> TokenPos {
        TokenPos::new(1, 1)
    }
}

impl Display for TokenPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {} column {}]", self.line, self.column)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenType {
    None,

    ParenthesisLeft, ParenthesisRight,
    BracketLeft, BracketRight,
    SquareBracketLeft, SquareBracketRight,
    Comma, Semicolon,
    Assign, Question,

    Identifier,
    Hex,

    // Keywords
    Array,
    Var,

    // EOF
    Eof,
}

impl TokenType {
    /// Human-readable name used in parser diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenType::None => "nothing",
            TokenType::ParenthesisLeft => "'('",
            TokenType::ParenthesisRight => "')'",
            TokenType::BracketLeft => "'{'",
            TokenType::BracketRight => "'}'",
            TokenType::SquareBracketLeft => "'['",
            TokenType::SquareBracketRight => "']'",
            TokenType::Comma => "','",
            TokenType::Semicolon => "';'",
            TokenType::Assign => "'='",
            TokenType::Question => "'?'",
            TokenType::Identifier => "identifier",
            TokenType::Hex => "hex number",
            TokenType::Array => "'array'",
            TokenType::Var => "'var'",
            TokenType::Eof => "end of input",
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

lazy_static! {
    static ref SINGLE_CHARACTER_TOKENS: HashMap<char, TokenType> = HashMap::from([
        ('(', TokenType::ParenthesisLeft), (')', TokenType::ParenthesisRight),
        ('{', TokenType::BracketLeft), ('}', TokenType::BracketRight),
        ('[', TokenType::SquareBracketLeft), (']', TokenType::SquareBracketRight),
        (',', TokenType::Comma), (';', TokenType::Semicolon),
        ('=', TokenType::Assign), ('?', TokenType::Question),
    ]);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    token_type: TokenType,
    source: String,
    start: TokenPos, end: TokenPos,
}

impl Token {
    pub fn new(token_type: TokenType, source: String, start: TokenPos, end: TokenPos) -> Token {
        Token {
            token_type, source,
            start, end
        }
    }

    pub fn empty() -> Token {
        Token {
            token_type: TokenType::None,
            source: String::from(""),
            start: TokenPos::begin(), end: TokenPos::begin(),
        }
    }

    pub fn token_type(&self) -> TokenType { self.token_type }
    pub fn source(&self) -> &str { &self.source }
    pub fn start(&self) -> &TokenPos { &self.start }
    pub fn end(&self) -> &TokenPos { &self.end }

    /// The digits of a hex literal, without the `0x` prefix.
    pub fn hex_digits(&self) -> Option<&str> {
        if self.token_type != TokenType::Hex {
            return None;
        }

        self.source.get(2..)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.token_type {
            TokenType::None => f.write_str("None"),
            TokenType::Eof => f.write_str("Eof"),
            _ => write!(f, "`{}`", self.source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// Returned by `peek`/`consume` at the end of input. The scanning loops treat it as
    /// a stop signal and `scan_token` checks `is_eof` first, so it never leaves the lexer.
    UnexpectedEof,

    UnexpectedCharacter(TokenPos, char),
    MissingHexDigits {
        pos: TokenPos,
        prefix: String,
    },
}

impl LexerError {
    pub fn get_pos(&self) -> Option<TokenPos> {
        match self {
            LexerError::UnexpectedCharacter(pos, _) => Some(*pos),
            LexerError::MissingHexDigits { pos, .. } => Some(*pos),
            LexerError::UnexpectedEof => None,
        }
    }
}

impl Display for LexerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LexerError::UnexpectedEof => write!(f, "Unexpected EOF"),
            LexerError::UnexpectedCharacter(pos, c) => write!(f, "{} Unexpected character '{}'", pos, c),
            LexerError::MissingHexDigits { pos, prefix } => write!(f, "{} Expected hex digits after '{}'", pos, prefix),
        }
    }
}

impl std::error::Error for LexerError {}

type LexerResult<T> = Result<T, LexerError>;

pub struct Lexer<'source> {
    input: &'source str,

    chars: Chars<'source>,
    peek_1: Option<char>,

    start_index: usize,
    current_index: usize,

    start_pos: TokenPos,
    current_pos: TokenPos,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Lexer<'source> {
        Lexer {
            input: source,

            chars: source.chars(),
            peek_1: None,

            start_index: 0,
            current_index: 0,

            start_pos: TokenPos::begin(),
            current_pos: TokenPos::begin(),
        }
    }

    /// Scans the whole input. The returned tokens always end with exactly one [`TokenType::Eof`].
    pub fn tokenize(mut self) -> LexerResult<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.scan_token()?;
            let is_eof = token.token_type() == TokenType::Eof;
            tokens.push(token);

            if is_eof {
                return Ok(tokens);
            }
        }
    }

    pub fn scan_token(&mut self) -> LexerResult<Token> {
        self.skip_whitespace();
        self.start_index = self.current_index;
        self.start_pos = self.current_pos;

        if self.is_eof() {
            return Ok(self.make_token(TokenType::Eof));
        }

        let c = self.consume()?;

        if let Some(token_type) = SINGLE_CHARACTER_TOKENS.get(&c) {
            return Ok(self.make_token(*token_type));
        }

        if c == '0' && matches!(self.peek(), Ok('x' | 'X')) {
            self.scan_hex()
        } else if util::is_alphabetic(c) {
            self.scan_identifier()
        } else {
            Err(LexerError::UnexpectedCharacter(self.start_pos, c))
        }
    }

    fn scan_hex(&mut self) -> LexerResult<Token> {
        let _ = self.consume(); // the 'x'

        while let Ok(c) = self.peek() {
            if !c.is_ascii_hexdigit() {
                break;
            }

            let _ = self.consume();
        }

        if self.current_index - self.start_index <= 2 {
            return Err(LexerError::MissingHexDigits {
                pos: self.start_pos,
                prefix: self.input[self.start_index..self.current_index].to_owned(),
            });
        }

        Ok(self.make_token(TokenType::Hex))
    }

    fn scan_identifier(&mut self) -> LexerResult<Token> {
        while let Ok(c) = self.peek() {
            if !util::is_alphanumeric(c) {
                break;
            }

            let _ = self.consume();
        }

        let name = &self.input[self.start_index..self.current_index];

        let token_type = match name.chars().next() {
            Some('a') => Lexer::check_keyword(name, 1, "array", TokenType::Array),
            Some('v') => Lexer::check_keyword(name, 1, "var", TokenType::Var),
            _ => TokenType::Identifier,
        };

        Ok(Token { source: name.to_owned(), token_type, start: self.start_pos, end: self.current_pos })
    }

    fn check_keyword(name: &str, start: usize, keyword: &'static str, token_type: TokenType) -> TokenType {
        if name.get(start..) == keyword.get(start..) {
            token_type
        } else {
            TokenType::Identifier
        }
    }

    fn make_token(&self, token_type: TokenType) -> Token {
        Token {
            token_type,
            source: self.input[self.start_index..self.current_index].to_owned(),

            start: self.start_pos, end: self.current_pos,
        }
    }

    fn consume(&mut self) -> LexerResult<char> {
        (if let Some(c) = self.peek_1.take() {
            Ok(c)
        } else {
            self.chars.next().ok_or(LexerError::UnexpectedEof)
        }).map(|c| {
            self.current_index += c.len_utf8();

            if c == '\n' {
                self.current_pos.line += 1;
                self.current_pos.column = 1;
            } else {
                self.current_pos.column += 1;
            }

            c
        })
    }

    fn peek(&mut self) -> LexerResult<char> {
        if let Some(c) = self.peek_1 {
            Ok(c)
        } else if let Some(c) = self.chars.next() {
            self.peek_1 = Some(c);
            Ok(c)
        } else {
            Err(LexerError::UnexpectedEof)
        }
    }

    fn skip_whitespace(&mut self) {
        while let Ok(c) = self.peek() {
            if !c.is_whitespace() {
                return;
            }

            let _ = self.consume();
        }
    }

    fn is_eof(&self) -> bool {
        self.current_index >= self.input.len()
    }
}
