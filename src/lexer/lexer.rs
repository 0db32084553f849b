use log::trace;

use crate::{MK_SINGLE_TOKEN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Byte-at-a-time scanner over a single source string.
///
/// `pos` always points at the byte under examination; a position past the
/// end of the source means input is exhausted.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Byte under the cursor, or `0` at end of input.
    pub fn at(&self) -> u8 {
        self.source.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Byte after the cursor, without consuming anything.
    pub fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.pos + 1).copied().unwrap_or(0)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Produces the next token. Once input is exhausted every call returns EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, "");
        }

        let token = match self.at() {
            b'=' if self.peek() == b'=' => {
                self.advance_n(1);
                MK_TOKEN!(TokenKind::Equals, "==")
            }
            b'!' if self.peek() == b'=' => {
                self.advance_n(1);
                MK_TOKEN!(TokenKind::NotEquals, "!=")
            }
            b'=' => MK_SINGLE_TOKEN!(TokenKind::Assignment, self),
            b'!' => MK_SINGLE_TOKEN!(TokenKind::Not, self),
            b'+' => MK_SINGLE_TOKEN!(TokenKind::Plus, self),
            b'-' => MK_SINGLE_TOKEN!(TokenKind::Dash, self),
            b'/' => MK_SINGLE_TOKEN!(TokenKind::Slash, self),
            b'*' => MK_SINGLE_TOKEN!(TokenKind::Star, self),
            b'<' => MK_SINGLE_TOKEN!(TokenKind::Less, self),
            b'>' => MK_SINGLE_TOKEN!(TokenKind::Greater, self),
            b',' => MK_SINGLE_TOKEN!(TokenKind::Comma, self),
            b';' => MK_SINGLE_TOKEN!(TokenKind::Semicolon, self),
            b'(' => MK_SINGLE_TOKEN!(TokenKind::OpenParen, self),
            b')' => MK_SINGLE_TOKEN!(TokenKind::CloseParen, self),
            b'{' => MK_SINGLE_TOKEN!(TokenKind::OpenCurly, self),
            b'}' => MK_SINGLE_TOKEN!(TokenKind::CloseCurly, self),
            ch if is_letter(ch) => {
                // Scanners return with the cursor already past the token.
                let value = self.read_while(is_letter);
                return MK_TOKEN!(lookup_identifier(&value), value);
            }
            ch if ch.is_ascii_digit() => {
                let value = self.read_while(|ch| ch.is_ascii_digit());
                return MK_TOKEN!(TokenKind::Integer, value);
            }
            ch => {
                trace!("illegal byte {:#04x} at offset {}", ch, self.pos);
                let value = String::from_utf8_lossy(&[ch]).into_owned();
                MK_TOKEN!(TokenKind::Illegal, value)
            }
        };

        self.advance_n(1);
        token
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.at(), b' ' | b'\t' | b'\n' | b'\r') && !self.at_eof() {
            self.advance_n(1);
        }
    }

    fn read_while(&mut self, predicate: fn(u8) -> bool) -> String {
        let start = self.pos;
        while !self.at_eof() && predicate(self.at()) {
            self.advance_n(1);
        }
        self.source[start..self.pos].to_string()
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Yields every token up to, but not including, EOF.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            None
        } else {
            Some(token)
        }
    }
}

/// Tokenizes a whole source string. The returned list always ends with a
/// single EOF token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}
