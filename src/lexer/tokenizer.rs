use std::path::Path;

use super::token::{Token, TokenKind};
use crate::error::Result;

/// Returns true for the whitespace characters the grammar skips
/// (space, tab, newline, carriage return, form feed, vertical tab).
fn is_skipper(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c' | '\x0b')
}

/// Returns true for characters allowed inside symbols and keywords:
/// ASCII alphanumerics and punctuation, excluding the five reserved
/// delimiters `( ) , ' "`.
pub fn is_symbol_character(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || (c.is_ascii_punctuation() && !matches!(c, '(' | ')' | ',' | '\'' | '"'))
}

/// Streaming tokenizer for the S-expression grammar.
///
/// Produces exactly one [`Token`] per [`next_token`](Tokenizer::next_token)
/// call, classifying by a single character of lookahead (LL(1)). Once the
/// input is exhausted, every further call returns a `Terminator` token.
///
/// Lexical errors are reported in-band as `Invalid` tokens; the parser turns
/// them into errors.
pub struct Tokenizer {
    /// Source text as a character vector
    source: Vec<char>,
    /// Current position in source
    current: usize,
}

impl Tokenizer {
    /// Creates a tokenizer over raw source text
    pub fn new(source: &str) -> Self {
        Tokenizer {
            source: source.chars().collect(),
            current: 0,
        }
    }

    /// Creates a tokenizer over the contents of a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Ok(Tokenizer::new(&source))
    }

    /// Consumes and returns the next token from the source.
    ///
    /// Whitespace is insignificant outside string literals and is skipped.
    pub fn next_token(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if is_skipper(c) {
                self.advance();
                continue;
            }

            return match c {
                '(' => {
                    self.advance();
                    Token::bare(TokenKind::OpenParen)
                }
                ')' => {
                    self.advance();
                    Token::bare(TokenKind::CloseParen)
                }
                ',' => {
                    self.advance();
                    Token::bare(TokenKind::Comma)
                }
                ':' => self.scan_keyword(),
                '"' => self.scan_string(),
                c if c.is_ascii_digit() || c == '.' || c == '-' => self.scan_number(),
                c if is_symbol_character(c) => self.scan_symbol(),
                c => {
                    self.advance();
                    Token::new(TokenKind::Invalid, c.to_string())
                }
            };
        }

        Token::bare(TokenKind::Terminator)
    }

    /// Scans `:name`, lower-casing as it goes. The colon is retained in the
    /// token text.
    fn scan_keyword(&mut self) -> Token {
        self.advance(); // :

        let mut text = String::from(":");
        while let Some(c) = self.peek() {
            if !is_symbol_character(c) {
                break;
            }
            self.advance();
            text.push(c.to_ascii_lowercase());
        }

        if text.len() == 1 {
            return Token::new(TokenKind::Invalid, "empty keyword with a bare ':'");
        }

        Token::new(TokenKind::Keyword, text)
    }

    /// Scans a maximal run of symbol characters, lower-casing as it goes
    fn scan_symbol(&mut self) -> Token {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if !is_symbol_character(c) {
                break;
            }
            self.advance();
            text.push(c.to_ascii_lowercase());
        }

        Token::new(TokenKind::Symbol, text)
    }

    /// Scans a string literal. Only `\"` and `\\` escapes are accepted.
    fn scan_string(&mut self) -> Token {
        self.advance(); // opening "

        let mut text = String::new();
        loop {
            match self.peek() {
                None => {
                    return Token::new(
                        TokenKind::Invalid,
                        "unclosed string: end-of-input reached",
                    );
                }
                Some('"') => {
                    self.advance();
                    return Token::new(TokenKind::String, text);
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some(escaped @ ('"' | '\\')) => {
                            self.advance();
                            text.push(escaped);
                        }
                        _ => {
                            return Token::new(
                                TokenKind::Invalid,
                                "invalid escape character in string",
                            );
                        }
                    }
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
            }
        }
    }

    /// Scans a number: optional leading minus, digits, and at most one dot.
    /// Digits may sit on either side of the dot (`.23` and `-.88` are valid
    /// floats), but at least one digit must be present.
    fn scan_number(&mut self) -> Token {
        let mut text = String::new();

        if self.peek() == Some('-') {
            self.advance();
            text.push('-');
        }

        let mut dot = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
                text.push(c);
            } else if c == '.' {
                if dot {
                    return Token::new(TokenKind::Invalid, "number with more than one dot");
                }
                dot = true;
                self.advance();
                text.push(c);
            } else {
                break;
            }
        }

        if !text.chars().any(|c| c.is_ascii_digit()) {
            return Token::new(TokenKind::Invalid, format!("number without digits: {text}"));
        }

        if dot {
            Token::new(TokenKind::Float, text)
        } else {
            Token::new(TokenKind::Integer, text)
        }
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn advance(&mut self) {
        self.current += 1;
    }
}
