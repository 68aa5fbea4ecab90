use std::path::Path;

use super::ast::Ast;
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind, Tokenizer};

/// Recursive-descent parser producing one top-level [`Ast`] form per call.
///
/// The parser owns its [`Tokenizer`] and pulls from it with one token of
/// lookahead. [`next_form`](Parser::next_form) returns `Ok(None)` once the
/// input is exhausted; any error closes the parser permanently, so later
/// calls are idempotent no-ops that also report `Ok(None)`.
pub struct Parser {
    tokenizer: Tokenizer,
    closed: bool,
}

impl Parser {
    /// Creates a parser over raw source text
    pub fn new(source: &str) -> Self {
        Parser::from_tokenizer(Tokenizer::new(source))
    }

    /// Creates a parser over the contents of a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Parser::from_tokenizer(Tokenizer::from_file(path)?))
    }

    /// Creates a parser over an existing tokenizer
    pub fn from_tokenizer(tokenizer: Tokenizer) -> Self {
        Parser {
            tokenizer,
            closed: false,
        }
    }

    /// Parses and returns the next top-level form.
    ///
    /// Returns `Ok(None)` when the input is exhausted or after a previous
    /// error. The first error anywhere in a nested parse aborts the whole
    /// call; no partial list is ever returned.
    pub fn next_form(&mut self) -> Result<Option<Ast>> {
        if self.closed {
            return Ok(None);
        }

        let token = self.tokenizer.next_token();
        match self.consume_token(token) {
            Ok(form) => Ok(form),
            Err(err) => {
                self.closed = true;
                Err(err)
            }
        }
    }

    /// Consumes one form starting at `start`, pulling further tokens from
    /// the tokenizer as needed. `Ok(None)` means the stream ended before any
    /// form began.
    fn consume_token(&mut self, start: Token) -> Result<Option<Ast>> {
        match start.kind {
            TokenKind::Terminator => {
                self.closed = true;
                Ok(None)
            }

            TokenKind::Invalid => Err(Error::TokenizerException(start.text)),

            TokenKind::Keyword => Ok(Some(Ast::Keyword(start.text))),
            TokenKind::Symbol => Ok(Some(Ast::Symbol(start.text))),
            TokenKind::String => Ok(Some(Ast::String(start.text))),

            TokenKind::Comma => {
                let token = self.tokenizer.next_token();
                if token.kind != TokenKind::Symbol {
                    return Err(Error::BadEvalForm);
                }
                Ok(Some(Ast::EvalForm(token.text)))
            }

            TokenKind::Integer => match start.text.parse::<i64>() {
                Ok(value) => Ok(Some(Ast::Integer(value))),
                Err(_) => Err(Error::MalformedNumber(start.text)),
            },

            TokenKind::Float => match start.text.parse::<f64>() {
                Ok(value) => Ok(Some(Ast::Float(value))),
                Err(_) => Err(Error::MalformedNumber(start.text)),
            },

            TokenKind::OpenParen => {
                let mut items = Vec::new();
                loop {
                    let token = self.tokenizer.next_token();
                    if token.kind == TokenKind::CloseParen {
                        return Ok(Some(Ast::List(items)));
                    }
                    match self.consume_token(token)? {
                        Some(form) => items.push(form),
                        // Stream ended with this list still open.
                        None => return Err(Error::UnmatchedParenthesis),
                    }
                }
            }

            TokenKind::CloseParen => Err(Error::UnrecognizableToken(start.to_string())),
        }
    }
}
