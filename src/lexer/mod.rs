//! Lexical analysis: source text to tokens

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenKind};
pub use tokenizer::{is_symbol_character, Tokenizer};
