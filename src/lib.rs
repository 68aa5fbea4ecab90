//! # lisparser
//!
//! A LISP-style S-expression parser with a template macro engine.
//!
//! The crate reads textual S-expressions into a tree representation and
//! applies user-defined, template-style macros to rewrite that tree before
//! further use (for example evaluation by a downstream interpreter, which is
//! out of scope here).
//!
//! ## Architecture
//!
//! ```text
//! Source text → Tokenizer → Tokens → Parser → AST → Engine → macro-free AST
//! ```
//!
//! - [`Tokenizer`] - produces one token per call with one character of
//!   lookahead (LL(1))
//! - [`Parser`] - recursive-descent consumer of the tokenizer, one top-level
//!   form per call
//! - [`Ast`] - the closed set of node variants with structural equality,
//!   deep copy, and diagnostic rendering
//! - [`Engine`] - registers `defmacro` forms and expands macro invocations
//!   recursively, bottom-up
//!
//! ## Quick start
//!
//! ```rust
//! use lisparser::{Engine, Parser};
//!
//! # fn main() -> lisparser::Result<()> {
//! let mut parser = Parser::new(
//!     "(defmacro :plus (a b) (+ ,a ,b)) (:plus 12 13)",
//! );
//! let mut engine = Engine::new();
//!
//! let definition = parser.next_form()?.expect("a defmacro form");
//! engine.acquire(definition)?;
//!
//! let invocation = parser.next_form()?.expect("an invocation");
//! let expanded = engine.evaluate(&invocation)?;
//! assert_eq!(expanded.to_string(), "(+ 12 13)");
//! # Ok(())
//! # }
//! ```
//!
//! Or let the engine drive the whole pipeline:
//!
//! ```rust
//! use lisparser::Engine;
//!
//! # fn main() -> lisparser::Result<()> {
//! let mut engine = Engine::new();
//! let forms = engine.expand_source(
//!     "(defmacro :greet (name) (print \"hello\" ,name))
//!      (:greet world)",
//! )?;
//! assert_eq!(forms.len(), 1);
//! assert_eq!(forms[0].to_string(), "(print \"hello\" world)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! Every fallible operation returns [`Result`]; the first error at any
//! nesting level aborts the enclosing call, so callers never see a partial
//! AST or a partially mutated macro table:
//!
//! ```rust
//! use lisparser::{Error, Parser};
//!
//! let mut parser = Parser::new("(() ()");
//! assert_eq!(parser.next_form(), Err(Error::UnmatchedParenthesis));
//! // The parser is closed for good after an error.
//! assert_eq!(parser.next_form(), Ok(None));
//! ```
//!
//! ## Limitations
//!
//! Macro expansion is non-hygienic plain substitution, there is no
//! expansion-cycle detection (a self-recursive macro diverges), and nothing
//! here is thread-safe; see the [`macros`] module docs.

/// Version of the lisparser crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod macros;
pub mod parser;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Token, TokenKind, Tokenizer};
pub use macros::{is_macro_definition, Engine, Macro};
pub use parser::{Ast, Parser};
