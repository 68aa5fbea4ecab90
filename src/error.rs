//! Error types for the lisparser pipeline

use thiserror::Error;

/// Errors produced by the tokenizer, parser, and macro engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // IO errors
    /// Reading a source file failed
    ///
    /// **Triggered by:** `Tokenizer::from_file` / `Parser::from_file` on an
    /// unreadable path
    #[error("IO error: {0}")]
    Io(String),

    // Syntax errors
    /// A lexical error surfaced while parsing
    ///
    /// **Triggered by:** Invalid escape sequences, unterminated strings,
    /// malformed numbers, or unrecognized characters
    /// **Example:** `(. )`, `"abc`, `15.8.9`
    #[error("tokenizer error: {0}")]
    TokenizerException(String),

    /// A comma was not followed by a symbol
    ///
    /// **Triggered by:** `,` in front of anything but a symbol
    /// **Example:** `(,)`, `,123`
    #[error("bad eval form: ',' must be followed by a symbol")]
    BadEvalForm,

    /// A list was still open when the input ended
    ///
    /// **Example:** `(() ()`
    #[error("unmatched parenthesis")]
    UnmatchedParenthesis,

    /// A token that cannot start a form appeared at form position
    ///
    /// **Example:** a stray `)` at top level
    #[error("unrecognizable token: {0}")]
    UnrecognizableToken(String),

    /// A number literal the decimal parser rejected
    ///
    /// **Triggered by:** Integer literals outside the i64 range
    #[error("malformed number literal: {0}")]
    MalformedNumber(String),

    // Macro acquisition errors
    /// A macro definition that is not a list
    #[error("macro definition should be in list form")]
    MacroFormNotList,

    /// A macro definition whose first element is not the symbol `defmacro`
    #[error("macro definition should start with 'defmacro'")]
    MissingDefmacroHead,

    /// A defmacro form with the wrong number of elements
    ///
    /// **Expected shape:** `(defmacro :name (params...) body)`
    #[error("defmacro form should be of length 4")]
    BadDefmacroLength,

    /// A macro name that is not a keyword
    #[error("macro name should be a keyword")]
    MacroNameNotKeyword,

    /// A defmacro parameter list that is not a list
    #[error("macro parameters should be in list form in macro [{name}]")]
    MacroParametersNotList {
        /// Macro name (keyword text)
        name: String,
    },

    /// A parameter list element that is not a symbol
    #[error("{element} is not a valid macro argument in macro [{name}]")]
    InvalidMacroArgument {
        /// Macro name (keyword text)
        name: String,
        /// Rendered offending element
        element: String,
    },

    /// The same parameter declared twice
    #[error("duplicate argument '{argument}' in macro [{name}]")]
    DuplicateMacroArgument {
        /// Macro name (keyword text)
        name: String,
        /// The repeated parameter
        argument: String,
    },

    /// A `,reference` in the body that names no declared parameter
    #[error("',{variable}' is not in the lambda list in macro [{name}]")]
    UnboundEvalForm {
        /// Macro name (keyword text)
        name: String,
        /// The unbound variable reference
        variable: String,
    },

    // Macro evaluation errors
    /// An invocation with the wrong number of arguments
    ///
    /// **Example:** `(:plus 1)` against `(defmacro :plus (a b) ...)`
    #[error("signature mismatch in macro [{name}]: wanted {wanted} argument(s), provided {provided}")]
    SignatureMismatch {
        /// Macro name (keyword text)
        name: String,
        /// Declared parameter count
        wanted: usize,
        /// Arguments actually supplied
        provided: usize,
    },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type for lisparser operations
pub type Result<T> = std::result::Result<T, Error>;
