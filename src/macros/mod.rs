//! Template macro system: registration and hierarchical expansion.
//!
//! Macros are purely syntactic transformations over the AST. A
//! `(defmacro :name (params...) body)` form registers a template; evaluating
//! a tree rewrites every `(:name args...)` invocation bottom-up by
//! substituting the argument sub-trees into the body wherever a `,param`
//! reference occurs. Substitution is non-hygienic by design: no symbol
//! renaming happens, so collisions between a macro's internal symbols and a
//! caller's are possible.

pub mod definition;
pub mod engine;

pub use definition::{is_macro_definition, Macro};
pub use engine::Engine;
