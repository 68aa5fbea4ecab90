//! Syntactic analysis: tokens to S-expression trees

pub mod ast;
pub mod sexpr_parser;

pub use ast::Ast;
pub use sexpr_parser::Parser;
