use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute tolerance for float equality
const FLOAT_EPSILON: f64 = 1e-6;

/// A node in the S-expression tree.
///
/// Atoms carry their decoded payload; a `List` exclusively owns its children,
/// so `clone` always produces a fully independent deep copy and no node is
/// ever shared between two trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Ast {
    /// Keyword such as `:name` (lower-cased, colon retained)
    Keyword(String),
    /// Lower-cased identifier
    Symbol(String),
    /// String literal content, escapes already resolved
    String(String),
    /// Unquote reference `,name` to a macro parameter
    EvalForm(String),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float
    Float(f64),
    /// Ordered children; order and length are significant
    List(Vec<Ast>),
}

impl Ast {
    /// Returns true if this node is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Ast::List(_))
    }

    /// Returns the children if this node is a list
    pub fn as_list(&self) -> Option<&[Ast]> {
        match self {
            Ast::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Structural, variant-aware equality. Two nodes of different variants are
/// never equal; floats compare within an absolute epsilon of `1e-6` rather
/// than bit-exactly; lists compare element-wise with order and arity
/// significant.
impl PartialEq for Ast {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Ast::Keyword(a), Ast::Keyword(b)) => a == b,
            (Ast::Symbol(a), Ast::Symbol(b)) => a == b,
            (Ast::String(a), Ast::String(b)) => a == b,
            (Ast::EvalForm(a), Ast::EvalForm(b)) => a == b,
            (Ast::Integer(a), Ast::Integer(b)) => a == b,
            (Ast::Float(a), Ast::Float(b)) => (a - b).abs() < FLOAT_EPSILON,
            (Ast::List(a), Ast::List(b)) => a == b,
            _ => false,
        }
    }
}

/// Diagnostic rendering, not a file format
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ast::Keyword(text) | Ast::Symbol(text) => write!(f, "{text}"),
            Ast::String(content) => write!(f, "\"{content}\""),
            Ast::EvalForm(variable) => write!(f, ",{variable}"),
            Ast::Integer(value) => write!(f, "{value}"),
            Ast::Float(value) => write!(f, "{value}"),
            Ast::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Ast {
        Ast::List(vec![
            Ast::Keyword(":abc".to_string()),
            Ast::List(vec![
                Ast::Integer(3115),
                Ast::List(vec![Ast::Symbol("xyz".to_string()), Ast::List(vec![])]),
                Ast::Float(4.18),
                Ast::EvalForm("some-variable".to_string()),
            ]),
            Ast::List(vec![]),
        ])
    }

    #[test]
    fn test_clone_is_deep_and_equal() {
        let ast = sample_tree();
        assert_eq!(ast, ast.clone());
    }

    #[test]
    fn test_clone_shares_no_structure() {
        let ast = sample_tree();
        let mut copy = ast.clone();
        if let Ast::List(items) = &mut copy {
            items.push(Ast::Symbol("extra".to_string()));
        }
        assert_ne!(ast, copy);
        assert_eq!(ast, sample_tree());
    }

    #[test]
    fn test_float_epsilon_equality() {
        assert_eq!(Ast::Float(1.0), Ast::Float(1.0 + 1e-9));
        assert_ne!(Ast::Float(1.0), Ast::Float(1.0 + 1e-3));
    }

    #[test]
    fn test_different_variants_never_equal() {
        assert_ne!(Ast::Symbol("a".to_string()), Ast::Keyword("a".to_string()));
        assert_ne!(Ast::Integer(1), Ast::Float(1.0));
        assert_ne!(Ast::String("a".to_string()), Ast::Symbol("a".to_string()));
        assert_ne!(Ast::List(vec![]), Ast::Integer(0));
    }

    #[test]
    fn test_list_equality_respects_order_and_arity() {
        let ab = Ast::List(vec![
            Ast::Symbol("a".to_string()),
            Ast::Symbol("b".to_string()),
        ]);
        let ba = Ast::List(vec![
            Ast::Symbol("b".to_string()),
            Ast::Symbol("a".to_string()),
        ]);
        let a = Ast::List(vec![Ast::Symbol("a".to_string())]);
        assert_ne!(ab, ba);
        assert_ne!(ab, a);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample_tree().to_string(), "(:abc (3115 (xyz ()) 4.18 ,some-variable) ())");
        assert_eq!(Ast::String("a b".to_string()).to_string(), "\"a b\"");
    }
}
