use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::parser::Ast;

/// A registered template macro.
///
/// `parameters` maps each declared parameter name to its 1-based position in
/// an invocation list; position 0 of an invocation is the macro-name keyword
/// itself, so the Nth declared parameter binds the Nth argument expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Macro {
    /// Keyword text naming the macro, e.g. `:plus`
    pub name: String,
    /// Parameter name to 1-based invocation position
    pub parameters: HashMap<String, usize>,
    /// Template body; every `,reference` inside names a declared parameter
    pub body: Ast,
}

/// Returns true if the form looks like a macro definition: a list headed by
/// the symbol `defmacro`. The form is not otherwise validated; feed it to
/// [`Macro::from_form`] or `Engine::acquire` for that.
pub fn is_macro_definition(form: &Ast) -> bool {
    let Ast::List(items) = form else {
        return false;
    };
    matches!(items.first(), Some(Ast::Symbol(head)) if head == "defmacro")
}

impl Macro {
    /// Validates a `(defmacro :name (params...) body)` form and builds the
    /// macro it defines. Every check fails closed; the first violation is
    /// returned and nothing is constructed.
    pub fn from_form(form: Ast) -> Result<Macro> {
        let Ast::List(items) = form else {
            return Err(Error::MacroFormNotList);
        };

        match items.first() {
            Some(Ast::Symbol(head)) if head == "defmacro" => {}
            _ => return Err(Error::MissingDefmacroHead),
        }

        let Ok([_head, name_form, params_form, body]) = <[Ast; 4]>::try_from(items) else {
            return Err(Error::BadDefmacroLength);
        };

        let Ast::Keyword(name) = name_form else {
            return Err(Error::MacroNameNotKeyword);
        };

        let parameters = collect_parameters(&name, params_form)?;
        check_body(&name, &parameters, &body)?;

        Ok(Macro {
            name,
            parameters,
            body,
        })
    }
}

/// Builds the parameter map from the declared parameter list, assigning
/// 1-based positions in list order.
fn collect_parameters(name: &str, params: Ast) -> Result<HashMap<String, usize>> {
    let Ast::List(declared) = params else {
        return Err(Error::MacroParametersNotList {
            name: name.to_string(),
        });
    };

    let mut parameters = HashMap::new();
    for (index, param) in declared.into_iter().enumerate() {
        match param {
            Ast::Symbol(symbol) => {
                if parameters.insert(symbol.clone(), index + 1).is_some() {
                    return Err(Error::DuplicateMacroArgument {
                        name: name.to_string(),
                        argument: symbol,
                    });
                }
            }
            other => {
                return Err(Error::InvalidMacroArgument {
                    name: name.to_string(),
                    element: other.to_string(),
                });
            }
        }
    }

    Ok(parameters)
}

/// Recursively verifies that every `,reference` in the body names a declared
/// parameter. Non-eval-form atoms are ignored.
fn check_body(name: &str, parameters: &HashMap<String, usize>, body: &Ast) -> Result<()> {
    match body {
        Ast::EvalForm(variable) => {
            if !parameters.contains_key(variable) {
                return Err(Error::UnboundEvalForm {
                    name: name.to_string(),
                    variable: variable.clone(),
                });
            }
            Ok(())
        }
        Ast::List(items) => {
            for item in items {
                check_body(name, parameters, item)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
