use std::collections::HashMap;

use super::definition::{is_macro_definition, Macro};
use crate::error::{Error, Result};
use crate::parser::{Ast, Parser};

/// Macro registration and expansion over S-expression trees.
///
/// One engine owns one macro table. The table grows only through successful
/// [`acquire`](Engine::acquire) calls and never shrinks;
/// [`evaluate`](Engine::evaluate) only reads it. The engine exposes no
/// internal locking; callers that need concurrent registration and
/// evaluation must serialize access externally.
///
/// Expansion is non-hygienic plain substitution and has no cycle detection:
/// a macro whose expansion recurses into itself diverges, and avoiding such
/// cycles is the caller's responsibility.
#[derive(Debug, Default)]
pub struct Engine {
    /// Macro table keyed by keyword text, e.g. ":plus"
    macros: HashMap<String, Macro>,
}

impl Engine {
    /// Creates an engine with an empty macro table
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered macros
    pub fn len(&self) -> usize {
        self.macros.len()
    }

    /// Returns true if no macro has been registered
    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    /// Returns true if a macro with the given keyword name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    /// Validates a `(defmacro :name (params...) body)` form and registers
    /// the macro it defines.
    ///
    /// The table is left untouched on any validation failure. Re-acquiring
    /// an existing name replaces the earlier definition.
    pub fn acquire(&mut self, form: Ast) -> Result<()> {
        let macro_def = Macro::from_form(form)?;
        tracing::debug!(name = %macro_def.name, "registered macro");
        self.macros.insert(macro_def.name.clone(), macro_def);
        Ok(())
    }

    /// Expands every registered macro invocation in `form`, bottom-up.
    ///
    /// Children are evaluated first; if the rebuilt list is then headed by a
    /// keyword naming a registered macro, the invocation is arity-checked,
    /// expanded, and the expansion is evaluated again, so macros expanding
    /// into other macro invocations reduce fully in one call. Atoms and
    /// non-macro lists come back as deep copies, untouched.
    pub fn evaluate(&self, form: &Ast) -> Result<Ast> {
        let Ast::List(items) = form else {
            return Ok(form.clone());
        };

        let mut evaluated = Vec::with_capacity(items.len());
        for item in items {
            evaluated.push(self.evaluate(item)?);
        }

        if let Some(Ast::Keyword(head)) = evaluated.first() {
            if let Some(macro_def) = self.macros.get(head) {
                let wanted = macro_def.parameters.len();
                let provided = evaluated.len() - 1;
                if wanted != provided {
                    return Err(Error::SignatureMismatch {
                        name: macro_def.name.clone(),
                        wanted,
                        provided,
                    });
                }

                tracing::debug!(name = %macro_def.name, "expanding macro");
                let expanded = substitute(&macro_def.body, &macro_def.parameters, &evaluated);
                return self.evaluate(&expanded);
            }
        }

        Ok(Ast::List(evaluated))
    }

    /// Runs the whole pipeline over a source string: parses every top-level
    /// form, routes defmacro forms through [`acquire`](Engine::acquire) and
    /// everything else through [`evaluate`](Engine::evaluate), and collects
    /// the expanded forms. The first error aborts.
    pub fn expand_source(&mut self, source: &str) -> Result<Vec<Ast>> {
        let mut parser = Parser::new(source);
        let mut output = Vec::new();

        while let Some(form) = parser.next_form()? {
            if is_macro_definition(&form) {
                self.acquire(form)?;
            } else {
                output.push(self.evaluate(&form)?);
            }
        }

        Ok(output)
    }
}

/// Rebuilds the macro body with each `,reference` replaced by a deep copy of
/// the argument at its declared invocation position.
fn substitute(body: &Ast, parameters: &HashMap<String, usize>, invocation: &[Ast]) -> Ast {
    match body {
        Ast::EvalForm(variable) => {
            // Acquisition proved every body reference bound; a miss here is
            // a logic bug, not an input problem.
            let position = parameters
                .get(variable)
                .copied()
                .expect("eval-form binding verified during acquisition");
            invocation[position].clone()
        }
        Ast::List(items) => Ast::List(
            items
                .iter()
                .map(|item| substitute(item, parameters, invocation))
                .collect(),
        ),
        atom => atom.clone(),
    }
}
