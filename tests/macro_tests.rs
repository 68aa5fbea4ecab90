//! End-to-end tests for the macro system: parse, acquire, evaluate

use lisparser::{Ast, Engine, Error, Parser};

fn parse_one(source: &str) -> Ast {
    Parser::new(source).next_form().unwrap().unwrap()
}

#[test]
fn test_acquire_then_evaluate() {
    let mut engine = Engine::new();
    engine
        .acquire(parse_one("(defmacro :plus (a b) (+ ,a ,b))"))
        .unwrap();

    let result = engine
        .evaluate(&parse_one("(:plus (:plus 12 13) (:plus 11.5 11.6))"))
        .unwrap();
    assert_eq!(result, parse_one("(+ (+ 12 13) (+ 11.5 11.6))"));
}

#[test]
fn test_duplicate_parameter_fails_acquisition() {
    let mut engine = Engine::new();
    let err = engine
        .acquire(parse_one("(defmacro :plus (a a) (+ ,a ,a))"))
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("duplicate argument 'a'"));
    assert!(message.contains(":plus"));
    assert!(engine.is_empty());
}

#[test]
fn test_signature_mismatch_names_counts() {
    let mut engine = Engine::new();
    engine
        .acquire(parse_one("(defmacro :plus (a b) (+ ,a ,b))"))
        .unwrap();

    let err = engine.evaluate(&parse_one("(:plus 1)")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains(":plus"));
    assert!(message.contains("wanted 2"));
    assert!(message.contains("provided 1"));
}

#[test]
fn test_hierarchical_expansion_reaches_macro_free_tree() {
    let mut engine = Engine::new();
    engine
        .acquire(parse_one("(defmacro :pair (x y) (cons ,x ,y))"))
        .unwrap();
    engine
        .acquire(parse_one("(defmacro :single (x) (:pair ,x nil))"))
        .unwrap();
    engine
        .acquire(parse_one("(defmacro :boxed (x) (:single (box ,x)))"))
        .unwrap();

    let result = engine.evaluate(&parse_one("(:boxed 42)")).unwrap();
    assert_eq!(result, parse_one("(cons (box 42) nil)"));

    fn macro_free(engine: &Engine, ast: &Ast) -> bool {
        match ast {
            Ast::List(items) => {
                if let Some(Ast::Keyword(head)) = items.first() {
                    if engine.contains(head) {
                        return false;
                    }
                }
                items.iter().all(|item| macro_free(engine, item))
            }
            _ => true,
        }
    }
    assert!(macro_free(&engine, &result));
}

#[test]
fn test_evaluate_does_not_mutate_input() {
    let mut engine = Engine::new();
    engine
        .acquire(parse_one("(defmacro :inc (x) (+ ,x 1))"))
        .unwrap();

    let form = parse_one("(:inc 5)");
    let before = form.clone();
    let _ = engine.evaluate(&form).unwrap();
    assert_eq!(form, before);
}

#[test]
fn test_unbound_body_reference_names_macro() {
    let mut engine = Engine::new();
    let err = engine
        .acquire(parse_one("(defmacro :plus (a b) (+ ,a ,c))"))
        .unwrap_err();
    assert_eq!(
        err,
        Error::UnboundEvalForm {
            name: ":plus".to_string(),
            variable: "c".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "',c' is not in the lambda list in macro [:plus]"
    );
}

#[test]
fn test_expand_source_full_pipeline() {
    let mut engine = Engine::new();
    let forms = engine
        .expand_source(
            "(defmacro :when (test body) (if ,test ,body nil))\n\
             (defmacro :unless (test body) (:when (not ,test) ,body))\n\
             (:unless ready (start over))",
        )
        .unwrap();

    assert_eq!(engine.len(), 2);
    assert_eq!(forms, vec![parse_one("(if (not ready) (start over) nil)")]);
}

#[test]
fn test_zero_parameter_macro() {
    let mut engine = Engine::new();
    engine
        .acquire(parse_one("(defmacro :nothing () (list))"))
        .unwrap();

    assert_eq!(
        engine.evaluate(&parse_one("(:nothing)")).unwrap(),
        parse_one("(list)")
    );
    assert!(engine.evaluate(&parse_one("(:nothing 1)")).is_err());
}

#[test]
fn test_reacquiring_replaces_definition() {
    let mut engine = Engine::new();
    engine
        .acquire(parse_one("(defmacro :twice (x) (* 2 ,x))"))
        .unwrap();
    engine
        .acquire(parse_one("(defmacro :twice (x) (+ ,x ,x))"))
        .unwrap();

    assert_eq!(engine.len(), 1);
    assert_eq!(
        engine.evaluate(&parse_one("(:twice 3)")).unwrap(),
        parse_one("(+ 3 3)")
    );
}
