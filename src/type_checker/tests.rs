use crate::{
    errors::errors::TypecheckerError,
    lexer::lexer::Tokenizer,
    parser::parser::parse,
    Position,
};

use super::{
    type_checker::{type_check, TypeChecker},
    types::Type,
};

fn check_source(source: &str) -> Result<TypeChecker, TypecheckerError> {
    let mut tokenizer = Tokenizer::new(source.as_bytes());
    let prog = parse(&mut tokenizer).unwrap();
    tokenizer.close();
    type_check(&prog)
}

fn mismatch(expected: &str, found: &str) -> TypecheckerError {
    TypecheckerError::Mismatch {
        expected: String::from(expected),
        found: String::from(found),
    }
}

#[test]
fn test_check_equal_structural() {
    let list = Type::list_of(Type::Int);

    assert_eq!(list.check_equal(&Type::list_of(Type::Int)), Ok(list.clone()));
    assert_eq!(
        list.check_equal(&Type::list_of(Type::Bool)),
        Err(mismatch("int list", "bool list"))
    );
}

#[test]
fn test_check_equal_names_expected_and_found() {
    assert_eq!(Type::Int.check_equal(&Type::Bool), Err(mismatch("int", "bool")));
}

#[test]
fn test_get_list_elem_type() {
    let nested = Type::list_of(Type::list_of(Type::Bool));

    assert_eq!(nested.get_list_elem_type(), Ok(&Type::list_of(Type::Bool)));
    assert_eq!(Type::Int.get_list_elem_type(), Err(mismatch("list", "int")));
}

#[test]
fn test_get_option_elem_type() {
    assert_eq!(Type::option_of(Type::Int).get_option_elem_type(), Ok(&Type::Int));
    assert_eq!(
        Type::list_of(Type::Int).get_option_elem_type(),
        Err(mismatch("opt", "int list"))
    );
}

#[test]
fn test_type_display() {
    assert_eq!(Type::String.to_string(), "string");
    assert_eq!(Type::option_of(Type::list_of(Type::Int)).to_string(), "int list opt");
}

#[test]
fn test_declarations_record_types() {
    let checker = check_source("var n = 1 + 2; var b = n == 3; var xs = [n, 4]; var xss = [xs]").unwrap();

    assert_eq!(checker.fetch_variable_type("n"), Some(&Type::Int));
    assert_eq!(checker.fetch_variable_type("b"), Some(&Type::Bool));
    assert_eq!(checker.fetch_variable_type("xs"), Some(&Type::list_of(Type::Int)));
    assert_eq!(
        checker.fetch_variable_type("xss"),
        Some(&Type::list_of(Type::list_of(Type::Int)))
    );
    assert_eq!(checker.fetch_variable_type("missing"), None);
}

#[test]
fn test_prefix_extends_list_type() {
    let checker = check_source("var xs = true :: [false]").unwrap();

    assert_eq!(checker.fetch_variable_type("xs"), Some(&Type::list_of(Type::Bool)));
}

#[test]
fn test_prefix_element_mismatch() {
    assert_eq!(
        check_source("var xs = 1 :: [true]").unwrap_err(),
        mismatch("bool", "int")
    );
}

#[test]
fn test_prefix_onto_non_list() {
    assert_eq!(check_source("print 1 :: 2").unwrap_err(), mismatch("list", "int"));
}

#[test]
fn test_heterogeneous_list_literal() {
    assert_eq!(check_source("print [1, true]").unwrap_err(), mismatch("int", "bool"));
}

#[test]
fn test_arithmetic_requires_int() {
    assert_eq!(check_source("print 1 + true").unwrap_err(), mismatch("int", "bool"));
    assert_eq!(check_source("print -false").unwrap_err(), mismatch("int", "bool"));
}

#[test]
fn test_logic_requires_bool() {
    assert_eq!(check_source("print true && 1").unwrap_err(), mismatch("bool", "int"));
    assert_eq!(check_source("print !0").unwrap_err(), mismatch("bool", "int"));
}

#[test]
fn test_equality_requires_same_type() {
    assert!(check_source("print [1] == [2]").is_ok());
    assert_eq!(check_source("print 1 == false").unwrap_err(), mismatch("int", "bool"));
}

#[test]
fn test_assignment_keeps_declared_type() {
    assert!(check_source("var x = 1; x = x * 2").is_ok());
    assert_eq!(check_source("var x = 1; x = [1]").unwrap_err(), mismatch("int", "int list"));
}

#[test]
fn test_undeclared_variable() {
    assert_eq!(
        check_source("var x = 1;\nprint y").unwrap_err(),
        TypecheckerError::UndeclaredVariable {
            name: String::from("y"),
            position: Position::new(2, 7),
        }
    );
    assert!(matches!(
        check_source("y = 1").unwrap_err(),
        TypecheckerError::UndeclaredVariable { .. }
    ));
}

#[test]
fn test_redeclaration_in_same_scope() {
    assert_eq!(
        check_source("var x = 1; var x = 2").unwrap_err(),
        TypecheckerError::AlreadyDeclared {
            name: String::from("x"),
            position: Position::new(1, 16),
        }
    );
}

#[test]
fn test_for_each_binds_element_type() {
    assert!(check_source("var total = 0; for x : [1, 2] { total = total + x }").is_ok());
    assert_eq!(
        check_source("for x : [true] { print x + 1 }").unwrap_err(),
        mismatch("int", "bool")
    );
}

#[test]
fn test_for_each_over_non_list() {
    assert_eq!(check_source("for x : 3 { print x }").unwrap_err(), mismatch("list", "int"));
}

#[test]
fn test_for_each_scope_ends_with_block() {
    let checker = check_source("for x : [1] { var y = x }; var y = true").unwrap();

    assert_eq!(checker.fetch_variable_type("x"), None);
    assert_eq!(checker.fetch_variable_type("y"), Some(&Type::Bool));
}

#[test]
fn test_loop_variable_shadows_outer() {
    assert!(check_source("var x = true; for x : [1] { print x * 2 }; print !x").is_ok());
}
