//! Static types.
//!
//! `Type` mirrors the shapes of `Value` at the static level. Narrowing to a
//! shape the type does not have fails with a `TypecheckerError::Mismatch`
//! naming what was expected and what was found.

use std::fmt::Display;

use crate::errors::errors::TypecheckerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Bool,
    String,
    List(Box<Type>),
    Option(Box<Type>),
}

impl Type {
    pub const LIST_NAME: &'static str = "list";
    pub const OPTION_NAME: &'static str = "opt";

    pub fn list_of(elem: Type) -> Type {
        Type::List(Box::new(elem))
    }

    pub fn option_of(elem: Type) -> Type {
        Type::Option(Box::new(elem))
    }

    /// Succeeds with `self` when `found` is structurally equal to it.
    pub fn check_equal(&self, found: &Type) -> Result<Type, TypecheckerError> {
        if self != found {
            return Err(TypecheckerError::mismatch(self, found));
        }
        Ok(self.clone())
    }

    pub fn get_list_elem_type(&self) -> Result<&Type, TypecheckerError> {
        match self {
            Type::List(elem) => Ok(elem),
            _ => Err(TypecheckerError::mismatch(Type::LIST_NAME, self)),
        }
    }

    pub fn get_option_elem_type(&self) -> Result<&Type, TypecheckerError> {
        match self {
            Type::Option(elem) => Ok(elem),
            _ => Err(TypecheckerError::mismatch(Type::OPTION_NAME, self)),
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "bool"),
            Type::String => write!(f, "string"),
            Type::List(elem) => write!(f, "{} {}", elem, Type::LIST_NAME),
            Type::Option(elem) => write!(f, "{} {}", elem, Type::OPTION_NAME),
        }
    }
}
