//! Runtime values.
//!
//! Each `as_*` accessor narrows to one shape and fails with
//! `ValueError::ShapeMismatch` on any other; nothing is coerced.

use std::fmt::Display;

use crate::errors::errors::ValueError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    String(String),
    List(ListValue),
    Option(Option<Box<Value>>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListValue(Vec<Value>);

impl ListValue {
    pub fn new(items: Vec<Value>) -> Self {
        ListValue(items)
    }

    /// A new list with `head` in front of this one's items.
    pub fn prepend(&self, head: Value) -> ListValue {
        let mut items = Vec::with_capacity(self.0.len() + 1);
        items.push(head);
        items.extend(self.0.iter().cloned());
        ListValue(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ListValue {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for ListValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl Value {
    /// The name of this value's shape, as used in mismatch errors.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "an integer",
            Value::Bool(_) => "a boolean",
            Value::String(_) => "a string",
            Value::List(_) => "a list",
            Value::Option(_) => "an opt",
        }
    }

    fn mismatch(&self, expected: &'static str) -> ValueError {
        ValueError::ShapeMismatch {
            expected,
            found: self.shape_name(),
        }
    }

    pub fn as_int(&self) -> Result<i64, ValueError> {
        match self {
            Value::Int(value) => Ok(*value),
            _ => Err(self.mismatch("an integer")),
        }
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Value::Bool(value) => Ok(*value),
            _ => Err(self.mismatch("a boolean")),
        }
    }

    pub fn as_string(&self) -> Result<&str, ValueError> {
        match self {
            Value::String(value) => Ok(value),
            _ => Err(self.mismatch("a string")),
        }
    }

    pub fn as_list(&self) -> Result<&ListValue, ValueError> {
        match self {
            Value::List(value) => Ok(value),
            _ => Err(self.mismatch("a list")),
        }
    }

    /// The value inside a non-empty opt.
    pub fn unwrap_option(&self) -> Result<&Value, ValueError> {
        match self {
            Value::Option(Some(value)) => Ok(value),
            Value::Option(None) => Err(ValueError::EmptyOption),
            _ => Err(self.mismatch("an opt")),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{}", value),
            Value::List(list) => write!(f, "{}", list),
            Value::Option(Some(value)) => write!(f, "opt {}", value),
            Value::Option(None) => write!(f, "empty"),
        }
    }
}
