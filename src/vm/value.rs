#[cfg(test)]
pub mod arbitrary;

use std::fmt;

/// Runtime representation of values.
///
/// The set of shapes is closed. Booleans and null are canonical singletons:
/// every `OpTrue`, `OpFalse` and `OpNull` pushes the same constant, and all
/// boolean results go through [`boolean`], so equality on non-integers is
/// identity of the singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
}

pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);
pub const NULL: Value = Value::Null;

/// Type tags, printed the way they appear in runtime error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Integer,
    Boolean,
    Null,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Integer => f.write_str("INTEGER"),
            Type::Boolean => f.write_str("BOOLEAN"),
            Type::Null => f.write_str("NULL"),
        }
    }
}

impl Value {
    pub fn value_type(&self) -> Type {
        match self {
            Value::Integer(_) => Type::Integer,
            Value::Boolean(_) => Type::Boolean,
            Value::Null => Type::Null,
        }
    }

    /// The printable form shown by the REPL.
    pub fn inspect(&self) -> String {
        match self {
            Value::Integer(value) => value.to_string(),
            Value::Boolean(value) => value.to_string(),
            Value::Null => String::from("null"),
        }
    }

    /// Everything is truthy except `false` and `null`. Note that `0` is.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(value) => *value,
            Value::Null => false,
            Value::Integer(_) => true,
        }
    }
}

/// Route boolean results through the canonical singletons.
#[inline]
pub fn boolean(value: bool) -> Value {
    if value {
        TRUE
    } else {
        FALSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect() {
        assert_eq!(Value::Integer(42).inspect(), "42");
        assert_eq!(Value::Integer(-7).inspect(), "-7");
        assert_eq!(TRUE.inspect(), "true");
        assert_eq!(FALSE.inspect(), "false");
        assert_eq!(NULL.inspect(), "null");
    }

    #[test]
    fn test_truthiness() {
        assert!(TRUE.is_truthy());
        assert!(!FALSE.is_truthy());
        assert!(!NULL.is_truthy());
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::Integer(-1).is_truthy());
    }

    #[test]
    fn test_type_tags_display_as_error_message_fragments() {
        assert_eq!(Value::Integer(1).value_type().to_string(), "INTEGER");
        assert_eq!(TRUE.value_type().to_string(), "BOOLEAN");
        assert_eq!(NULL.value_type().to_string(), "NULL");
    }
}
