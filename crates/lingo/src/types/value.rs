use std::fmt::{Display, Formatter, Result as FmtResult};

/// A renderable value substituted into `${key}` template placeholders.
///
/// Provides a small dynamic type for insert values so numbers, floats, and
/// strings can be passed interchangeably.
///
/// # Example
///
/// ```
/// use lingo::Value;
///
/// let count: Value = 42.into();
/// assert_eq!(count.to_string(), "42");
///
/// let name: Value = "Alice".into();
/// assert_eq!(name.as_string(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is one.
    ///
    /// Numbers convert losslessly; strings do not parse.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            Value::String(_) => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
