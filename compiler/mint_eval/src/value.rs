//! Runtime values.

use std::fmt;

/// Result of evaluating any node.
///
/// Integers are the only type arithmetic and conditions understand. Text
/// exists so `print` can branch on what an expression produced rather than
/// on which node produced it; in numeric position it reads as `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl Value {
    /// Value of statements, which produce nothing observable.
    pub const UNIT: Value = Value::Int(0);

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Integer view used by operators and conditions. Text reads as `0`.
    #[inline]
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            Value::Str(_) => 0,
        }
    }

    /// Zero is false, everything else is true.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        self.as_int() != 0
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::UNIT
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

/// The text `print` emits: decimal for integers, raw text for strings.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}
