
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Value
///
/// Dynamic form of a stored field value.
/// Every typed field converts to and from exactly one variant.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Decimal(Decimal),
    Float64(f64),
    Int(i64),
    Text(String),
    Uint(u64),
}

impl Value {
    /// Short, stable label for the variant (used in diagnostics).
    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Decimal(_) => "decimal",
            Self::Float64(_) => "float64",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Uint(_) => "uint",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}
