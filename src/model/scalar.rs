use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Scalar leaf values: usable as mapping keys, option values and table
/// cells. Floats are wrapped so scalars stay Eq + Hash.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Text(String),
}

impl Scalar {
    /// Numeric view of the scalar, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(value) => Some(*value as f64),
            Scalar::Float(value) => Some(value.into_inner()),
            _ => None,
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}
impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}
impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}
impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(OrderedFloat(value))
    }
}
impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}
impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// Key tuple for ndmapping-style containers (HoloMap, NdLayout, ...).
pub type MapKey = Vec<Scalar>;

/// Render a key tuple the way it shows up in failure messages.
pub fn format_key(key: &MapKey) -> String {
    format!("({})", key.iter().join(", "))
}
