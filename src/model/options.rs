use crate::model::scalar::Scalar;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Keyword settings attached to plots: name -> scalar value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    pub kwargs: IndexMap<String, Scalar>,
}

impl Options {
    pub fn new(kwargs: IndexMap<String, Scalar>) -> Self {
        Options { kwargs }
    }

    pub fn set<V: Into<Scalar>>(mut self, name: &str, value: V) -> Self {
        self.kwargs.insert(name.to_string(), value.into());
        self
    }
}

impl Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Options(")?;
        for (i, (name, value)) in self.kwargs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, ")")
    }
}
