use crate::model::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A named axis of an element. Only the fields below take part in
/// equality checks, in declaration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub cyclic: bool,
    /// Soft bounds as (lower, upper); None leaves the end open.
    pub range: (Option<f64>, Option<f64>),
    pub unit: Option<String>,
    /// Explicitly declared sample values, if any.
    pub values: Vec<Scalar>,
    pub format_string: String,
}

impl Dimension {
    pub fn new(name: &str) -> Self {
        Dimension {
            name: name.to_string(),
            cyclic: false,
            range: (None, None),
            unit: None,
            values: Vec::new(),
            format_string: "{name}: {val}{unit}".to_string(),
        }
    }

    pub fn with_range(mut self, lower: f64, upper: f64) -> Self {
        self.range = (Some(lower), Some(upper));
        self
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn cyclic(mut self) -> Self {
        self.cyclic = true;
        self
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} ({unit})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl From<&str> for Dimension {
    fn from(name: &str) -> Self {
        Dimension::new(name)
    }
}

/// The labelled, dimensioned base every element carries: a group
/// label, an element label and the key/value dimension lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementMeta {
    pub group: String,
    pub label: String,
    pub key_dimensions: Vec<Dimension>,
    pub value_dimensions: Vec<Dimension>,
}

impl ElementMeta {
    pub fn new(group: &str) -> Self {
        ElementMeta {
            group: group.to_string(),
            label: String::new(),
            key_dimensions: Vec::new(),
            value_dimensions: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_key_dimensions<D: Into<Dimension>>(
        mut self,
        dimensions: impl IntoIterator<Item = D>,
    ) -> Self {
        self.key_dimensions =
            dimensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_value_dimensions<D: Into<Dimension>>(
        mut self,
        dimensions: impl IntoIterator<Item = D>,
    ) -> Self {
        self.value_dimensions =
            dimensions.into_iter().map(Into::into).collect();
        self
    }
}
