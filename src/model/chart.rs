use crate::model::array::DataArray;
use crate::model::dimension::ElementMeta;
use serde::{Deserialize, Serialize};

/// Continuous curve of (x, y) samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub meta: ElementMeta,
    pub data: DataArray,
}

impl Curve {
    pub fn new(data: DataArray) -> Self {
        Curve {
            meta: ElementMeta::new("Curve")
                .with_key_dimensions(["x"])
                .with_value_dimensions(["y"]),
            data,
        }
    }
}

/// Scattered (x, y) samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Points {
    pub meta: ElementMeta,
    pub data: DataArray,
}

impl Points {
    pub fn new(data: DataArray) -> Self {
        Points {
            meta: ElementMeta::new("Points").with_key_dimensions(["x", "y"]),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.rows() == 0
    }
}

/// (x, y, angle, magnitude) samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VectorField {
    pub meta: ElementMeta,
    pub data: DataArray,
}

impl VectorField {
    pub fn new(data: DataArray) -> Self {
        VectorField {
            meta: ElementMeta::new("VectorField")
                .with_key_dimensions(["x", "y"]),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.rows() == 0
    }
}

/// Binned values with one more edge than bins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub meta: ElementMeta,
    pub edges: DataArray,
    pub values: DataArray,
}

impl Histogram {
    pub fn new(edges: DataArray, values: DataArray) -> Self {
        Histogram {
            meta: ElementMeta::new("Histogram")
                .with_key_dimensions(["x"])
                .with_value_dimensions(["Frequency"]),
            edges,
            values,
        }
    }
}

/// A set of iso-level paths, each its own (x, y) array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contours {
    pub meta: ElementMeta,
    pub paths: Vec<DataArray>,
}

impl Contours {
    pub fn new(paths: Vec<DataArray>) -> Self {
        Contours {
            meta: ElementMeta::new("Contours")
                .with_key_dimensions(["x", "y"]),
            paths,
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Tabular values laid out on two categorical axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatMap {
    pub meta: ElementMeta,
    pub data: DataArray,
}

impl HeatMap {
    pub fn new(data: DataArray) -> Self {
        HeatMap {
            meta: ElementMeta::new("HeatMap")
                .with_key_dimensions(["x", "y"]),
            data,
        }
    }
}

/// Plain 2-D value array without coordinate semantics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Raster {
    pub meta: ElementMeta,
    pub data: DataArray,
}

impl Raster {
    pub fn new(data: DataArray) -> Self {
        Raster {
            meta: ElementMeta::new("Raster")
                .with_key_dimensions(["x", "y"])
                .with_value_dimensions(["z"]),
            data,
        }
    }
}
