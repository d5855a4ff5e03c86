use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArrayError {
    #[error("rows have unequal lengths")]
    RaggedRows,
    #[error("shape {shape:?} does not match {len} elements")]
    ShapeMismatch { shape: Vec<usize>, len: usize },
}

/// Row-major numeric array with an explicit shape. Holds the raw data
/// of charts and rasters; NaN entries are allowed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataArray {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl DataArray {
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> Result<Self, ArrayError> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(ArrayError::ShapeMismatch {
                shape,
                len: data.len(),
            });
        }
        Ok(DataArray { shape, data })
    }

    /// 2-D array from equally sized rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ArrayError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|row| row.len() != cols) {
            return Err(ArrayError::RaggedRows);
        }
        let shape = vec![rows.len(), cols];
        let data = rows.into_iter().flatten().collect();
        Ok(DataArray { shape, data })
    }

    /// N x 2 array of (x, y) samples, as used by curves and points.
    pub fn from_pairs(pairs: Vec<(f64, f64)>) -> Self {
        let shape = vec![pairs.len(), 2];
        let data = pairs.into_iter().flat_map(|(x, y)| [x, y]).collect();
        DataArray { shape, data }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Length along the first axis.
    pub fn rows(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

impl From<Vec<f64>> for DataArray {
    fn from(data: Vec<f64>) -> Self {
        DataArray {
            shape: vec![data.len()],
            data,
        }
    }
}

impl FromIterator<f64> for DataArray {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let data: Vec<f64> = iter.into_iter().collect();
        data.into()
    }
}

impl Display for DataArray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.data.iter().join(", "))
    }
}

/// Extents of an image-like raster as (left, bottom, right, top).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl BoundingBox {
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        BoundingBox {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Unit square centered on the origin, the default raster extent.
    pub fn unit() -> Self {
        BoundingBox::new(-0.5, -0.5, 0.5, 0.5)
    }

    pub fn lbrt(&self) -> (f64, f64, f64, f64) {
        (self.left, self.bottom, self.right, self.top)
    }
}
