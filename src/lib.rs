//! Deep structural equality assertions for a hierarchy of
//! visualization data objects (tables, charts, rasters, layout trees,
//! grids, annotations).
//!
//! Comparisons go through a per-kind dispatch table and raise
//! descriptive failures naming the mismatching field, so a failing
//! test reports *why* two objects differ instead of a bare boolean:
//!
//! ```
//! use vizassert::assert_viz_eq;
//! use vizassert::model::{Curve, DataArray, VizObject};
//!
//! let samples = DataArray::from_pairs(vec![(0.0, 0.0), (1.0, 1.0)]);
//! let left = VizObject::from(Curve::new(samples.clone()));
//! let right = VizObject::from(Curve::new(samples));
//! assert_viz_eq!(left, right);
//! ```

pub mod compare;
pub mod logger;
pub mod model;
