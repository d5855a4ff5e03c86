pub mod annotation;
pub mod array;
pub mod chart;
pub mod container;
pub mod dimension;
pub mod object;
pub mod options;
pub mod raster;
pub mod scalar;
pub mod table;

pub use annotation::{Arrow, ArrowDirection, HLine, Spline, Text, VLine};
pub use array::{ArrayError, BoundingBox, DataArray};
pub use chart::{
    Contours, Curve, HeatMap, Histogram, Points, Raster, VectorField,
};
pub use container::{
    AdjointLayout, GridSpace, HoloMap, Layout, NdLayout, NdOverlay, Overlay,
    Path,
};
pub use dimension::{Dimension, ElementMeta};
pub use object::{ObjectKind, VizObject};
pub use options::Options;
pub use raster::Image;
pub use scalar::{MapKey, Scalar};
pub use table::{ItemTable, Table};
