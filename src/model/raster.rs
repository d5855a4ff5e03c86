use crate::model::array::{BoundingBox, DataArray};
use crate::model::dimension::ElementMeta;
use serde::{Deserialize, Serialize};

/// 2-D value array embedded in a continuous coordinate system. Unlike
/// [`Raster`](crate::model::chart::Raster) the extents matter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub meta: ElementMeta,
    pub data: DataArray,
    pub bounds: BoundingBox,
}

impl Image {
    pub fn new(data: DataArray) -> Self {
        Image {
            meta: ElementMeta::new("Image")
                .with_key_dimensions(["x", "y"])
                .with_value_dimensions(["z"]),
            data,
            bounds: BoundingBox::unit(),
        }
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = bounds;
        self
    }
}
