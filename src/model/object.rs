use crate::model::annotation::{Arrow, HLine, Spline, Text, VLine};
use crate::model::array::DataArray;
use crate::model::chart::{
    Contours, Curve, HeatMap, Histogram, Points, Raster, VectorField,
};
use crate::model::container::{
    AdjointLayout, GridSpace, HoloMap, Layout, NdLayout, NdOverlay, Overlay,
};
use crate::model::dimension::Dimension;
use crate::model::options::Options;
use crate::model::raster::Image;
use crate::model::scalar::Scalar;
use crate::model::table::{ItemTable, Table};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumDiscriminants, EnumIter};

/// The tagged-variant hierarchy of everything that can be compared.
/// [`ObjectKind`] is the derived discriminant used as the dispatch key
/// of the comparison registry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, EnumDiscriminants)]
#[strum_discriminants(name(ObjectKind))]
#[strum_discriminants(derive(Display, EnumIter, Hash))]
pub enum VizObject {
    // Leaves
    Scalar(Scalar),
    Array(DataArray),
    Dimension(Dimension),

    // Annotations
    VLine(VLine),
    HLine(HLine),
    Spline(Spline),
    Arrow(Arrow),
    Text(Text),

    // Charts
    Curve(Curve),
    Points(Points),
    VectorField(VectorField),
    Histogram(Histogram),
    Contours(Contours),
    HeatMap(HeatMap),
    Raster(Raster),

    // Rasters
    Image(Image),

    // Tables
    ItemTable(ItemTable),
    Table(Table),

    // Composites
    Overlay(Overlay),
    Layout(Layout),
    NdOverlay(NdOverlay),
    NdLayout(NdLayout),
    GridSpace(GridSpace),
    HoloMap(HoloMap),
    AdjointLayout(AdjointLayout),

    // Plot options
    Options(Options),
}

impl VizObject {
    pub fn kind(&self) -> ObjectKind {
        self.into()
    }
}

macro_rules! viz_object_from {
    ($($payload:ident),* $(,)?) => {
        $(
            impl From<$payload> for VizObject {
                fn from(value: $payload) -> Self {
                    VizObject::$payload(value)
                }
            }
        )*
    };
}

viz_object_from!(
    Scalar,
    Dimension,
    VLine,
    HLine,
    Spline,
    Arrow,
    Text,
    Curve,
    Points,
    VectorField,
    Histogram,
    Contours,
    HeatMap,
    Raster,
    Image,
    ItemTable,
    Table,
    Overlay,
    Layout,
    NdOverlay,
    NdLayout,
    GridSpace,
    HoloMap,
    AdjointLayout,
    Options,
);

impl From<DataArray> for VizObject {
    fn from(value: DataArray) -> Self {
        VizObject::Array(value)
    }
}

impl From<f64> for VizObject {
    fn from(value: f64) -> Self {
        VizObject::Scalar(value.into())
    }
}

impl From<&str> for VizObject {
    fn from(value: &str) -> Self {
        VizObject::Scalar(value.into())
    }
}
