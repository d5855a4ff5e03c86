use crate::compare::error::CompareError;
use crate::compare::helpers::{
    compare_arrays, compare_dimensions, compare_floats, compare_meta,
    compare_scalars,
};
use crate::compare::registry::{Comparison, simple_equality};
use crate::model::dimension::ElementMeta;
use crate::model::object::VizObject;
use crate::model::scalar::format_key;
use itertools::Itertools;
use std::collections::HashSet;

// Per-kind rules for the leaf and element variants. Each entry first
// compares the shared meta, then the payload fields in declaration
// order. The registry only dispatches same-kind pairs here; the
// fallthrough arms defer to plain equality.

pub(crate) fn cmp_scalar(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Scalar(a), VizObject::Scalar(b)) => {
            compare_scalars(a, b, "Scalars")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_array(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Array(a), VizObject::Array(b)) => {
            compare_arrays(a, b, "Arrays")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_dimension(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Dimension(a), VizObject::Dimension(b)) => {
            compare_dimensions(a, b)
        }
        _ => simple_equality(left, right),
    }
}

//
// Annotations
//

pub(crate) fn cmp_vline(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::VLine(a), VizObject::VLine(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_floats(a.x, b.x, "VLine positions")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_hline(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::HLine(a), VizObject::HLine(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_floats(a.y, b.y, "HLine positions")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_spline(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Spline(a), VizObject::Spline(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_arrays(&a.points, &b.points, "Spline points")?;
            if a.codes != b.codes {
                return Err(CompareError::field(
                    "Spline codes",
                    a.codes.iter().join(", "),
                    b.codes.iter().join(", "),
                ));
            }
            Ok(())
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_arrow(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Arrow(a), VizObject::Arrow(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_floats(a.x, b.x, "Arrow x positions")?;
            compare_floats(a.y, b.y, "Arrow y positions")?;
            if a.text != b.text {
                return Err(CompareError::field("Arrow texts", &a.text, &b.text));
            }
            if a.direction != b.direction {
                return Err(CompareError::field(
                    "Arrow directions",
                    a.direction,
                    b.direction,
                ));
            }
            compare_floats(a.points, b.points, "Arrow sizes")?;
            if a.arrow_style != b.arrow_style {
                return Err(CompareError::field(
                    "Arrow styles",
                    &a.arrow_style,
                    &b.arrow_style,
                ));
            }
            Ok(())
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_text(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Text(a), VizObject::Text(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_floats(a.x, b.x, "Text x positions")?;
            compare_floats(a.y, b.y, "Text y positions")?;
            if a.text != b.text {
                return Err(CompareError::field("Text contents", &a.text, &b.text));
            }
            Ok(())
        }
        _ => simple_equality(left, right),
    }
}

//
// Charts
//

pub(crate) fn cmp_curve(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Curve(a), VizObject::Curve(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_arrays(&a.data, &b.data, "Curve data")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_points(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Points(a), VizObject::Points(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            if a.len() != b.len() {
                return Err(CompareError::structure(
                    "Points objects have different numbers of points.",
                ));
            }
            compare_arrays(&a.data, &b.data, "Points data")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_vectorfield(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::VectorField(a), VizObject::VectorField(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            if a.len() != b.len() {
                return Err(CompareError::structure(
                    "VectorField objects have different numbers of vectors.",
                ));
            }
            compare_arrays(&a.data, &b.data, "VectorField data")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_histogram(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Histogram(a), VizObject::Histogram(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_arrays(&a.edges, &b.edges, "Histogram edges")?;
            compare_arrays(&a.values, &b.values, "Histogram values")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_contours(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Contours(a), VizObject::Contours(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            if a.len() != b.len() {
                return Err(CompareError::structure(
                    "Contours do not have a matching number of contours.",
                ));
            }
            for (path_a, path_b) in a.paths.iter().zip(b.paths.iter()) {
                compare_arrays(path_a, path_b, "Contour data")?;
            }
            Ok(())
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_heatmap(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::HeatMap(a), VizObject::HeatMap(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_arrays(&a.data, &b.data, "HeatMap data")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_raster(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Raster(a), VizObject::Raster(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_arrays(&a.data, &b.data, "Raster data")
        }
        _ => simple_equality(left, right),
    }
}

//
// Rasters with extents
//

pub(crate) fn cmp_image(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Image(a), VizObject::Image(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_arrays(&a.data, &b.data, "Image data")?;
            if a.bounds.lbrt() != b.bounds.lbrt() {
                return Err(CompareError::structure(
                    "BoundingBoxes are mismatched.",
                ));
            }
            Ok(())
        }
        _ => simple_equality(left, right),
    }
}

//
// Tables
//

pub(crate) fn cmp_itemtable(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::ItemTable(a), VizObject::ItemTable(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            if a.rows != b.rows {
                return Err(CompareError::structure(
                    "ItemTables have different numbers of rows.",
                ));
            }
            if a.cols != b.cols {
                return Err(CompareError::structure(
                    "ItemTables have different numbers of columns.",
                ));
            }
            let names = |meta: &ElementMeta| {
                meta.value_dimensions
                    .iter()
                    .map(|dim| dim.name.clone())
                    .collect::<Vec<_>>()
            };
            if names(&a.meta) != names(&b.meta) {
                return Err(CompareError::structure(
                    "ItemTables have different Dimensions.",
                ));
            }
            Ok(())
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_table(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Table(a), VizObject::Table(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            if a.rows() != b.rows() {
                return Err(CompareError::structure(
                    "Tables have different numbers of rows.",
                ));
            }
            if a.cols() != b.cols() {
                return Err(CompareError::structure(
                    "Tables have different numbers of columns.",
                ));
            }
            let keys_a: HashSet<_> = a.mapping.keys().collect();
            let keys_b: HashSet<_> = b.mapping.keys().collect();
            if keys_a != keys_b {
                return Err(CompareError::structure(
                    "Tables have different sets of keys.",
                ));
            }
            for (key, row_a) in &a.mapping {
                let row_b = &b.mapping[key];
                if row_a.len() != row_b.len() {
                    return Err(CompareError::structure(format!(
                        "Tables have rows of different lengths at key {}.",
                        format_key(key)
                    )));
                }
                for (cell_a, cell_b) in row_a.iter().zip(row_b.iter()) {
                    compare_scalars(cell_a, cell_b, "Table cells")?;
                }
            }
            Ok(())
        }
        _ => simple_equality(left, right),
    }
}

//
// Options
//

pub(crate) fn cmp_options(
    _cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Options(a), VizObject::Options(b)) => {
            let names_a: HashSet<_> = a.kwargs.keys().collect();
            let names_b: HashSet<_> = b.kwargs.keys().collect();
            if names_a != names_b {
                return Err(CompareError::field(
                    "Option keywords",
                    a.kwargs.keys().join(", "),
                    b.kwargs.keys().join(", "),
                ));
            }
            for (name, value_a) in &a.kwargs {
                compare_scalars(
                    value_a,
                    &b.kwargs[name],
                    &format!("Option {name} values"),
                )?;
            }
            Ok(())
        }
        _ => simple_equality(left, right),
    }
}
