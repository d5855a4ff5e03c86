use crate::compare::error::CompareError;
use crate::model::array::DataArray;
use crate::model::dimension::{Dimension, ElementMeta};
use crate::model::scalar::Scalar;
use itertools::Itertools;

/// Absolute tolerance for "approximately equal" floats, matching
/// elementwise array comparison to 6 decimal places.
pub const FLOAT_TOLERANCE: f64 = 1.5e-6;

/// Approximate float equality. NaN compares equal to NaN and +0.0 to
/// -0.0, so arrays with missing samples can still match.
pub fn floats_almost_equal(left: f64, right: f64) -> bool {
    if left.is_nan() && right.is_nan() {
        return true;
    }
    if left == right {
        return true;
    }
    (left - right).abs() < FLOAT_TOLERANCE
}

pub fn compare_floats(
    left: f64,
    right: f64,
    what: &str,
) -> Result<(), CompareError> {
    if floats_almost_equal(left, right) {
        Ok(())
    } else {
        Err(CompareError::field(what, left, right))
    }
}

/// Shape first, then elementwise to within [`FLOAT_TOLERANCE`]. The
/// failure names the first mismatching flat index.
pub fn compare_arrays(
    left: &DataArray,
    right: &DataArray,
    what: &str,
) -> Result<(), CompareError> {
    if left.shape() != right.shape() {
        return Err(CompareError::ShapeMismatch {
            what: what.to_string(),
            left: left.shape().to_vec(),
            right: right.shape().to_vec(),
        });
    }
    for (index, (a, b)) in
        left.data().iter().zip(right.data().iter()).enumerate()
    {
        if !floats_almost_equal(*a, *b) {
            return Err(CompareError::ElementMismatch {
                what: what.to_string(),
                index,
                left: *a,
                right: *b,
            });
        }
    }
    Ok(())
}

/// Scalar equality: floats (and int/float pairs) compare
/// approximately, everything else exactly.
pub fn compare_scalars(
    left: &Scalar,
    right: &Scalar,
    what: &str,
) -> Result<(), CompareError> {
    let equal = match (left.as_f64(), right.as_f64()) {
        (Some(a), Some(b)) => floats_almost_equal(a, b),
        _ => left == right,
    };
    if equal {
        Ok(())
    } else {
        Err(CompareError::field(what, left, right))
    }
}

pub fn compare_dimensions(
    left: &Dimension,
    right: &Dimension,
) -> Result<(), CompareError> {
    if left.name != right.name {
        return Err(CompareError::field(
            "Dimension names",
            &left.name,
            &right.name,
        ));
    }
    if left.cyclic != right.cyclic {
        return Err(CompareError::structure(
            "Dimension cyclic declarations mismatched.",
        ));
    }
    if left.range != right.range {
        return Err(CompareError::field(
            "Dimension ranges",
            format!("{:?}", left.range),
            format!("{:?}", right.range),
        ));
    }
    if left.unit != right.unit {
        return Err(CompareError::field(
            "Dimension unit declarations",
            format!("{:?}", left.unit),
            format!("{:?}", right.unit),
        ));
    }
    if left.values != right.values {
        return Err(CompareError::field(
            "Dimension value declarations",
            left.values.iter().join(", "),
            right.values.iter().join(", "),
        ));
    }
    if left.format_string != right.format_string {
        return Err(CompareError::field(
            "Dimension format string declarations",
            &left.format_string,
            &right.format_string,
        ));
    }
    Ok(())
}

pub fn compare_dimension_lists(
    left: &[Dimension],
    right: &[Dimension],
    what: &str,
) -> Result<(), CompareError> {
    if left.len() != right.len() {
        return Err(CompareError::structure(format!("{what} mismatched")));
    }
    for (a, b) in left.iter().zip(right.iter()) {
        compare_dimensions(a, b)?;
    }
    Ok(())
}

pub fn compare_labelled(
    left: &ElementMeta,
    right: &ElementMeta,
) -> Result<(), CompareError> {
    if left.group != right.group {
        return Err(CompareError::field(
            "Group labels",
            &left.group,
            &right.group,
        ));
    }
    if left.label != right.label {
        return Err(CompareError::field("Labels", &left.label, &right.label));
    }
    Ok(())
}

/// The shared "dimensioned" prefix of every element comparison:
/// labels, then value dimensions, then key dimensions.
pub fn compare_meta(
    left: &ElementMeta,
    right: &ElementMeta,
) -> Result<(), CompareError> {
    compare_labelled(left, right)?;
    compare_dimension_lists(
        &left.value_dimensions,
        &right.value_dimensions,
        "Value dimension list",
    )?;
    compare_dimension_lists(
        &left.key_dimensions,
        &right.key_dimensions,
        "Key dimension list",
    )
}
