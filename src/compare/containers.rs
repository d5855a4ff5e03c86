use crate::compare::error::CompareError;
use crate::compare::helpers::compare_meta;
use crate::compare::registry::{Comparison, simple_equality};
use crate::model::container::{Path, format_path};
use crate::model::object::VizObject;
use crate::model::scalar::{MapKey, format_key};
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::HashSet;

/// Path-keyed tree comparison (Overlay, Layout). Paths are ordered:
/// both the path sets and their sequence must agree before children
/// are compared recursively.
fn compare_trees(
    cmp: &Comparison,
    left: &IndexMap<Path, VizObject>,
    right: &IndexMap<Path, VizObject>,
    what: &str,
) -> Result<(), CompareError> {
    if left.len() != right.len() {
        return Err(CompareError::structure(format!(
            "{what} have mismatched path counts."
        )));
    }
    if !left.keys().eq(right.keys()) {
        return Err(CompareError::field(
            &format!("{what} paths"),
            left.keys().map(format_path).join(", "),
            right.keys().map(format_path).join(", "),
        ));
    }
    for (child_left, child_right) in left.values().zip(right.values()) {
        cmp.assert_equal(child_left, child_right)?;
    }
    Ok(())
}

/// Key-tuple mapping comparison (HoloMap, NdLayout, ...). Key order
/// does not matter; children are paired by key lookup.
fn compare_ndmapping(
    cmp: &Comparison,
    left: &IndexMap<MapKey, VizObject>,
    right: &IndexMap<MapKey, VizObject>,
    what: &str,
) -> Result<(), CompareError> {
    if left.len() != right.len() {
        return Err(CompareError::structure(format!(
            "{what} have different numbers of keys."
        )));
    }
    let keys_left: HashSet<_> = left.keys().collect();
    let keys_right: HashSet<_> = right.keys().collect();
    if keys_left != keys_right {
        return Err(CompareError::field(
            &format!("{what} key sets"),
            left.keys().map(format_key).join(", "),
            right.keys().map(format_key).join(", "),
        ));
    }
    for (key, child_left) in left {
        cmp.assert_equal(child_left, &right[key])?;
    }
    Ok(())
}

pub(crate) fn cmp_overlay(
    cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Overlay(a), VizObject::Overlay(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_trees(cmp, &a.items, &b.items, "Overlays")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_layout(
    cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::Layout(a), VizObject::Layout(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_trees(cmp, &a.items, &b.items, "Layouts")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_ndoverlay(
    cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::NdOverlay(a), VizObject::NdOverlay(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_ndmapping(cmp, &a.items, &b.items, "NdOverlays")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_ndlayout(
    cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::NdLayout(a), VizObject::NdLayout(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_ndmapping(cmp, &a.items, &b.items, "NdLayouts")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_holomap(
    cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::HoloMap(a), VizObject::HoloMap(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            compare_ndmapping(cmp, &a.items, &b.items, "HoloMaps")
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_gridspace(
    cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::GridSpace(a), VizObject::GridSpace(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            if a.items.len() != b.items.len() {
                return Err(CompareError::structure(
                    "GridSpaces have different numbers of items.",
                ));
            }
            // Depth is the key tuple arity, checked before the key
            // sets so grids indexed by differently shaped coordinates
            // fail with the dedicated message.
            let depth = |items: &IndexMap<MapKey, VizObject>| {
                items.keys().map(Vec::len).max().unwrap_or(0)
            };
            if depth(&a.items) != depth(&b.items) {
                return Err(CompareError::structure(
                    "GridSpaces have different depths.",
                ));
            }
            let keys_left: HashSet<_> = a.items.keys().collect();
            let keys_right: HashSet<_> = b.items.keys().collect();
            if keys_left != keys_right {
                return Err(CompareError::field(
                    "GridSpaces key sets",
                    a.items.keys().map(format_key).join(", "),
                    b.items.keys().map(format_key).join(", "),
                ));
            }
            for (key, child_left) in &a.items {
                cmp.assert_equal(child_left, &b.items[key])?;
            }
            Ok(())
        }
        _ => simple_equality(left, right),
    }
}

pub(crate) fn cmp_adjointlayout(
    cmp: &Comparison,
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    match (left, right) {
        (VizObject::AdjointLayout(a), VizObject::AdjointLayout(b)) => {
            compare_meta(&a.meta, &b.meta)?;
            if a.items.len() != b.items.len() {
                return Err(CompareError::structure(
                    "AdjointLayouts have different lengths.",
                ));
            }
            for (child_left, child_right) in a.items.iter().zip(b.items.iter())
            {
                cmp.assert_equal(child_left, child_right)?;
            }
            Ok(())
        }
        _ => simple_equality(left, right),
    }
}
