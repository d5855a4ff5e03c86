use crate::compare::containers::*;
use crate::compare::elements::*;
use crate::compare::error::CompareError;
use crate::model::object::{ObjectKind, VizObject};
use indexmap::IndexMap;
use log::debug;

pub type CompareFn =
    fn(&Comparison, &VizObject, &VizObject) -> Result<(), CompareError>;

/// Cap on Debug output embedded in fallback failure messages.
const MAX_REPR_LEN: usize = 80;

fn safe_repr(object: &VizObject) -> String {
    let repr = format!("{object:?}");
    match repr.char_indices().nth(MAX_REPR_LEN) {
        Some((cut, _)) => format!("{}...", &repr[..cut]),
        None => repr,
    }
}

/// Plain equality with a Debug-formatted failure. Used whenever no
/// per-kind rule applies, in particular for pairs of differing kinds.
pub fn simple_equality(
    left: &VizObject,
    right: &VizObject,
) -> Result<(), CompareError> {
    if left == right {
        Ok(())
    } else {
        Err(CompareError::NotEqual {
            left: safe_repr(left),
            right: safe_repr(right),
        })
    }
}

/// The type-dispatch table: one comparison function per object kind.
/// Same-kind pairs dispatch through the table, so individual rules can
/// be replaced; anything else falls back to [`simple_equality`].
pub struct Comparison {
    funcs: IndexMap<ObjectKind, CompareFn>,
}

impl Comparison {
    pub fn new() -> Self {
        Comparison {
            funcs: Self::registry(),
        }
    }

    /// The default per-kind rules, keyed by discriminant.
    pub fn registry() -> IndexMap<ObjectKind, CompareFn> {
        let mut funcs: IndexMap<ObjectKind, CompareFn> = IndexMap::new();

        // Leaves
        funcs.insert(ObjectKind::Scalar, cmp_scalar);
        funcs.insert(ObjectKind::Array, cmp_array);
        funcs.insert(ObjectKind::Dimension, cmp_dimension);

        // Annotations
        funcs.insert(ObjectKind::VLine, cmp_vline);
        funcs.insert(ObjectKind::HLine, cmp_hline);
        funcs.insert(ObjectKind::Spline, cmp_spline);
        funcs.insert(ObjectKind::Arrow, cmp_arrow);
        funcs.insert(ObjectKind::Text, cmp_text);

        // Charts
        funcs.insert(ObjectKind::Curve, cmp_curve);
        funcs.insert(ObjectKind::Points, cmp_points);
        funcs.insert(ObjectKind::VectorField, cmp_vectorfield);
        funcs.insert(ObjectKind::Histogram, cmp_histogram);
        funcs.insert(ObjectKind::Contours, cmp_contours);
        funcs.insert(ObjectKind::HeatMap, cmp_heatmap);
        funcs.insert(ObjectKind::Raster, cmp_raster);

        // Rasters
        funcs.insert(ObjectKind::Image, cmp_image);

        // Tables
        funcs.insert(ObjectKind::ItemTable, cmp_itemtable);
        funcs.insert(ObjectKind::Table, cmp_table);

        // Composites
        funcs.insert(ObjectKind::Overlay, cmp_overlay);
        funcs.insert(ObjectKind::Layout, cmp_layout);
        funcs.insert(ObjectKind::NdOverlay, cmp_ndoverlay);
        funcs.insert(ObjectKind::NdLayout, cmp_ndlayout);
        funcs.insert(ObjectKind::GridSpace, cmp_gridspace);
        funcs.insert(ObjectKind::HoloMap, cmp_holomap);
        funcs.insert(ObjectKind::AdjointLayout, cmp_adjointlayout);

        // Plot options
        funcs.insert(ObjectKind::Options, cmp_options);

        debug!("registered {} comparison functions", funcs.len());
        funcs
    }

    /// Replace the rule for one kind, e.g. to loosen or tighten a
    /// single element comparison in a test suite.
    pub fn set_comparer(&mut self, kind: ObjectKind, func: CompareFn) {
        self.funcs.insert(kind, func);
    }

    /// Deep equality check. Ok(()) when the objects match, otherwise
    /// the first descriptive failure encountered.
    pub fn assert_equal(
        &self,
        left: &VizObject,
        right: &VizObject,
    ) -> Result<(), CompareError> {
        if left.kind() == right.kind()
            && let Some(func) = self.funcs.get(&left.kind())
        {
            return func(self, left, right);
        }
        simple_equality(left, right)
    }
}

impl Default for Comparison {
    fn default() -> Self {
        Comparison::new()
    }
}
