use indexmap::indexmap;
use vizassert::assert_viz_eq;
use vizassert::compare::{CompareError, Comparison};
use vizassert::logger::init_logger;
use vizassert::model::{
    Arrow, ArrowDirection, BoundingBox, Contours, Curve, DataArray, Dimension,
    HLine, Histogram, Image, ItemTable, Points, Scalar, Spline, Table, Text,
    VLine, VectorField, VizObject,
};

fn failure(left: impl Into<VizObject>, right: impl Into<VizObject>) -> String {
    Comparison::new()
        .assert_equal(&left.into(), &right.into())
        .unwrap_err()
        .to_string()
}

fn sine_samples() -> DataArray {
    DataArray::from_pairs(
        (0..32)
            .map(|i| {
                let x = i as f64 / 31.0;
                (x, (x * std::f64::consts::TAU).sin())
            })
            .collect(),
    )
}

#[test]
fn equal_curves_match() {
    init_logger();
    let left = Curve::new(sine_samples());
    let right = Curve::new(sine_samples());
    assert_viz_eq!(VizObject::from(left), VizObject::from(right));
}

#[test]
fn curves_within_tolerance_match() {
    let exact = Curve::new(DataArray::from_pairs(vec![(0.0, 1.0)]));
    let nudged = Curve::new(DataArray::from_pairs(vec![(0.0, 1.0 + 1e-8)]));
    assert_viz_eq!(VizObject::from(exact), VizObject::from(nudged));
}

#[test]
fn curve_data_mismatch_names_index() {
    let left = Curve::new(DataArray::from_pairs(vec![(0.0, 1.0), (1.0, 2.0)]));
    let right = Curve::new(DataArray::from_pairs(vec![(0.0, 1.0), (1.0, 3.0)]));
    assert_eq!(
        failure(left, right),
        "Curve data mismatched at index 3: 2 != 3"
    );
}

#[test]
fn curve_label_checked_before_data() {
    let mut left = Curve::new(sine_samples());
    left.meta = left.meta.with_label("Sine");
    let mut right = Curve::new(DataArray::from_pairs(vec![]));
    right.meta = right.meta.with_label("Cosine");
    assert_eq!(failure(left, right), "Labels mismatched: Sine != Cosine");
}

#[test]
fn histogram_edges_checked_before_values() {
    let left = Histogram::new(
        DataArray::from(vec![0.0, 1.0, 2.0]),
        DataArray::from(vec![5.0, 7.0]),
    );
    let right = Histogram::new(
        DataArray::from(vec![0.0, 1.5, 2.0]),
        DataArray::from(vec![6.0, 7.0]),
    );
    assert_eq!(
        failure(left, right),
        "Histogram edges mismatched at index 1: 1 != 1.5"
    );
}

#[test]
fn points_count_mismatch() {
    let left = Points::new(DataArray::from_pairs(vec![(0.0, 0.0)]));
    let right =
        Points::new(DataArray::from_pairs(vec![(0.0, 0.0), (1.0, 1.0)]));
    assert_eq!(
        failure(left, right),
        "Points objects have different numbers of points."
    );
}

#[test]
fn vectorfield_count_mismatch() {
    let left = VectorField::new(
        DataArray::from_rows(vec![vec![0.0, 0.0, 0.5, 1.0]]).unwrap(),
    );
    let right = VectorField::new(
        DataArray::from_rows(vec![
            vec![0.0, 0.0, 0.5, 1.0],
            vec![1.0, 1.0, 0.25, 2.0],
        ])
        .unwrap(),
    );
    assert_eq!(
        failure(left, right),
        "VectorField objects have different numbers of vectors."
    );
}

#[test]
fn contours_count_mismatch() {
    let ring = DataArray::from_pairs(vec![(0.0, 1.0), (1.0, 0.0)]);
    let left = Contours::new(vec![ring.clone()]);
    let right = Contours::new(vec![ring.clone(), ring]);
    assert_eq!(
        failure(left, right),
        "Contours do not have a matching number of contours."
    );
}

#[test]
fn image_bounds_mismatch() {
    let data = DataArray::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]]);
    let left = Image::new(data.clone().unwrap());
    let right = Image::new(data.unwrap())
        .with_bounds(BoundingBox::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(failure(left, right), "BoundingBoxes are mismatched.");
}

#[test]
fn image_nan_cells_match() {
    let data = || {
        DataArray::from_rows(vec![vec![f64::NAN, 1.0], vec![2.0, 3.0]])
            .unwrap()
    };
    assert_viz_eq!(
        VizObject::from(Image::new(data())),
        VizObject::from(Image::new(data()))
    );
}

#[test]
fn assertion_macro_borrows_its_operands() {
    let left = VizObject::from(Curve::new(sine_samples()));
    let right = VizObject::from(Curve::new(sine_samples()));
    assert_viz_eq!(left, right);
    // The operands must still be usable after the assertion.
    assert_viz_eq!(left, right);
    assert_eq!(left, right);
}

#[test]
fn table_rows_of_unequal_length_mismatch() {
    let left = Table::new(indexmap! {
        vec![Scalar::from(1)] => vec![Scalar::from(10.0)],
        vec![Scalar::from(2)] => vec![Scalar::from(20.0)],
    });
    let right = Table::new(indexmap! {
        vec![Scalar::from(1)] => vec![Scalar::from(10.0)],
        vec![Scalar::from(2)] =>
            vec![Scalar::from(20.0), Scalar::from("extra")],
    });
    assert_eq!(
        failure(left, right),
        "Tables have rows of different lengths at key (2)."
    );
}

#[test]
fn itemtable_headings_mismatch() {
    let left = ItemTable::new(vec!["mean", "std"]);
    let right = ItemTable::new(vec!["mean", "var"]);
    // Heading names live in the value dimension list, so the shared
    // meta comparison reports them before the table-specific checks.
    assert_eq!(failure(left, right), "Dimension names mismatched: std != var");
}

#[test]
fn vline_positions() {
    assert_viz_eq!(VizObject::from(VLine::new(0.5)), VizObject::from(VLine::new(0.5)));
    assert_eq!(
        failure(VLine::new(0.5), VLine::new(0.75)),
        "VLine positions mismatched: 0.5 != 0.75"
    );
}

#[test]
fn hline_positions() {
    assert_eq!(
        failure(HLine::new(1.0), HLine::new(-1.0)),
        "HLine positions mismatched: 1 != -1"
    );
}

#[test]
fn spline_codes() {
    let points = DataArray::from_pairs(vec![(0.0, 0.0), (1.0, 1.0)]);
    let left = Spline::new(points.clone(), vec![1, 4]);
    let right = Spline::new(points, vec![1, 2]);
    assert_eq!(
        failure(left, right),
        "Spline codes mismatched: 1, 4 != 1, 2"
    );
}

#[test]
fn arrow_direction_and_text() {
    let left = Arrow::new(0.0, 0.0, "peak", ArrowDirection::Up);
    let mut right = Arrow::new(0.0, 0.0, "peak", ArrowDirection::Up);
    assert_viz_eq!(VizObject::from(left.clone()), VizObject::from(right.clone()));

    right.direction = ArrowDirection::Down;
    assert_eq!(
        failure(left.clone(), right),
        "Arrow directions mismatched: Up != Down"
    );

    let mut renamed = left.clone();
    renamed.text = "valley".to_string();
    assert_eq!(
        failure(left, renamed),
        "Arrow texts mismatched: peak != valley"
    );
}

#[test]
fn text_contents() {
    let left = Text::new(0.0, 0.0, "alpha");
    let right = Text::new(0.0, 0.0, "beta");
    assert_eq!(
        failure(left, right),
        "Text contents mismatched: alpha != beta"
    );
}

#[test]
fn dimension_units_via_dispatch() {
    let left = Dimension::new("Frequency").with_unit("Hz");
    let right = Dimension::new("Frequency");
    let err = Comparison::new()
        .assert_equal(&left.into(), &right.into())
        .unwrap_err();
    assert!(matches!(err, CompareError::FieldMismatch { .. }));
    assert_eq!(
        err.to_string(),
        "Dimension unit declarations mismatched: Some(\"Hz\") != None"
    );
}
