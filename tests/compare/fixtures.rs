use indexmap::indexmap;
use vizassert::assert_viz_eq;
use vizassert::compare::Comparison;
use vizassert::logger::init_logger;
use vizassert::model::{
    Curve, DataArray, Histogram, Layout, Options, Overlay, Scalar, VizObject,
};

fn fixture() -> VizObject {
    let curve = Curve::new(DataArray::from_pairs(vec![
        (0.0, 0.0),
        (0.5, 1.0),
        (1.0, 0.0),
    ]));
    let histogram = Histogram::new(
        DataArray::from(vec![0.0, 0.5, 1.0]),
        DataArray::from(vec![3.0, 7.0]),
    );
    Layout::new(indexmap! {
        vec!["Overlay".to_string(), "I".to_string()] =>
            Overlay::new(indexmap! {
                vec!["Curve".to_string(), "I".to_string()] => curve.into(),
            })
            .into(),
        vec!["Histogram".to_string(), "I".to_string()] => histogram.into(),
    })
    .into()
}

#[test]
fn fixture_roundtrip_compares_equal() {
    init_logger();
    let original = fixture();
    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: VizObject = serde_json::from_str(&encoded).unwrap();
    assert_viz_eq!(original, decoded);
}

#[test]
fn edited_fixture_reports_the_changed_field() {
    let original = fixture();
    let encoded = serde_json::to_string(&original).unwrap();
    let tampered = encoded.replace("7.0", "8.0");
    assert_ne!(encoded, tampered);
    let decoded: VizObject = serde_json::from_str(&tampered).unwrap();
    let err = Comparison::new().assert_equal(&original, &decoded).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Histogram values mismatched at index 1: 7 != 8"
    );
}

#[test]
fn options_roundtrip() {
    let options: VizObject = Options::default()
        .set("color", "red")
        .set("alpha", 0.5)
        .set("visible", true)
        .into();
    let encoded = serde_json::to_string(&options).unwrap();
    let decoded: VizObject = serde_json::from_str(&encoded).unwrap();
    assert_viz_eq!(options, decoded);
}

#[test]
fn scalar_keys_roundtrip() {
    let key = vec![Scalar::from(1), Scalar::from(0.25), Scalar::from("x")];
    let encoded = serde_json::to_string(&key).unwrap();
    let decoded: Vec<Scalar> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(key, decoded);
}
