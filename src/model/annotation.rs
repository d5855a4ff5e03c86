use crate::model::array::DataArray;
use crate::model::dimension::ElementMeta;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Vertical line annotation at a fixed x position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VLine {
    pub meta: ElementMeta,
    pub x: f64,
}

impl VLine {
    pub fn new(x: f64) -> Self {
        VLine {
            meta: ElementMeta::new("VLine"),
            x,
        }
    }
}

/// Horizontal line annotation at a fixed y position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HLine {
    pub meta: ElementMeta,
    pub y: f64,
}

impl HLine {
    pub fn new(y: f64) -> Self {
        HLine {
            meta: ElementMeta::new("HLine"),
            y,
        }
    }
}

/// Cubic spline annotation: control points plus path codes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spline {
    pub meta: ElementMeta,
    pub points: DataArray,
    pub codes: Vec<u8>,
}

impl Spline {
    pub fn new(points: DataArray, codes: Vec<u8>) -> Self {
        Spline {
            meta: ElementMeta::new("Spline"),
            points,
            codes,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum ArrowDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Arrow annotation pointing at (x, y) with an attached label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub meta: ElementMeta,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub direction: ArrowDirection,
    /// Size of the arrow head in points.
    pub points: f64,
    pub arrow_style: String,
}

impl Arrow {
    pub fn new(x: f64, y: f64, text: &str, direction: ArrowDirection) -> Self {
        Arrow {
            meta: ElementMeta::new("Arrow"),
            x,
            y,
            text: text.to_string(),
            direction,
            points: 40.0,
            arrow_style: "->".to_string(),
        }
    }
}

/// Free-floating text annotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub meta: ElementMeta,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl Text {
    pub fn new(x: f64, y: f64, text: &str) -> Self {
        Text {
            meta: ElementMeta::new("Text"),
            x,
            y,
            text: text.to_string(),
        }
    }
}
