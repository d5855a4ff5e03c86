use crate::model::dimension::ElementMeta;
use crate::model::object::VizObject;
use crate::model::scalar::MapKey;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Attribute path addressing a subtree, e.g. ["Curve", "Sine"].
pub type Path = Vec<String>;

pub fn format_path(path: &Path) -> String {
    path.iter().join(".")
}

/// Elements composed on top of each other in one set of axes.
/// Children are addressed by path, in insertion order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub meta: ElementMeta,
    #[serde(with = "indexmap::map::serde_seq")]
    pub items: IndexMap<Path, VizObject>,
}

impl Overlay {
    pub fn new(items: IndexMap<Path, VizObject>) -> Self {
        Overlay {
            meta: ElementMeta::new("Overlay"),
            items,
        }
    }
}

/// Elements composed side by side, also a path-keyed tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub meta: ElementMeta,
    #[serde(with = "indexmap::map::serde_seq")]
    pub items: IndexMap<Path, VizObject>,
}

impl Layout {
    pub fn new(items: IndexMap<Path, VizObject>) -> Self {
        Layout {
            meta: ElementMeta::new("Layout"),
            items,
        }
    }
}

/// Overlay whose layers are indexed by key tuples instead of paths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NdOverlay {
    pub meta: ElementMeta,
    #[serde(with = "indexmap::map::serde_seq")]
    pub items: IndexMap<MapKey, VizObject>,
}

impl NdOverlay {
    pub fn new(items: IndexMap<MapKey, VizObject>) -> Self {
        NdOverlay {
            meta: ElementMeta::new("NdOverlay"),
            items,
        }
    }
}

/// Layout whose cells are indexed by key tuples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NdLayout {
    pub meta: ElementMeta,
    #[serde(with = "indexmap::map::serde_seq")]
    pub items: IndexMap<MapKey, VizObject>,
}

impl NdLayout {
    pub fn new(items: IndexMap<MapKey, VizObject>) -> Self {
        NdLayout {
            meta: ElementMeta::new("NdLayout"),
            items,
        }
    }
}

/// Two-dimensional grid of elements keyed by coordinate tuples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpace {
    pub meta: ElementMeta,
    #[serde(with = "indexmap::map::serde_seq")]
    pub items: IndexMap<MapKey, VizObject>,
}

impl GridSpace {
    pub fn new(items: IndexMap<MapKey, VizObject>) -> Self {
        GridSpace {
            meta: ElementMeta::new("GridSpace"),
            items,
        }
    }
}

/// Mapping from key tuples to element snapshots, e.g. over time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoloMap {
    pub meta: ElementMeta,
    #[serde(with = "indexmap::map::serde_seq")]
    pub items: IndexMap<MapKey, VizObject>,
}

impl HoloMap {
    pub fn new(items: IndexMap<MapKey, VizObject>) -> Self {
        HoloMap {
            meta: ElementMeta::new("HoloMap"),
            items,
        }
    }

    pub fn with_key_dimensions(
        mut self,
        dimensions: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        self.meta = self.meta.with_key_dimensions(dimensions);
        self
    }
}

/// A main element with adjoined marginals, compared positionally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjointLayout {
    pub meta: ElementMeta,
    pub items: Vec<VizObject>,
}

impl AdjointLayout {
    pub fn new(items: Vec<VizObject>) -> Self {
        AdjointLayout {
            meta: ElementMeta::new("AdjointLayout"),
            items,
        }
    }
}
