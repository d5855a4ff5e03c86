use crate::model::dimension::ElementMeta;
use crate::model::scalar::{MapKey, Scalar};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single-column table of (heading, value) items. The headings live
/// in the value dimension list; equality ignores the cell payloads and
/// checks shape plus headings only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemTable {
    pub meta: ElementMeta,
    pub rows: usize,
    pub cols: usize,
}

impl ItemTable {
    pub fn new(headings: Vec<&str>) -> Self {
        let rows = headings.len();
        ItemTable {
            meta: ElementMeta::new("ItemTable")
                .with_value_dimensions(headings),
            rows,
            cols: 2,
        }
    }
}

/// Keyed table: each key tuple maps to a row of scalar cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub meta: ElementMeta,
    #[serde(with = "indexmap::map::serde_seq")]
    pub mapping: IndexMap<MapKey, Vec<Scalar>>,
}

impl Table {
    pub fn new(mapping: IndexMap<MapKey, Vec<Scalar>>) -> Self {
        Table {
            meta: ElementMeta::new("Table"),
            mapping,
        }
    }

    pub fn with_meta(mut self, meta: ElementMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn rows(&self) -> usize {
        self.mapping.len()
    }

    pub fn cols(&self) -> usize {
        self.mapping
            .first()
            .map(|(key, row)| key.len() + row.len())
            .unwrap_or(0)
    }
}
