pub mod elements;
pub mod fixtures;
