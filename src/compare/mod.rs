pub mod containers;
pub mod elements;
pub mod error;
pub mod helpers;
pub mod registry;

pub use error::CompareError;
pub use registry::{CompareFn, Comparison, simple_equality};

/// Deep equality assertion for visualization objects. Panics with the
/// descriptive failure, so mismatches read like
/// `Dimension names mismatched: x != y` instead of a bare boolean.
#[macro_export]
macro_rules! assert_viz_eq {
    ($left_val:expr, $right_val:expr $(,)?) => {
        match (&$left_val, &$right_val) {
            (left, right) => {
                if let Err(failure) =
                    $crate::compare::Comparison::new().assert_equal(left, right)
                {
                    panic!(
                        "visualization equality assertion failed: {failure}\n  left: `{left:?}`,\n right: `{right:?}`"
                    );
                }
            }
        }
    };
}
