//! English names for non-negative integers, e.g. `125` becomes `"one hundred twenty five"`.

pub mod error;
pub mod names;

pub use error::NameError;
pub use names::{digit_group_count, get_name, try_get_name, MAX_SUPPORTED};
