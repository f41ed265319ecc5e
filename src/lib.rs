//! Helpers for glTF-style node transforms and accessor layouts.
//!
//! - [`math`]: compose a TRS (translation, rotation, scale) matrix and convert
//!   degrees to radians.
//! - [`accessor`]: component counts for accessor type tags such as `"VEC3"`.

pub mod accessor;
pub mod error;
pub mod math;

pub use accessor::{component_count_of, AccessorType, COMPONENT_COUNTS};
pub use error::UnknownAccessorType;
pub use math::{compose_transform, deg_to_rad, Transform};
