pub mod catalog_type;
pub mod field_kind;
pub mod simbad_attribute;

pub use catalog_type::*;
pub use field_kind::*;
pub use simbad_attribute::*;

pub use crate::astro_math::{ArcMinutes, Degrees, Hours};
