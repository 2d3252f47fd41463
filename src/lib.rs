//! Resolves astronomical targets with SIMBAD, fetches comparison stars from the
//! AAVSO Variable Star Plotter and writes radec aperture files.

#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod astro_math;
pub mod catalog;
pub mod config;
mod consts;
pub mod dss;
pub mod export;
pub mod query;
pub mod radec;
mod util;
pub mod validation;

pub use catalog::{Catalog, CatalogRegistry, CatalogResponse};
pub use config::Config;
pub use query::{FieldObject, Query, QueryResult, SimbadResult};
pub use util::*;
