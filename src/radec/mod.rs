//! Radec aperture files: the target and its reference stars as sexagesimal
//! positions, flags and magnitudes, written once per query.

pub use aggregate::{RadecRecords, RadecRow};
pub use writer::{output_file_name, render, RadecWriter, WriteOutcome};

pub(crate) use writer::write_new_file;

mod aggregate;
mod writer;
