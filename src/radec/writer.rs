use super::aggregate::{RadecRecords, RadecRow};
use crate::query::{Query, QueryResult};
use crate::util::*;
use std::fmt::{self, Display, Formatter};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of a file write that completed without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Saved(PathBuf),
    /// Existing files are never overwritten
    AlreadyExists(PathBuf),
    NoRecords(CatalogType),
}

impl Display for WriteOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            WriteOutcome::Saved(path) => write!(f, "Saved file: {}", path.display()),
            WriteOutcome::AlreadyExists(path) => {
                write!(f, "File: {} already exists", path.display())
            }
            WriteOutcome::NoRecords(catalog) => write!(
                f,
                "No records found in {} catalog for specified parameters",
                catalog
            ),
        }
    }
}

/// `<object>.<band>.<fov>.<suffix>` with the fov truncated to a 3 digit integer and spaces as `_`
pub fn output_file_name(query: &Query, suffix: &str) -> String {
    format!(
        "{}.{}.{:03}.{}",
        query.object_id, query.mag_band, query.fov_amin as u32, suffix
    )
    .replace(' ', "_")
}

/// Renders the aperture table read by the photometry tool
pub fn render(records: &RadecRecords) -> String {
    let mut text = String::from("#RA, Dec, RefStar, Centroid, Mag\n");
    for row in records.rows() {
        text.push_str(&format!("{}\n", data_line(row)));
    }

    text.push_str("#\n#Ap, Auid, RA, Dec, RefStar, Centroid, Mag\n");
    for row in records.rows() {
        let prefix = if row.is_reference { 'C' } else { 'T' };
        text.push_str(&format!(
            "#{}{}, {}, {}\n",
            prefix,
            row.aperture,
            row.object.object_id,
            data_line(row)
        ));
    }

    text.push('#');
    text.push_str(records.mag_band());
    text
}

fn data_line(row: &RadecRow) -> String {
    format!(
        "{}, {}, {}, 1, {}",
        row.ra_text(),
        row.dec_text(),
        row.is_reference as u8,
        row.mag_text()
    )
}

/// Writes radec files into one output directory
pub struct RadecWriter {
    directory: PathBuf,
}

impl RadecWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        RadecWriter {
            directory: directory.into(),
        }
    }

    pub fn path_for(&self, query: &Query) -> PathBuf {
        self.directory.join(output_file_name(query, RADEC_SUFFIX))
    }

    pub fn write(&self, query: &Query, result: &QueryResult) -> Result<WriteOutcome> {
        if result.is_empty() {
            warn!("No {} records for {}", query.catalog_type, query.object_id);
            return Ok(WriteOutcome::NoRecords(query.catalog_type));
        }

        let path = self.path_for(query);
        let text = render(&RadecRecords::aggregate(query, result));
        let outcome = write_new_file(&path, text.as_bytes())?;
        info!("{}", outcome);
        Ok(outcome)
    }
}

/// Creates `path` with `contents`, leaving any existing file untouched
pub(crate) fn write_new_file(path: &Path, contents: &[u8]) -> Result<WriteOutcome> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Ok(WriteOutcome::AlreadyExists(path.to_path_buf()))
        }
        Err(e) => return Err(CatalogError::io(path, e)),
    };
    file.write_all(contents)
        .map_err(|e| CatalogError::io(path, e))?;

    Ok(WriteOutcome::Saved(path.to_path_buf()))
}
