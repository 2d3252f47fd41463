use crate::validation::FieldError;
use crate::{ArcMinutes, CatalogType, Degrees, Hours};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::{fmt, result};

pub type Result<T> = result::Result<T, CatalogError>;

#[derive(Debug)]
pub enum CatalogError {
    /// The identifier has no match in the remote catalog
    NotFound(String),
    Transport(String),
    HttpStatus {
        status: u16,
        url: String,
    },
    /// Malformed XML, JSON, number or coordinate text
    Parse(String),
    Io {
        path: PathBuf,
        message: String,
    },
    UnsupportedCatalog(CatalogType),
    InvalidField(FieldError),
    InvalidValue(String),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, e: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            message: e.to_string(),
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(id) => {
                write!(f, "Identifier not found in the SIMBAD database: {}", id)
            }
            CatalogError::Transport(msg) => write!(f, "Network error: {}", msg),
            CatalogError::HttpStatus { status, url } => {
                write!(f, "HTTP status {} from {}", status, url)
            }
            CatalogError::Parse(msg) => write!(f, "Invalid response: {}", msg),
            CatalogError::Io { path, message } => {
                write!(f, "Error in writing file: {}: {}", path.display(), message)
            }
            CatalogError::UnsupportedCatalog(catalog) => {
                write!(f, "{} catalog queries are not implemented", catalog)
            }
            CatalogError::InvalidField(e) => write!(f, "{}", e),
            CatalogError::InvalidValue(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for CatalogError {}

impl From<FieldError> for CatalogError {
    fn from(e: FieldError) -> Self {
        CatalogError::InvalidField(e)
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CatalogError::Transport(format!("request timed out: {}", e))
        } else {
            CatalogError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

pub fn check_dec(dec: Degrees) -> Result<()> {
    if (-90. ..=90.).contains(&dec) {
        Ok(())
    } else {
        Err(CatalogError::InvalidValue(format!(
            "Declination of {} is not valid",
            dec
        )))
    }
}

pub fn check_ra(ra: Hours) -> Result<()> {
    if (0. ..24.).contains(&ra) {
        Ok(())
    } else {
        Err(CatalogError::InvalidValue(format!(
            "Right Ascension of {} is not valid",
            ra
        )))
    }
}

pub fn check_fov(fov: ArcMinutes) -> Result<()> {
    if 0. < fov && fov <= 1200. {
        Ok(())
    } else {
        Err(CatalogError::InvalidValue(format!(
            "Field of view of {} arcmin is not valid",
            fov
        )))
    }
}

pub fn check_mag_limit(mag_limit: f64) -> Result<()> {
    if 0. < mag_limit && mag_limit < 100. {
        Ok(())
    } else {
        Err(CatalogError::InvalidValue(format!(
            "Magnitude limit of {} is not valid",
            mag_limit
        )))
    }
}

pub fn check_mag_band(catalog: CatalogType, band: &str) -> Result<()> {
    // DSS has no photometry, so any band only labels the output files
    if catalog == CatalogType::Dss || catalog.supports_band(band) {
        Ok(())
    } else {
        Err(CatalogError::InvalidValue(format!(
            "Magnitude band \"{}\" is not available in {} (expected one of {})",
            band,
            catalog,
            catalog.mag_bands().join(", ")
        )))
    }
}
