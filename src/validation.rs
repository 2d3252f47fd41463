//! Validation and normalization of user-entered query fields.
//!
//! Each field is checked syntactically against a fixed pattern. Accepted input
//! is re-rendered into its canonical form; rejected input is returned unchanged
//! inside a [`FieldError`] so the caller can report it.

use crate::astro_math::{
    degrees_to_sexagesimal, hours_to_sexagesimal, sexagesimal_to_degrees, sexagesimal_to_hours,
};
use crate::query::Query;
use crate::util::*;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

static OBJECT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s_.\-]+$").unwrap());

// hours 0 - 23, minutes and seconds 0 - 59, up to four decimal places
static RA_HMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?([0-9]|[01][0-9]|2[0-3]):([0-9]|[0-5][0-9]):([0-9]|[0-5][0-9])(?:\.[0-9]{0,4})?$")
        .unwrap()
});

// degrees 0 - 90
static DEC_DMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]|[0-8][0-9]|90):([0-9]|[0-5][0-9]):([0-9]|[0-5][0-9])(?:\.[0-9]{0,4})?$")
        .unwrap()
});

// 1 - 1199.9999, or exactly 1200
static FOV_AMIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?(?:(?:[1-9]|[1-9][0-9]|[1-9][0-9]{2}|1[01][0-9]{2})(?:\.[0-9]{0,4})?|1200(?:\.0{0,4})?)$")
        .unwrap()
});

// 1 - 99.9999
static MAG_LIMIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?(?:[1-9]|[1-9][0-9])(?:\.[0-9]{0,4})?$").unwrap());

/// A field whose input failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldKind,
    pub input: String,
}

impl FieldError {
    fn new(field: FieldKind, input: &str) -> Self {
        Self {
            field,
            input: input.to_string(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: \"{}\"", self.field, self.input)
    }
}

impl Error for FieldError {}

pub fn is_valid(field: FieldKind, input: &str) -> bool {
    let input = input.trim();
    if input.is_empty() {
        return false;
    }

    match field {
        FieldKind::ObjectId => OBJECT_ID.is_match(input),
        FieldKind::RightAscension => RA_HMS.is_match(&strip_whitespace(input)),
        FieldKind::Declination => DEC_DMS.is_match(&strip_whitespace(input)),
        FieldKind::FieldOfView => FOV_AMIN.is_match(input),
        FieldKind::MagLimit => MAG_LIMIT.is_match(input),
    }
}

/// Validates `input` and returns its canonical rendering
pub fn normalize(field: FieldKind, input: &str) -> std::result::Result<String, FieldError> {
    let canonical = match field {
        FieldKind::ObjectId => parse_object_id(input)?,
        FieldKind::RightAscension => hours_to_sexagesimal(parse_ra(input)?),
        FieldKind::Declination => degrees_to_sexagesimal(parse_dec(input)?),
        FieldKind::FieldOfView => format!("{:.1}", parse_fov(input)?),
        FieldKind::MagLimit => format!("{:.1}", parse_mag_limit(input)?),
    };
    Ok(canonical)
}

pub fn parse_object_id(input: &str) -> std::result::Result<String, FieldError> {
    check(FieldKind::ObjectId, input)?;
    Ok(input.trim().to_string())
}

/// Right ascension in decimal hours
pub fn parse_ra(input: &str) -> std::result::Result<Hours, FieldError> {
    check(FieldKind::RightAscension, input)?;
    sexagesimal_to_hours(&strip_whitespace(input))
        .map_err(|_| FieldError::new(FieldKind::RightAscension, input))
}

/// Declination in decimal degrees, saturating at ±90 (`+90:30:00` is the pole)
pub fn parse_dec(input: &str) -> std::result::Result<Degrees, FieldError> {
    check(FieldKind::Declination, input)?;
    sexagesimal_to_degrees(&strip_whitespace(input))
        .map(|dec| dec.clamp(-90., 90.))
        .map_err(|_| FieldError::new(FieldKind::Declination, input))
}

pub fn parse_fov(input: &str) -> std::result::Result<ArcMinutes, FieldError> {
    parse_number(FieldKind::FieldOfView, input)
}

pub fn parse_mag_limit(input: &str) -> std::result::Result<f64, FieldError> {
    parse_number(FieldKind::MagLimit, input)
}

fn parse_number(field: FieldKind, input: &str) -> std::result::Result<f64, FieldError> {
    check(field, input)?;
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| FieldError::new(field, input))
}

fn check(field: FieldKind, input: &str) -> std::result::Result<(), FieldError> {
    if is_valid(field, input) {
        Ok(())
    } else {
        Err(FieldError::new(field, input))
    }
}

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Raw field text as entered, `None` keeps the default
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub object_id: Option<String>,
    pub ra: Option<String>,
    pub dec: Option<String>,
    pub fov: Option<String>,
    pub mag_limit: Option<String>,
    pub mag_band: Option<String>,
    pub catalog: Option<CatalogType>,
}

impl FormFields {
    /// Validates every supplied field and overlays it on `defaults`
    pub fn into_query(self, defaults: &Query) -> Result<Query> {
        let object_id = match self.object_id {
            Some(id) => parse_object_id(&id)?,
            None => defaults.object_id.clone(),
        };
        let ra_hr = match self.ra {
            Some(ra) => parse_ra(&ra)?,
            None => defaults.ra_hr,
        };
        let dec_deg = match self.dec {
            Some(dec) => parse_dec(&dec)?,
            None => defaults.dec_deg,
        };
        let fov_amin = match self.fov {
            Some(fov) => parse_fov(&fov)?,
            None => defaults.fov_amin,
        };
        let mag_limit = match self.mag_limit {
            Some(mag_limit) => parse_mag_limit(&mag_limit)?,
            None => defaults.mag_limit,
        };
        let mag_band = self
            .mag_band
            .map(|band| band.trim().to_string())
            .unwrap_or_else(|| defaults.mag_band.clone());
        let catalog_type = self.catalog.unwrap_or(defaults.catalog_type);

        Query::new(
            object_id,
            ra_hr,
            dec_deg,
            fov_amin,
            mag_limit,
            catalog_type,
            mag_band,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_invalid() {
        for field in FieldKind::ALL {
            assert!(!is_valid(field, ""));
            assert!(!is_valid(field, "   "));
        }
    }

    #[test]
    fn test_object_id() {
        for input in [
            "WASP12",
            "WASP-12",
            "Wasp-12",
            "wasp_12",
            "wasp 12",
            "ABCDEFGHIJKL_mnopqrstuvwxyz -0123456789",
        ] {
            assert!(is_valid(FieldKind::ObjectId, input), "{}", input);
        }
        for input in ["W@SP12 ", "Wasp-12$", "wasp^^12", "wasp~12"] {
            assert!(!is_valid(FieldKind::ObjectId, input), "{}", input);
        }
    }

    #[test]
    fn test_fov() {
        for input in ["1.0", "12.3", "1199.9", "+60", "1200", "1200.0", "30.1234"] {
            assert!(is_valid(FieldKind::FieldOfView, input), "{}", input);
        }
        for input in ["0.9", "1200.5", "1201", "-1.0", "12.0O", "1/,23", "30.12345"] {
            assert!(!is_valid(FieldKind::FieldOfView, input), "{}", input);
        }
    }

    #[test]
    fn test_mag_limit() {
        for input in ["1.0", "12.3", "99.9", "+15"] {
            assert!(is_valid(FieldKind::MagLimit, input), "{}", input);
        }
        for input in ["0.9", "100.0", "-1.0", "12.0O", "1/,23"] {
            assert!(!is_valid(FieldKind::MagLimit, input), "{}", input);
        }
    }

    #[test]
    fn test_ra() {
        for input in [
            "+00:00:00.00",
            "12:34:56",
            "12:34:56.",
            "12:34:56.7",
            "23:59:59.99",
            "0:0:0.00",
            " 1: 2: 3.45",
            "5:06:07",
        ] {
            assert!(is_valid(FieldKind::RightAscension, input), "{}", input);
        }
        for input in [
            "24:00:00.00",
            "-00:00:00.01",
            "12:60:56.78",
            "12:34:60.78",
            "12:34",
            "12@34:56.78",
            "12:34:56.78901",
        ] {
            assert!(!is_valid(FieldKind::RightAscension, input), "{}", input);
        }
    }

    #[test]
    fn test_dec() {
        for input in [
            "+00:00:00.00",
            "12:34:56",
            "-12:34:56",
            "+90:00:00.00",
            "-90:00:00.00",
            "+90:59:59.99",
            "-90:59:59.99",
            "0:0:0.00",
            " -1: 2: 3.45",
        ] {
            assert!(is_valid(FieldKind::Declination, input), "{}", input);
        }
        for input in [
            "91:00:00.00",
            "-91:00:00.00",
            "12:60:56.78",
            "12:34:60.78",
            "-12:34",
            "+12@34:56.78",
        ] {
            assert!(!is_valid(FieldKind::Declination, input), "{}", input);
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(FieldKind::ObjectId, "  wasp 12 ").unwrap(),
            "wasp 12"
        );
        assert_eq!(
            normalize(FieldKind::RightAscension, " 1: 2: 3.45").unwrap(),
            "01:02:03.45"
        );
        assert_eq!(
            normalize(FieldKind::Declination, "-1:2:3.45").unwrap(),
            "-01:02:03.45"
        );
        assert_eq!(normalize(FieldKind::FieldOfView, "60").unwrap(), "60.0");
        assert_eq!(normalize(FieldKind::MagLimit, "+14.55").unwrap(), "14.6");
    }

    #[test]
    fn test_rejection_names_field_and_input() {
        let e = normalize(FieldKind::Declination, "91:00:00.00").unwrap_err();
        assert_eq!(e.field, FieldKind::Declination);
        assert_eq!(e.input, "91:00:00.00");
        assert_eq!(e.to_string(), "Invalid declination: \"91:00:00.00\"");
    }

    #[test]
    fn test_form_fields_into_query() {
        let defaults = Query::default();
        let fields = FormFields {
            object_id: Some("vega".to_string()),
            ra: Some("18:36:56.34".to_string()),
            dec: Some("+38:47:01.3".to_string()),
            fov: Some("30".to_string()),
            mag_band: Some("Ic".to_string()),
            ..Default::default()
        };

        let query = fields.into_query(&defaults).unwrap();
        assert_eq!(query.object_id, "vega");
        assert_float_absolute_eq!(query.ra_hr, 18.61565, 1E-5);
        assert_float_absolute_eq!(query.dec_deg, 38.78369, 1E-5);
        assert_eq!(query.fov_amin, 30.);
        assert_eq!(query.mag_limit, defaults.mag_limit);
        assert_eq!(query.catalog_type, defaults.catalog_type);
        assert_eq!(query.mag_band, "Ic");
    }

    #[test]
    fn test_dec_past_pole_saturates() {
        assert_eq!(parse_dec("+90:30:00").unwrap(), 90.);
        assert_eq!(parse_dec("-90:59:59.99").unwrap(), -90.);
        assert_eq!(
            normalize(FieldKind::Declination, "+90:30:00").unwrap(),
            "+90:00:00.00"
        );

        let fields = FormFields {
            dec: Some("+90:59:59.99".to_string()),
            ..Default::default()
        };
        let query = fields.into_query(&Query::default()).unwrap();
        assert_eq!(query.dec_deg, 90.);
    }

    #[test]
    fn test_form_fields_reject_invalid() {
        let fields = FormFields {
            ra: Some("24:00:00".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            fields.into_query(&Query::default()),
            Err(CatalogError::InvalidField(FieldError {
                field: FieldKind::RightAscension,
                ..
            }))
        ));

        let fields = FormFields {
            mag_band: Some("SR".to_string()),
            catalog: Some(CatalogType::Vsp),
            ..Default::default()
        };
        assert!(matches!(
            fields.into_query(&Query::default()),
            Err(CatalogError::InvalidValue(_))
        ));
    }
}
