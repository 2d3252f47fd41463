use crate::astro_math::{arcmin_to_deg, hours_to_deg};
use crate::util::*;
use serde::{Deserialize, Serialize};

/// Parameters of one catalog request. Coordinates are always stored in decimal form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub object_id: String,
    pub ra_hr: Hours,
    pub dec_deg: Degrees,
    pub fov_amin: ArcMinutes,
    pub mag_limit: f64,
    pub catalog_type: CatalogType,
    pub mag_band: String,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            object_id: "wasp 12".to_string(),
            ra_hr: 6.50911,
            dec_deg: 29.67230,
            fov_amin: 60.0,
            mag_limit: 15.0,
            catalog_type: CatalogType::Vsp,
            mag_band: "V".to_string(),
        }
    }
}

impl Query {
    pub fn new(
        object_id: impl Into<String>,
        ra_hr: Hours,
        dec_deg: Degrees,
        fov_amin: ArcMinutes,
        mag_limit: f64,
        catalog_type: CatalogType,
        mag_band: impl Into<String>,
    ) -> Result<Self> {
        Self {
            object_id: object_id.into(),
            ra_hr,
            dec_deg,
            fov_amin,
            mag_limit,
            catalog_type,
            mag_band: mag_band.into(),
        }
        .validated()
    }

    /// Checks value ranges, e.g. after loading from a config file
    pub fn validated(self) -> Result<Self> {
        check_ra(self.ra_hr)?;
        check_dec(self.dec_deg)?;
        check_fov(self.fov_amin)?;
        check_mag_limit(self.mag_limit)?;
        check_mag_band(self.catalog_type, &self.mag_band)?;
        Ok(self)
    }

    /// Same query centred on a new position
    pub fn with_position(&self, ra_hr: Hours, dec_deg: Degrees) -> Result<Self> {
        check_ra(ra_hr)?;
        check_dec(dec_deg)?;
        Ok(Self {
            ra_hr,
            dec_deg,
            ..self.clone()
        })
    }

    /// Same query against another catalog. The band is not rechecked.
    pub fn with_catalog(&self, catalog_type: CatalogType) -> Self {
        Self {
            catalog_type,
            ..self.clone()
        }
    }

    pub fn ra_deg(&self) -> Degrees {
        hours_to_deg(self.ra_hr)
    }

    pub fn fov_deg(&self) -> Degrees {
        arcmin_to_deg(self.fov_amin)
    }
}

/// A reference star returned by a catalog
#[derive(Debug, Clone, PartialEq)]
pub struct FieldObject {
    pub object_id: String,
    pub ra_hr: Hours,
    pub dec_deg: Degrees,
    /// `None` when the catalog has no photometry in the requested band
    pub mag: Option<f64>,
    pub mag_err: Option<f64>,
}

/// Field stars found around a target, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    object_id: String,
    field_objects: Vec<FieldObject>,
}

impl QueryResult {
    pub fn new(object_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            field_objects: Vec::new(),
        }
    }

    pub fn with_field_objects(
        object_id: impl Into<String>,
        field_objects: Vec<FieldObject>,
    ) -> Self {
        Self {
            object_id: object_id.into(),
            field_objects,
        }
    }

    pub(crate) fn push(&mut self, field_object: FieldObject) {
        self.field_objects.push(field_object);
    }

    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    pub fn field_objects(&self) -> &[FieldObject] {
        &self.field_objects
    }

    pub fn len(&self) -> usize {
        self.field_objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_objects.is_empty()
    }
}

/// Identifier, position and photometry of a target resolved by SIMBAD
#[derive(Debug, Clone, PartialEq)]
pub struct SimbadResult {
    /// Identifier as entered by the user
    pub object_id: String,
    /// Canonical SIMBAD identifier, e.g. `* alf Lyr` for vega
    pub simbad_id: String,
    pub ra_hr: Hours,
    pub dec_deg: Degrees,
    pub mag_b: Option<f64>,
    pub mag_v: Option<f64>,
    pub mag_r: Option<f64>,
    pub mag_i: Option<f64>,
}

impl SimbadResult {
    /// Magnitude for a SIMBAD band (B, V, R, I)
    pub fn magnitude(&self, band: &str) -> Option<f64> {
        match band.to_ascii_uppercase().as_str() {
            "B" => self.mag_b,
            "V" => self.mag_v,
            "R" => self.mag_r,
            "I" => self.mag_i,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_valid() {
        let query = Query::default();
        assert!(query.clone().validated().is_ok());
        assert_float_relative_eq!(query.ra_deg(), 97.63665);
        assert_eq!(query.fov_deg(), 1.);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let query = Query::new("vega", 24., 0., 60., 15., CatalogType::Vsp, "V");
        assert!(matches!(query, Err(CatalogError::InvalidValue(_))));

        let query = Query::new("vega", 1., 0., 0., 15., CatalogType::Vsp, "V");
        assert!(query.is_err());

        let query = Query::new("vega", 1., 0., 60., 15., CatalogType::Simbad, "Rc");
        assert!(query.is_err());
    }

    #[test]
    fn test_with_position() {
        let query = Query::default().with_position(18.61565, 38.78369).unwrap();
        assert_eq!(query.ra_hr, 18.61565);
        assert_eq!(query.dec_deg, 38.78369);
        assert_eq!(query.object_id, "wasp 12");
        assert!(Query::default().with_position(1., 91.).is_err());
    }

    #[test]
    fn test_simbad_magnitude_lookup() {
        let result = SimbadResult {
            object_id: "wasp 12".to_string(),
            simbad_id: "WASP-12".to_string(),
            ra_hr: 6.50911,
            dec_deg: 29.6723,
            mag_b: Some(12.14),
            mag_v: Some(11.57),
            mag_r: None,
            mag_i: None,
        };
        assert_eq!(result.magnitude("v"), Some(11.57));
        assert_eq!(result.magnitude("R"), None);
        assert_eq!(result.magnitude("Ic"), None);
    }
}
