use crate::astro_math::{degrees_to_sexagesimal, hours_to_sexagesimal};
use crate::query::{FieldObject, Query, QueryResult};
use crate::util::*;

/// One aperture of the radec file
#[derive(Debug, Clone, PartialEq)]
pub struct RadecRow {
    /// 1 for the target, 2.. for reference stars
    pub aperture: usize,
    pub is_reference: bool,
    pub object: FieldObject,
}

impl RadecRow {
    pub fn ra_text(&self) -> String {
        hours_to_sexagesimal(self.object.ra_hr)
    }

    pub fn dec_text(&self) -> String {
        degrees_to_sexagesimal(self.object.dec_deg)
    }

    /// Shortest decimal that reads back to the same value, `99.999` when unknown
    pub fn mag_text(&self) -> String {
        format!("{:?}", self.object.mag.unwrap_or(TARGET_MAGNITUDE))
    }
}

/// Target followed by its reference stars, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct RadecRecords {
    mag_band: String,
    rows: Vec<RadecRow>,
}

impl RadecRecords {
    pub fn aggregate(query: &Query, result: &QueryResult) -> Self {
        let target = RadecRow {
            aperture: 1,
            is_reference: false,
            object: FieldObject {
                object_id: query.object_id.clone(),
                ra_hr: query.ra_hr,
                dec_deg: query.dec_deg,
                mag: Some(TARGET_MAGNITUDE),
                mag_err: None,
            },
        };

        let references = result
            .field_objects()
            .iter()
            .enumerate()
            .map(|(i, object)| RadecRow {
                aperture: i + 2,
                is_reference: true,
                object: object.clone(),
            });

        RadecRecords {
            mag_band: query.mag_band.clone(),
            rows: std::iter::once(target).chain(references).collect(),
        }
    }

    pub fn mag_band(&self) -> &str {
        &self.mag_band
    }

    pub fn rows(&self) -> &[RadecRow] {
        &self.rows
    }

    pub fn target(&self) -> &RadecRow {
        &self.rows[0]
    }

    pub fn references(&self) -> &[RadecRow] {
        &self.rows[1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(id: &str, mag: Option<f64>) -> FieldObject {
        FieldObject {
            object_id: id.to_string(),
            ra_hr: 6.5,
            dec_deg: 29.5,
            mag,
            mag_err: None,
        }
    }

    #[test]
    fn test_aggregate_orders_target_first() {
        let query = Query::default();
        let result = QueryResult::with_field_objects(
            "wasp 12",
            vec![star("000-BBD-441", Some(11.025)), star("000-BBD-437", Some(9.))],
        );
        let records = RadecRecords::aggregate(&query, &result);

        assert_eq!(records.rows().len(), 3);
        assert_eq!(records.mag_band(), "V");

        let target = records.target();
        assert_eq!(target.aperture, 1);
        assert!(!target.is_reference);
        assert_eq!(target.object.object_id, "wasp 12");
        assert_eq!(target.object.ra_hr, query.ra_hr);
        assert_eq!(target.mag_text(), "99.999");

        let apertures: Vec<_> = records.references().iter().map(|r| r.aperture).collect();
        assert_eq!(apertures, vec![2, 3]);
        assert!(records.references().iter().all(|r| r.is_reference));
        assert_eq!(records.references()[0].object.object_id, "000-BBD-441");
        assert_eq!(records.references()[1].mag_text(), "9.0");
    }

    #[test]
    fn test_missing_magnitude_uses_sentinel() {
        let result = QueryResult::with_field_objects("wasp 12", vec![star("a", None)]);
        let records = RadecRecords::aggregate(&Query::default(), &result);
        assert_eq!(records.references()[0].mag_text(), "99.999");
    }

    #[test]
    fn test_coordinate_text() {
        let result = QueryResult::new("wasp 12");
        let records = RadecRecords::aggregate(&Query::default(), &result);
        assert_eq!(records.target().ra_text(), "06:30:32.80");
        assert_eq!(records.target().dec_text(), "+29:40:20.28");
    }
}
