use super::fetch::Fetch;
use super::urls::vsp_url;
use super::{Catalog, CatalogResponse};
use crate::astro_math::{sexagesimal_to_degrees, sexagesimal_to_hours};
use crate::query::{FieldObject, Query, QueryResult};
use crate::util::*;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, trace};

/* VSP chart api response, fields not listed are ignored */
#[derive(Debug, Deserialize)]
struct ChartResponse {
    #[serde(default)]
    photometry: Vec<FieldStarRecord>,
}

#[derive(Debug, Deserialize)]
struct FieldStarRecord {
    #[serde(default)]
    auid: Option<String>,
    ra: String,
    dec: String,
    #[serde(default)]
    bands: Vec<BandRecord>,
}

#[derive(Debug, Deserialize)]
struct BandRecord {
    band: String,
    mag: Option<f64>,
    error: Option<f64>,
}

/// AAVSO Variable Star Plotter comparison stars around the query position
pub struct VspCatalog {
    base_url: String,
    fetcher: Arc<dyn Fetch>,
}

impl VspCatalog {
    pub fn new(base_url: impl Into<String>, fetcher: Arc<dyn Fetch>) -> Self {
        VspCatalog {
            base_url: base_url.into(),
            fetcher,
        }
    }

    pub async fn field_stars(&self, query: &Query) -> Result<QueryResult> {
        let url = vsp_url(&self.base_url, query);
        debug!("Querying VSP for {} field stars of {}", query.mag_band, query.object_id);
        let body = self.fetcher.fetch_text(&url).await?;
        let result = decode_chart(&query.object_id, &body, &query.mag_band)?;
        debug!("VSP returned {} stars with {} photometry", result.len(), query.mag_band);
        Ok(result)
    }
}

#[async_trait]
impl Catalog for VspCatalog {
    fn catalog_type(&self) -> CatalogType {
        CatalogType::Vsp
    }

    async fn run_query(&self, query: &Query) -> Result<CatalogResponse> {
        Ok(CatalogResponse::FieldStars(self.field_stars(query).await?))
    }
}

/// Decodes a VSP chart and keeps the stars with photometry in `mag_band`
pub fn decode_chart(object_id: &str, body: &str, mag_band: &str) -> Result<QueryResult> {
    let chart: ChartResponse = serde_json::from_str(body)?;

    let mut result = QueryResult::new(object_id);
    for star in chart.photometry {
        let auid = star.auid.unwrap_or_default();
        let band = match star
            .bands
            .iter()
            .find(|b| b.band.eq_ignore_ascii_case(mag_band))
        {
            Some(band) => band,
            None => {
                trace!("Dropping {}: no {} magnitude", auid, mag_band);
                continue;
            }
        };

        result.push(FieldObject {
            ra_hr: sexagesimal_to_hours(&star.ra)?,
            dec_deg: sexagesimal_to_degrees(&star.dec)?,
            mag: band.mag,
            mag_err: band.error,
            object_id: auid,
        });
    }

    Ok(result)
}
