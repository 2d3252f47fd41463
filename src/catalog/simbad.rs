use super::fetch::Fetch;
use super::rate_limit::RateLimiter;
use super::urls::simbad_url;
use super::{Catalog, CatalogResponse};
use crate::astro_math::deg_to_hours;
use crate::query::{Query, SimbadResult};
use crate::util::*;
use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Resolves an identifier to its canonical name, J2000 position and B/V/R/I magnitudes.
///
/// SIMBAD is asked for one attribute per request, in [`SimbadAttribute::SEQUENCE`] order,
/// with requests spaced by the rate limiter.
pub struct SimbadCatalog {
    base_url: String,
    fetcher: Arc<dyn Fetch>,
    limiter: RateLimiter,
}

impl SimbadCatalog {
    pub fn new(base_url: impl Into<String>, fetcher: Arc<dyn Fetch>, interval: Duration) -> Self {
        SimbadCatalog {
            base_url: base_url.into(),
            fetcher,
            limiter: RateLimiter::new(interval),
        }
    }

    pub async fn resolve(&self, query: &Query) -> Result<SimbadResult> {
        let object_id = query.object_id.as_str();
        debug!("Resolving {} with SIMBAD", object_id);

        let mut simbad_id = None;
        let mut ra_hr = None;
        let mut dec_deg = None;
        let mut mags = [None; 4];

        for attribute in SimbadAttribute::SEQUENCE {
            let cells = self.fetch_cells(object_id, attribute).await?;
            match attribute {
                SimbadAttribute::Identity => match cells.into_iter().next() {
                    Some(id) => simbad_id = Some(id),
                    None => return Err(CatalogError::NotFound(object_id.to_string())),
                },
                SimbadAttribute::RightAscension => {
                    ra_hr = attribute_value(&cells, attribute)?.map(deg_to_hours)
                }
                SimbadAttribute::Declination => dec_deg = attribute_value(&cells, attribute)?,
                SimbadAttribute::MagB => mags[0] = attribute_value(&cells, attribute)?,
                SimbadAttribute::MagV => mags[1] = attribute_value(&cells, attribute)?,
                SimbadAttribute::MagR => mags[2] = attribute_value(&cells, attribute)?,
                SimbadAttribute::MagI => mags[3] = attribute_value(&cells, attribute)?,
            }
        }

        let missing = |attribute: SimbadAttribute| {
            CatalogError::Parse(format!("SIMBAD has no {} for {}", attribute, object_id))
        };
        let [mag_b, mag_v, mag_r, mag_i] = mags;

        Ok(SimbadResult {
            object_id: object_id.to_string(),
            simbad_id: simbad_id.ok_or_else(|| CatalogError::NotFound(object_id.to_string()))?,
            ra_hr: ra_hr.ok_or_else(|| missing(SimbadAttribute::RightAscension))?,
            dec_deg: dec_deg.ok_or_else(|| missing(SimbadAttribute::Declination))?,
            mag_b,
            mag_v,
            mag_r,
            mag_i,
        })
    }

    async fn fetch_cells(&self, object_id: &str, attribute: SimbadAttribute) -> Result<Vec<String>> {
        let url = simbad_url(&self.base_url, object_id, attribute);
        debug!("Fetching SIMBAD {} for {}", attribute, object_id);
        let body = self.limiter.throttle(self.fetcher.fetch_text(&url)).await?;
        parse_table_cells(&body)
    }
}

#[async_trait]
impl Catalog for SimbadCatalog {
    fn catalog_type(&self) -> CatalogType {
        CatalogType::Simbad
    }

    async fn run_query(&self, query: &Query) -> Result<CatalogResponse> {
        Ok(CatalogResponse::Target(self.resolve(query).await?))
    }
}

// The first cell is always main_id; the attribute follows when SIMBAD has it
fn attribute_value(cells: &[String], attribute: SimbadAttribute) -> Result<Option<f64>> {
    match cells.get(1) {
        None => Ok(None),
        Some(text) => text.trim().parse::<f64>().map(Some).map_err(|_| {
            CatalogError::Parse(format!("SIMBAD {} is not a number: \"{}\"", attribute, text))
        }),
    }
}

/// Text content of every non-empty `TD` element of a VOTable, in document order
pub fn parse_table_cells(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut cells = Vec::new();
    let mut in_cell = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"TD" => in_cell = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"TD" => in_cell = false,
            Ok(Event::Text(e)) if in_cell => {
                let text = e
                    .unescape()
                    .map_err(|e| CatalogError::Parse(format!("VOTable cell: {}", e)))?;
                cells.push(text.into_owned());
            }
            Ok(Event::CData(e)) if in_cell => {
                cells.push(String::from_utf8_lossy(&e.into_inner()).into_owned());
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(CatalogError::Parse(format!(
                    "VOTable at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => (),
        }
    }

    Ok(cells)
}
