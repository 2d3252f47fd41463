pub use fetch::{Fetch, HttpFetcher, HttpFetcherBuilder};
pub use rate_limit::RateLimiter;
pub use simbad::{parse_table_cells, SimbadCatalog};
pub use urls::*;
pub use vsp::{decode_chart, VspCatalog};

use crate::config::CatalogSettings;
use crate::query::{Query, QueryResult, SimbadResult};
use crate::util::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

mod fetch;
mod rate_limit;
mod simbad;
mod urls;
mod vsp;

/// What a catalog returns: SIMBAD resolves the target itself, photometry catalogs list field stars
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogResponse {
    Target(SimbadResult),
    FieldStars(QueryResult),
}

impl CatalogResponse {
    pub fn into_target(self) -> Result<SimbadResult> {
        match self {
            CatalogResponse::Target(target) => Ok(target),
            CatalogResponse::FieldStars(_) => Err(CatalogError::InvalidValue(
                "Catalog returned field stars, not a resolved target".to_string(),
            )),
        }
    }

    pub fn into_field_stars(self) -> Result<QueryResult> {
        match self {
            CatalogResponse::FieldStars(result) => Ok(result),
            CatalogResponse::Target(_) => Err(CatalogError::InvalidValue(
                "SIMBAD resolves a target and has no field stars".to_string(),
            )),
        }
    }
}

#[async_trait]
pub trait Catalog: Send + Sync {
    fn catalog_type(&self) -> CatalogType;
    async fn run_query(&self, query: &Query) -> Result<CatalogResponse>;
}

/// Catalog implementations keyed by type
#[derive(Default)]
pub struct CatalogRegistry {
    catalogs: HashMap<CatalogType, Arc<dyn Catalog>>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// SIMBAD and VSP sharing one fetcher
    pub fn with_fetcher(settings: &CatalogSettings, fetcher: Arc<dyn Fetch>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SimbadCatalog::new(
            settings.simbad_url.clone(),
            fetcher.clone(),
            settings.request_interval(),
        )));
        registry.register(Arc::new(VspCatalog::new(settings.vsp_url.clone(), fetcher)));
        registry
    }

    /// Replaces any catalog already registered for the same type
    pub fn register(&mut self, catalog: Arc<dyn Catalog>) {
        self.catalogs.insert(catalog.catalog_type(), catalog);
    }

    pub fn get(&self, catalog_type: CatalogType) -> Result<Arc<dyn Catalog>> {
        self.catalogs
            .get(&catalog_type)
            .cloned()
            .ok_or(CatalogError::UnsupportedCatalog(catalog_type))
    }

    pub async fn run_query(&self, query: &Query) -> Result<CatalogResponse> {
        let catalog = self.get(query.catalog_type)?;
        debug!("Running {} query for {}", query.catalog_type, query.object_id);
        catalog.run_query(query).await
    }
}
