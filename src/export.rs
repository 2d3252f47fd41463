use crate::catalog::CatalogRegistry;
use crate::dss::DssDownloader;
use crate::query::Query;
use crate::radec::{RadecWriter, WriteOutcome};
use crate::util::*;
use tracing::debug;

/// Writes the radec file of a query field, then the DSS image when a downloader is given.
///
/// A DSS query only fetches the image. No image is fetched for a field without records.
pub async fn export_field(
    registry: &CatalogRegistry,
    writer: &RadecWriter,
    downloader: Option<&DssDownloader>,
    query: &Query,
) -> Result<Vec<WriteOutcome>> {
    let mut outcomes = Vec::new();

    if query.catalog_type != CatalogType::Dss {
        let result = registry.run_query(query).await?.into_field_stars()?;
        let outcome = writer.write(query, &result)?;
        let no_records = matches!(outcome, WriteOutcome::NoRecords(_));
        outcomes.push(outcome);
        if no_records {
            debug!("Skipping DSS image of {}", query.object_id);
            return Ok(outcomes);
        }
    }

    if let Some(downloader) = downloader {
        outcomes.push(downloader.download(query).await?);
    }

    Ok(outcomes)
}
