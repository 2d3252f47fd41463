use crate::catalog::{skyview_url, Fetch};
use crate::query::Query;
use crate::radec::{output_file_name, write_new_file, WriteOutcome};
use crate::util::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Downloads Digitized Sky Survey FITS images of a query field from SkyView
pub struct DssDownloader {
    base_url: String,
    directory: PathBuf,
    fetcher: Arc<dyn Fetch>,
}

impl DssDownloader {
    pub fn new(
        base_url: impl Into<String>,
        directory: impl Into<PathBuf>,
        fetcher: Arc<dyn Fetch>,
    ) -> Self {
        DssDownloader {
            base_url: base_url.into(),
            directory: directory.into(),
            fetcher,
        }
    }

    pub fn path_for(&self, query: &Query) -> PathBuf {
        self.directory.join(output_file_name(query, FITS_SUFFIX))
    }

    /// Fetches the image unless it was already downloaded
    pub async fn download(&self, query: &Query) -> Result<WriteOutcome> {
        let path = self.path_for(query);
        if path.exists() {
            info!("DSS image {} already exists", path.display());
            return Ok(WriteOutcome::AlreadyExists(path));
        }

        let url = skyview_url(&self.base_url, query);
        debug!("Downloading DSS image for {}", query.object_id);
        let image = self.fetcher.fetch_bytes(&url).await?;

        let outcome = write_new_file(&path, &image)?;
        info!("{}", outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct ImageFetcher {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Fetch for ImageFetcher {
        async fn fetch_text(&self, url: &str) -> Result<String> {
            Err(CatalogError::Transport(format!("unexpected text request {}", url)))
        }

        async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(url.contains("Survey=digitized+sky+survey"));
            Ok(b"SIMPLE  =                    T".to_vec())
        }
    }

    #[tokio::test]
    async fn test_download_once() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Arc::new(ImageFetcher::default());
        let downloader = DssDownloader::new(SKYVIEW_URL, dir.path().join("radec"), fetcher.clone());
        let query = Query::default();

        let path = dir.path().join("radec").join("wasp_12.V.060.fits");
        assert_eq!(
            downloader.download(&query).await.unwrap(),
            WriteOutcome::Saved(path.clone())
        );
        assert!(std::fs::read(&path).unwrap().starts_with(b"SIMPLE"));

        assert_eq!(
            downloader.download(&query).await.unwrap(),
            WriteOutcome::AlreadyExists(path)
        );
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }
}
