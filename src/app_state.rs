use crate::fetcher::{FetchError, HttpFetcher, PageFetcher};
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher + Send + Sync>,
}

impl AppState {
    pub fn new(fetch_timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: Arc::new(HttpFetcher::new(fetch_timeout)?),
        })
    }
}
