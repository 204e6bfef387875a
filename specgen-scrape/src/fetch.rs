//! HTTP retrieval of reference documents

use crate::error::{Result, ScrapeError};
use tracing::info;

/// Upper bound on a downloaded document. The single page HTML standard is well above the
/// ureq default of 10 MiB.
pub const MAX_DOCUMENT_BYTES: u64 = 64 * 1024 * 1024;

/// Download the document at `url`
pub fn fetch_document(url: &str) -> Result<Vec<u8>> {
    info!(%url, "fetching document");

    let mut response = ureq::get(url).call().map_err(|e| fetch_error(url, e))?;

    let body = response
        .body_mut()
        .with_config()
        .limit(MAX_DOCUMENT_BYTES)
        .read_to_vec()
        .map_err(|e| fetch_error(url, e))?;

    info!(%url, bytes = body.len(), "fetched document");
    Ok(body)
}

fn fetch_error(url: &str, error: ureq::Error) -> ScrapeError {
    ScrapeError::Fetch {
        url: url.to_string(),
        message: error.to_string(),
    }
}
