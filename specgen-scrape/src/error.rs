//! Scrape errors

use specgen_schema::CodecError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Section '{id}' not found in document")]
    SectionNotFound { id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_not_found_display() {
        let error = ScrapeError::SectionNotFound {
            id: "semantics".to_string(),
        };
        assert_eq!(error.to_string(), "Section 'semantics' not found in document");
    }

    #[test]
    fn test_fetch_display() {
        let error = ScrapeError::Fetch {
            url: "https://example.invalid/".to_string(),
            message: "dns failure".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch https://example.invalid/: dns failure"
        );
    }
}
