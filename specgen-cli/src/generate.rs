//! The generation pipeline: read the document, scan it, write the schema file

use specgen_config::SpecgenConfig;
use specgen_schema::{codec, CodecError, Spec, SpecName};
use specgen_scrape::{fetch, generate_html_spec_with, ScanRules, ScrapeError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("No generator for {0}")]
    Unsupported(SpecName),
}

/// Where the HTML document comes from
#[derive(Debug, Clone)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

/// Generate every requested spec and return the written paths
pub fn run(
    config: &SpecgenConfig,
    targets: &[SpecName],
    source: &Source,
) -> Result<Vec<PathBuf>, GenerateError> {
    targets
        .iter()
        .map(|target| match target {
            SpecName::Html => generate_html(config, source),
            other => Err(GenerateError::Unsupported(*other)),
        })
        .collect()
}

fn generate_html(config: &SpecgenConfig, source: &Source) -> Result<PathBuf, GenerateError> {
    let document = read_source(source)?;
    let rules: ScanRules = config.html.scan.clone().into();
    let spec = generate_html_spec_with(document.as_slice(), &rules)?;
    info!(
        elements = spec.elements.len(),
        attributes = spec.attributes.len(),
        "generated HTML spec"
    );

    let path = config.output.html_path();
    write_spec(&spec, &path, config.output.pretty)?;
    info!(path = %path.display(), "wrote HTML spec");
    Ok(path)
}

fn read_source(source: &Source) -> Result<Vec<u8>, GenerateError> {
    match source {
        Source::File(path) => {
            debug!(path = %path.display(), "reading local document");
            fs::read(path).map_err(|source| GenerateError::Read {
                path: path.clone(),
                source,
            })
        }
        Source::Url(url) => Ok(fetch::fetch_document(url)?),
    }
}

/// Encode `spec` next to `path` and move it into place once complete
///
/// A failure at any point leaves no file at `path`.
pub fn write_spec(spec: &Spec, path: &Path, pretty: bool) -> Result<(), GenerateError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_error = |source: io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(write_error)?;
    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;

    if pretty {
        codec::to_writer_pretty(&mut file, spec)?;
    } else {
        file.write_all(codec::to_string(spec)?.as_bytes())
            .map_err(write_error)?;
    }
    file.write_all(b"\n").map_err(write_error)?;

    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
