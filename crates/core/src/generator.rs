//! File-to-files entry point: read a document, generate, persist.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::openapi::{self, SourceFormat};
use crate::output::write_outputs;

/// Generate the models and client files for the document at `source` into `dest`.
pub fn generate_from_path(source: &Path, dest: &Path, config: &GeneratorConfig) -> Result<()> {
    let text = fs::read_to_string(source).map_err(|source_err| GenerateError::Read {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let format = SourceFormat::detect(source, &text);
    debug!(
        source = %source.display(),
        ?format,
        document_len = text.len(),
        "Read API document."
    );

    // Render both files completely before touching the destination
    let files = openapi::generate(&text, format, config)?;

    write_outputs(dest, config, &files)?;

    info!(
        destination = %dest.display(),
        models = %config.models_file_name(),
        client = %config.client_file_name(),
        "TypeScript declarations generated."
    );

    Ok(())
}
