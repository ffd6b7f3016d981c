//! TypeScript declaration emitter for Swagger/OpenAPI documents.
//!
//! This module is a thin wrapper around the IR-based code generation.
//! The pipeline is:
//! 1. Parse: document text -> OpenApiDocument
//! 2. Normalize: OpenApiDocument -> ApiDef (all document logic resolved)
//! 3. Codegen: ApiDef -> TsModule per output file
//! 4. Emit: TsModule -> String (via Emit trait)

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::openapi::ir::{Emit, build_api_def, codegen_client, codegen_models};
use crate::openapi::spec::{OpenApiDocument, SourceFormat};

/// Rendered contents of both output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// Model declarations.
    pub models: String,
    /// Client interface, importing from the models file.
    pub client: String,
}

/// Generate both TypeScript files from document text.
pub fn generate(text: &str, format: SourceFormat, config: &GeneratorConfig) -> Result<GeneratedFiles> {
    // Parse document
    let doc = OpenApiDocument::from_text(text, format)?;

    // Normalize to API IR (all document logic resolved here)
    let api = build_api_def(&doc, &config.client_name)?;

    // Generate declaration trees and emit to strings
    let models = codegen_models(&api).emit();
    let client = codegen_client(&api.client_def, &config.models_file).emit();

    debug!(
        models_bytes = models.len(),
        client_bytes = client.len(),
        "Rendered TypeScript declarations."
    );

    Ok(GeneratedFiles { models, client })
}
