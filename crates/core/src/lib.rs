//! Generate TypeScript model and client declarations from Swagger 2.0 and
//! OpenAPI 3.x documents.
//!
//! The pipeline is linear: document text is parsed into typed document
//! structs, resolved into an intermediate representation, turned into a
//! TypeScript declaration tree and printed. The two output files are written
//! together or not at all.

#![forbid(unsafe_code)]
#![deny(unused_must_use, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

mod config;
mod error;
mod generator;
mod openapi;
mod output;

pub use config::{DEFAULT_CLIENT_FILE, DEFAULT_CLIENT_NAME, DEFAULT_MODELS_FILE, GeneratorConfig};
pub use error::{GenerateError, Result};
pub use generator::generate_from_path;
pub use openapi::{GeneratedFiles, SourceFormat, generate};
pub use output::write_outputs;
