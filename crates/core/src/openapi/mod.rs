//! Swagger/OpenAPI to TypeScript declaration generator.
//!
//! This module parses Swagger 2.0 and OpenAPI 3.x documents (JSON or YAML) and generates:
//! - Model declarations (interfaces, enums, type aliases) from the document's definitions
//! - A client interface with one promise-returning member per operation

mod emitter;
mod ir;
mod spec;

pub use emitter::{GeneratedFiles, generate};
pub use spec::SourceFormat;
