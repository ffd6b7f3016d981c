//! Intermediate Representation for Swagger/OpenAPI to TypeScript declaration generation.
//!
//! This module defines a three-layer architecture:
//! 1. API-level IR: resolved models and client members (document-agnostic)
//! 2. TypeScript declaration tree: types, interfaces, enums, imports
//! 3. Emission: declaration tree to TypeScript code strings via the `Emit` trait
//!
//! The separation allows:
//! - All document corner cases resolved in normalization
//! - Code generation builds a structured tree (testable)
//! - Emission is purely mechanical string building
//!
//! ## Module Structure
//!
//! - `api`: API-level IR (TypeDef, ModelDef, FunctionPropertyDef, ApiDef)
//! - `normalize`: document -> API IR conversion
//! - `types`: TypeScript declaration tree (TsType, TsTypeDef, TsModule)
//! - `codegen`: API IR -> declaration tree
//! - `emit`: declaration tree -> code strings (via Emit trait)
//! - `utils`: Common utilities shared across modules

mod api;
mod codegen;
mod emit;
mod normalize;
mod types;
pub mod utils;

// Re-export the main entry points
pub use codegen::{codegen_client, codegen_models};
pub use emit::Emit;
pub use normalize::build_api_def;
