//! TypeScript code emission via the Emit trait.
//!
//! Each declaration node implements `Emit`; printing is purely mechanical and
//! deterministic: the same tree always yields the same bytes.

use super::types::{TsImport, TsModule, TsParam, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind};
use super::utils::{escape_ts_string, quote_if_needed};

/// Trait for emitting TypeScript code from declaration nodes.
pub trait Emit {
    /// Convert the node to its TypeScript source text.
    fn emit(&self) -> String;
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string".to_string(),
            TsPrimitive::Number => "number".to_string(),
            TsPrimitive::Boolean => "boolean".to_string(),
            TsPrimitive::Unknown => "unknown".to_string(),
        }
    }
}

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array(inner) => {
                let inner_str = inner.emit();
                // Wrap complex types in parentheses
                if matches!(**inner, TsType::Union(_) | TsType::Function { .. }) {
                    format!("({inner_str})[]")
                } else {
                    format!("{inner_str}[]")
                }
            }
            TsType::Union(types) if types.is_empty() => "never".to_string(),
            TsType::Union(types) => types.iter().map(|t| t.emit()).collect::<Vec<_>>().join(" | "),
            TsType::Object(props) => {
                if props.is_empty() {
                    "{}".to_string()
                } else {
                    let parts: Vec<_> = props.iter().map(|p| p.emit()).collect();
                    format!("{{ {} }}", parts.join("; "))
                }
            }
            TsType::Record { key, value } => {
                format!("Record<{}, {}>", key.emit(), value.emit())
            }
            TsType::Literal(s) => format!("\"{}\"", escape_ts_string(s)),
            TsType::Ref(name) => name.clone(),
            TsType::Generic { name, args } => {
                let args_str = args.iter().map(|a| a.emit()).collect::<Vec<_>>().join(", ");
                format!("{name}<{args_str}>")
            }
            TsType::Function { params, ret } => {
                let params_str = params.iter().map(|p| p.emit()).collect::<Vec<_>>().join(", ");
                format!("({params_str}) => {}", ret.emit())
            }
        }
    }
}

impl Emit for TsProp {
    fn emit(&self) -> String {
        let key = quote_if_needed(&self.name);
        let opt = if self.optional { "?" } else { "" };
        format!("{key}{opt}: {}", self.ty.emit())
    }
}

impl Emit for TsParam {
    fn emit(&self) -> String {
        let opt = if self.optional { "?" } else { "" };
        format!("{}{opt}: {}", self.name, self.ty.emit())
    }
}

// =============================================================================
// Type Definitions
// =============================================================================

impl Emit for TsTypeDef {
    fn emit(&self) -> String {
        match &self.kind {
            TypeDefKind::Interface { properties } if properties.is_empty() => {
                format!("export interface {} {{}}\n", self.name)
            }
            TypeDefKind::Interface { properties } => {
                let mut output = format!("export interface {} {{\n", self.name);
                for prop in properties {
                    output.push_str(&format!("  {};\n", prop.emit()));
                }
                output.push_str("}\n");
                output
            }
            TypeDefKind::TypeAlias { ty } => {
                format!("export type {} = {};\n", self.name, ty.emit())
            }
            TypeDefKind::Enum { members } if members.is_empty() => {
                format!("export enum {} {{}}\n", self.name)
            }
            TypeDefKind::Enum { members } => {
                let mut output = format!("export enum {} {{\n", self.name);
                for (key, value) in members {
                    output.push_str(&format!(
                        "  {} = \"{}\",\n",
                        quote_if_needed(key),
                        escape_ts_string(value)
                    ));
                }
                output.push_str("}\n");
                output
            }
        }
    }
}

// =============================================================================
// Imports
// =============================================================================

impl Emit for TsImport {
    fn emit(&self) -> String {
        format!("import {{ {} }} from \"{}\";\n", self.items.join(", "), self.from)
    }
}

// =============================================================================
// Module
// =============================================================================

impl Emit for TsModule {
    fn emit(&self) -> String {
        let mut output = String::new();

        for import in &self.imports {
            output.push_str(&import.emit());
        }

        if !self.imports.is_empty() && !self.types.is_empty() {
            output.push('\n');
        }

        let type_defs: Vec<_> = self.types.iter().map(|t| t.emit()).collect();
        output.push_str(&type_defs.join("\n"));

        output
    }
}

// =============================================================================
// Tests
// =============================================================================
