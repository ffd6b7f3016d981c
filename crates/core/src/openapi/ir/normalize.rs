//! Normalization from a Swagger/OpenAPI document to API IR.
//!
//! This module holds all of the document-specific logic:
//! - Schema to TypeDef resolution (one precedence-ordered case analysis)
//! - Model, argument and return type resolution
//! - Operation flattening across paths and verbs

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::Result;
use crate::openapi::spec::{
    AdditionalProperties, Dialect, EnumValue, HttpMethod, OpenApiDocument, Operation, Parameter,
    Schema,
};

use super::api::{
    ApiDef, ArgumentDef, ClientDef, FunctionPropertyDef, ModelDef, ModelKind, PropertyDef, TypeDef,
};
use super::utils::{to_lower_camel, to_type_identifier};

/// Format and bare type names to the primitive they become.
static PRIMITIVE_TYPES: LazyLock<HashMap<&'static str, TypeDef>> = LazyLock::new(|| {
    [
        ("int32", TypeDef::Int),
        ("int64", TypeDef::Int),
        ("number", TypeDef::Int),
        ("integer", TypeDef::Int),
        ("float", TypeDef::Int),
        ("double", TypeDef::Int),
        ("string", TypeDef::Str),
        ("byte", TypeDef::Str),
        ("binary", TypeDef::Str),
        ("password", TypeDef::Str),
        ("email", TypeDef::Str),
        ("boolean", TypeDef::Bool),
        ("date", TypeDef::Date),
        ("date-time", TypeDef::Date),
    ]
    .into_iter()
    .collect()
});

fn primitive_for(name: &str) -> Option<TypeDef> {
    PRIMITIVE_TYPES.get(name).cloned()
}

/// Build the complete IR for one document.
pub fn build_api_def(doc: &OpenApiDocument, client_name: &str) -> Result<ApiDef> {
    let dialect = doc.dialect()?;
    let definitions = doc.definitions(dialect)?;

    let models_def: Vec<ModelDef> = definitions
        .iter()
        .map(|(name, schema)| resolve_model(name, schema))
        .collect();

    let mut members = Vec::new();
    let mut member_names = HashSet::new();

    for (path, item) in doc.path_items()? {
        let path_params = item
            .parameters
            .iter()
            .map(|p| doc.resolve_parameter(dialect, p))
            .collect::<Result<Vec<_>>>()?;

        for (method, op) in item.operations(path)? {
            let member = resolve_operation(doc, dialect, path, method, &op, &path_params)?;

            // Kept verbatim: consumers see the last declaration.
            if !member_names.insert(member.name.clone()) {
                warn!(
                    operation = %member.name,
                    path = %path,
                    method = method.as_str(),
                    "Duplicate operation identifier; the later declaration shadows the earlier one."
                );
            }

            members.push(member);
        }
    }

    debug!(
        ?dialect,
        models = models_def.len(),
        members = members.len(),
        "Normalized API document."
    );

    Ok(ApiDef {
        models_def,
        client_def: ClientDef {
            name: client_name.to_string(),
            members,
        },
    })
}

/// Resolve a schema node to its type.
///
/// The first matching rule wins:
/// 1. absent node: `Empty`
/// 2. nested `schema`: resolve that instead
/// 3. `$ref`: named reference to the pointer's last segment
/// 4. `enum`: inline literal list
///
/// Composition keywords are not understood; they are logged and the schema
/// resolves by its remaining keywords.
///
/// 5. array: sequence of the resolved `items` (strings when missing)
/// 6. object: properties, else additional-properties map, else empty object
/// 7. known `format`: its primitive
/// 8. bare `type` through the same table, defaulting to `Str`
pub fn resolve_type(node: Option<&Schema>) -> TypeDef {
    let Some(schema) = node else {
        return TypeDef::Empty;
    };

    if let Some(inner) = schema.schema.as_deref() {
        return resolve_type(Some(inner));
    }

    if let Some(ref_path) = &schema.ref_path {
        return TypeDef::Named(ref_to_type_name(ref_path));
    }

    if let Some(values) = &schema.enum_values {
        return TypeDef::Enum(values.iter().map(EnumValue::to_literal).collect());
    }

    if let Some(keyword) = schema.composition() {
        warn!(
            keyword,
            "Composition schemas are not supported; the inline schema resolves by its other keywords."
        );
    }

    match schema.type_name() {
        Some("array") => {
            return schema
                .items
                .as_deref()
                .map_or(TypeDef::Str, |items| resolve_type(Some(items)))
                .into_array();
        }
        Some("object") => return resolve_object(schema),
        _ => {}
    }

    if let Some(ty) = schema.format.as_deref().and_then(primitive_for) {
        return ty;
    }

    schema
        .type_name()
        .and_then(primitive_for)
        .unwrap_or(TypeDef::Str)
}

fn resolve_object(schema: &Schema) -> TypeDef {
    if let Some(properties) = &schema.properties {
        return TypeDef::Object(resolve_properties(properties, &schema.required_names()));
    }

    match &schema.additional_properties {
        Some(AdditionalProperties::Schema(value)) => {
            TypeDef::Map(Box::new(resolve_type(Some(value.as_ref()))))
        }
        // `true` carries no value schema, which resolves like an empty node's type.
        Some(AdditionalProperties::Bool(true)) => TypeDef::Map(Box::new(TypeDef::Str)),
        Some(AdditionalProperties::Bool(false)) | None => TypeDef::Object(Vec::new()),
    }
}

/// Resolve object properties in declared order.
pub fn resolve_properties(
    properties: &IndexMap<String, Schema>,
    required: &[&str],
) -> Vec<PropertyDef> {
    properties
        .iter()
        .map(|(name, schema)| PropertyDef {
            name: name.clone(),
            type_def: resolve_type(Some(schema)),
            optional: !required.contains(&name.as_str()),
        })
        .collect()
}

/// Resolve one entry of the definitions map. The name is mapped to a type
/// identifier the same way `$ref` targets are.
pub fn resolve_model(name: &str, schema: &Schema) -> ModelDef {
    let kind = if let Some(values) = &schema.enum_values {
        ModelKind::Enum(values.iter().map(EnumValue::to_literal).collect())
    } else if let Some(keyword) = schema.composition() {
        warn!(
            model = %name,
            keyword,
            "Composition schemas are not supported; model will be generated empty."
        );
        ModelKind::Object(Vec::new())
    } else if let Some(properties) = &schema.properties {
        ModelKind::Object(resolve_properties(properties, &schema.required_names()))
    } else if schema.type_name().is_none() && schema.ref_path.is_none() {
        ModelKind::Object(Vec::new())
    } else {
        match resolve_type(Some(schema)) {
            TypeDef::Object(props) => ModelKind::Object(props),
            other => ModelKind::Alias(other),
        }
    };

    ModelDef {
        name: to_type_identifier(name),
        kind,
    }
}

/// Resolve the success response of an operation.
///
/// Picks the first response, in declared order, keyed `default`, `2XX` or a
/// status in [200, 300), following a local `$ref`. Returns `None` when there
/// is no such response; a success response without a body is `Empty`.
pub fn resolve_return_type(
    doc: &OpenApiDocument,
    dialect: Dialect,
    op: &Operation,
) -> Result<Option<TypeDef>> {
    let Some((_, response)) = op.success_response(is_success_key)? else {
        return Ok(None);
    };
    let response = doc.resolve_response(dialect, &response)?;
    Ok(Some(resolve_type(response.body_schema())))
}

fn is_success_key(code: &str) -> bool {
    code == "default"
        || code.eq_ignore_ascii_case("2xx")
        || code
            .parse::<u16>()
            .is_ok_and(|status| (200..300).contains(&status))
}

/// Resolve a parameter into an argument.
pub fn resolve_argument(param: &Parameter) -> ArgumentDef {
    ArgumentDef {
        name: to_lower_camel(&param.name),
        type_def: resolve_type(Some(&param.schema)),
        optional: !param.required,
    }
}

/// Resolve an operation into a client member.
fn resolve_operation(
    doc: &OpenApiDocument,
    dialect: Dialect,
    path: &str,
    method: HttpMethod,
    op: &Operation,
    path_params: &[&Parameter],
) -> Result<FunctionPropertyDef> {
    let name = op
        .operation_id
        .clone()
        .unwrap_or_else(|| fallback_operation_name(path, method));

    let op_params = op
        .parameters
        .iter()
        .map(|p| doc.resolve_parameter(dialect, p))
        .collect::<Result<Vec<_>>>()?;

    let mut args: Vec<ArgumentDef> = merge_parameters(path_params, &op_params)
        .into_iter()
        .map(resolve_argument)
        .collect();

    if let Some(body) = &op.request_body {
        let body = doc.resolve_request_body(body)?;
        args.push(ArgumentDef {
            name: "body".to_string(),
            type_def: resolve_type(body.body_schema()),
            optional: !body.required,
        });
    }

    let return_type_def = resolve_return_type(doc, dialect, op)?.unwrap_or_else(|| {
        warn!(
            operation = %name,
            path = %path,
            method = method.as_str(),
            "Operation has no success response; its result will be typed unknown."
        );
        TypeDef::Empty
    });

    Ok(FunctionPropertyDef {
        name,
        args,
        return_type_def,
    })
}

/// Path-level parameters followed by operation-level ones; an operation-level
/// parameter replaces a path-level one of the same name. Cookie parameters
/// are dropped.
fn merge_parameters<'a>(path_params: &[&'a Parameter], op_params: &[&'a Parameter]) -> Vec<&'a Parameter> {
    let mut merged: Vec<&Parameter> = path_params
        .iter()
        .copied()
        .filter(|p| !p.is_cookie())
        .collect();

    for p in op_params.iter().copied().filter(|p| !p.is_cookie()) {
        merged.retain(|existing| existing.name != p.name);
        merged.push(p);
    }

    merged
}

/// Name for an operation without `operationId`: verb plus static path segments.
fn fallback_operation_name(path: &str, method: HttpMethod) -> String {
    let base = path
        .split('/')
        .filter(|s| !s.is_empty() && !s.starts_with('{'))
        .collect::<Vec<_>>()
        .join("_");
    to_lower_camel(&format!("{}_{}", method.as_str(), base))
}

/// Extract the model name from a `$ref` pointer: its last path segment,
/// mapped to the identifier the model is declared under.
fn ref_to_type_name(ref_path: &str) -> String {
    to_type_identifier(ref_path.rsplit('/').next().unwrap_or(ref_path))
}
