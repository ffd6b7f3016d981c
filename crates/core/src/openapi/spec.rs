//! Swagger 2 / OpenAPI 3 document structs for serde deserialization.
//!
//! Only the subset the resolver reads is modelled. Every map is an
//! [`IndexMap`] so declaration order survives from the source text to the
//! generated declarations.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{GenerateError, Result};

/// Document dialect, decided by the leading digit of the version marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `swagger: "2.0"`: flat `definitions`, parameter schemas inline.
    Swagger2,
    /// `openapi: "3.x"`: `components.schemas`, schemas nested under `schema`/`content`.
    OpenApi3,
}

impl Dialect {
    /// Prefix of a local reference to a reusable parameter.
    fn parameter_ref_prefix(self) -> &'static str {
        match self {
            Dialect::Swagger2 => "#/parameters/",
            Dialect::OpenApi3 => "#/components/parameters/",
        }
    }

    /// Prefix of a local reference to a reusable response.
    fn response_ref_prefix(self) -> &'static str {
        match self {
            Dialect::Swagger2 => "#/responses/",
            Dialect::OpenApi3 => "#/components/responses/",
        }
    }
}

/// Prefix of a local reference to a reusable request body.
const REQUEST_BODY_REF_PREFIX: &str = "#/components/requestBodies/";

/// Prefix of specification extension keys, skipped wherever a map is keyed
/// by user names (paths, response codes).
const EXTENSION_PREFIX: &str = "x-";

/// Text format of the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON text.
    Json,
    /// YAML text.
    Yaml,
}

impl SourceFormat {
    /// Pick the format from a file extension, falling back to sniffing the content.
    pub fn detect(path: &Path, text: &str) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                SourceFormat::Yaml
            }
            _ => Self::sniff(text),
        }
    }

    /// JSON documents start with an object; anything else is read as YAML.
    pub fn sniff(text: &str) -> Self {
        if text.trim_start().starts_with('{') {
            SourceFormat::Json
        } else {
            SourceFormat::Yaml
        }
    }
}

/// Parse document text into an order-preserving generic tree.
pub fn parse_tree(text: &str, format: SourceFormat) -> Result<Value> {
    match format {
        SourceFormat::Json => {
            serde_json::from_str(text).map_err(|e| GenerateError::Parse(format!("invalid JSON: {e}")))
        }
        SourceFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|e| GenerateError::Parse(format!("invalid YAML: {e}")))
        }
    }
}

/// Root of a Swagger 2 or OpenAPI 3 document.
#[derive(Debug, Deserialize)]
pub struct OpenApiDocument {
    /// Swagger 2 version marker.
    pub swagger: Option<Value>,
    /// OpenAPI 3 version marker.
    pub openapi: Option<Value>,
    /// Path templates to their path items, kept raw until
    /// [`OpenApiDocument::path_items`] so extension keys can be skipped.
    #[serde(default)]
    pub paths: IndexMap<String, Value>,
    /// Swagger 2 model definitions.
    pub definitions: Option<IndexMap<String, Schema>>,
    /// Swagger 2 reusable parameters.
    pub parameters: Option<IndexMap<String, Parameter>>,
    /// Swagger 2 reusable responses.
    pub responses: Option<IndexMap<String, Response>>,
    /// OpenAPI 3 components.
    pub components: Option<Components>,
}

/// OpenAPI 3 `components` section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Reusable schemas (the models).
    pub schemas: Option<IndexMap<String, Schema>>,
    /// Reusable parameters.
    pub parameters: Option<IndexMap<String, Parameter>>,
    /// Reusable request bodies.
    pub request_bodies: Option<IndexMap<String, RequestBody>>,
    /// Reusable responses.
    pub responses: Option<IndexMap<String, Response>>,
}

/// One path template. Keys other than HTTP verbs (`summary`, `servers`,
/// vendor extensions, ...) are kept raw and skipped by [`PathItem::operations`].
#[derive(Debug, Deserialize)]
pub struct PathItem {
    /// Parameters shared by every operation under this path.
    #[serde(default)]
    pub parameters: Vec<RefOr<Parameter>>,
    #[serde(flatten)]
    entries: IndexMap<String, Value>,
}

/// HTTP verbs that may carry an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
    /// PATCH
    Patch,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// Map a path item key to a verb.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "get" => Some(HttpMethod::Get),
            "put" => Some(HttpMethod::Put),
            "post" => Some(HttpMethod::Post),
            "delete" => Some(HttpMethod::Delete),
            "options" => Some(HttpMethod::Options),
            "head" => Some(HttpMethod::Head),
            "patch" => Some(HttpMethod::Patch),
            "trace" => Some(HttpMethod::Trace),
            _ => None,
        }
    }

    /// Lowercase verb as written in documents.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl PathItem {
    /// The verb operations of this path, in declared order.
    pub fn operations(&self, path: &str) -> Result<Vec<(HttpMethod, Operation)>> {
        self.entries
            .iter()
            .filter_map(|(key, value)| HttpMethod::from_key(key).map(|method| (method, value)))
            .map(|(method, value)| {
                let op = Operation::deserialize(value).map_err(|e| {
                    GenerateError::MalformedDocument(format!(
                        "operation {} {path}: {e}",
                        method.as_str()
                    ))
                })?;
                Ok((method, op))
            })
            .collect()
    }
}

/// An API operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Declared identifier, used verbatim as the client member name.
    pub operation_id: Option<String>,
    /// Operation-level parameters.
    #[serde(default)]
    pub parameters: Vec<RefOr<Parameter>>,
    /// OpenAPI 3 request body.
    pub request_body: Option<RefOr<RequestBody>>,
    /// Responses keyed by status code, `default` or a range such as `2XX`.
    /// Kept raw: only the chosen success response is ever deserialized.
    #[serde(default)]
    pub responses: IndexMap<String, Value>,
}

impl Operation {
    /// The first response, in declared order, whose key passes `is_success`.
    /// Extension keys are never considered.
    pub fn success_response(
        &self,
        is_success: impl Fn(&str) -> bool,
    ) -> Result<Option<(&str, RefOr<Response>)>> {
        let Some((code, value)) = self
            .responses
            .iter()
            .filter(|(code, _)| !code.starts_with(EXTENSION_PREFIX))
            .find(|(code, _)| is_success(code))
        else {
            return Ok(None);
        };
        let response = RefOr::<Response>::deserialize(value)
            .map_err(|e| GenerateError::MalformedDocument(format!("response {code}: {e}")))?;
        Ok(Some((code.as_str(), response)))
    }
}

/// An object either inline or as a local `$ref`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    /// `{ "$ref": "#/parameters/Limit" }`
    Ref {
        /// The reference pointer.
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    /// An inline object.
    Inline(T),
}

/// A path, query, header, cookie or (Swagger 2) body parameter.
///
/// Swagger 2 declares `type`/`format`/`enum`/`items` directly on the parameter
/// and uses a nested `schema` for body parameters; OpenAPI 3 always nests a
/// `schema`. Both land in the flattened [`Schema`].
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    /// Name as declared in the document.
    pub name: String,
    /// `path`, `query`, `header`, `cookie`, `body` or `formData`.
    #[serde(rename = "in")]
    pub location: Option<String>,
    /// Whether the caller must supply it.
    #[serde(default)]
    pub required: bool,
    /// Type information of the parameter.
    #[serde(flatten)]
    pub schema: Schema,
}

impl Parameter {
    /// Cookie parameters are handled by the transport, never by client members.
    pub fn is_cookie(&self) -> bool {
        self.location.as_deref() == Some("cookie")
    }
}

/// OpenAPI 3 request body.
#[derive(Debug, Deserialize)]
pub struct RequestBody {
    /// Whether the body is mandatory.
    #[serde(default)]
    pub required: bool,
    /// Media types to their schema.
    pub content: Option<IndexMap<String, MediaType>>,
}

/// A response definition.
#[derive(Debug, Deserialize)]
pub struct Response {
    /// Swagger 2 response schema.
    pub schema: Option<Schema>,
    /// OpenAPI 3 media types.
    pub content: Option<IndexMap<String, MediaType>>,
}

impl Response {
    /// The response body schema: the Swagger 2 `schema`, else the first
    /// OpenAPI 3 media type that declares one.
    pub fn body_schema(&self) -> Option<&Schema> {
        self.schema.as_ref().or_else(|| first_media_schema(self.content.as_ref()))
    }
}

impl RequestBody {
    /// Schema of the first media type that declares one.
    pub fn body_schema(&self) -> Option<&Schema> {
        first_media_schema(self.content.as_ref())
    }
}

fn first_media_schema(content: Option<&IndexMap<String, MediaType>>) -> Option<&Schema> {
    content?.values().find_map(|media| media.schema.as_ref())
}

/// Media type content (e.g. `application/json`).
#[derive(Debug, Deserialize)]
pub struct MediaType {
    /// Body schema for this media type.
    pub schema: Option<Schema>,
}

/// Schema object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Reference to a model.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Nested schema (parameters and responses wrap their type in one).
    pub schema: Option<Box<Schema>>,

    /// Declared type.
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    /// Format hint (e.g. int64, date-time).
    pub format: Option<String>,

    /// Enum literals.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<EnumValue>>,

    /// Item schema for arrays.
    pub items: Option<Box<Schema>>,

    /// Properties for objects.
    pub properties: Option<IndexMap<String, Schema>>,

    /// Required property names. Kept raw: some documents put the
    /// parameter-style boolean on property schemas.
    pub required: Option<Value>,

    /// Value schema of open objects.
    pub additional_properties: Option<AdditionalProperties>,

    /// Intersection composition.
    pub all_of: Option<Vec<Schema>>,

    /// Union composition.
    pub any_of: Option<Vec<Schema>>,

    /// Exclusive union composition.
    pub one_of: Option<Vec<Schema>>,
}

impl Schema {
    /// The primary declared type name, ignoring `null` in 3.1 type arrays.
    pub fn type_name(&self) -> Option<&str> {
        match self.schema_type.as_ref()? {
            SchemaType::Single(t) => Some(t.as_str()),
            SchemaType::Multiple(types) => types.iter().map(String::as_str).find(|t| *t != "null"),
        }
    }

    /// Names listed under `required`; anything other than a list of names
    /// is ignored.
    pub fn required_names(&self) -> Vec<&str> {
        match &self.required {
            Some(Value::Array(names)) => names.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Name of the composition keyword this schema uses, if any.
    pub fn composition(&self) -> Option<&'static str> {
        if self.all_of.is_some() {
            Some("allOf")
        } else if self.one_of.is_some() {
            Some("oneOf")
        } else if self.any_of.is_some() {
            Some("anyOf")
        } else {
            None
        }
    }
}

/// Enum literal: string, integer, float, boolean or null.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// `"OPEN"`
    String(String),
    /// `42`
    Integer(i64),
    /// `1.5`
    Float(f64),
    /// `true`
    Bool(bool),
    /// `null`
    Null,
}

impl EnumValue {
    /// Text of the literal; non-string values use their JSON spelling.
    pub fn to_literal(&self) -> String {
        match self {
            EnumValue::String(s) => s.clone(),
            EnumValue::Integer(n) => n.to_string(),
            EnumValue::Float(f) => f.to_string(),
            EnumValue::Bool(b) => b.to_string(),
            EnumValue::Null => "null".to_string(),
        }
    }
}

/// `type` is a single name or, in OpenAPI 3.1, a list including `null`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// `"string"`
    Single(String),
    /// `["string", "null"]`
    Multiple(Vec<String>),
}

/// `additionalProperties` is a boolean or a value schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` (any value) or `false` (closed object).
    Bool(bool),
    /// Value schema.
    Schema(Box<Schema>),
}

impl OpenApiDocument {
    /// Deserialize a document from its generic tree.
    pub fn from_value(value: Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| GenerateError::MalformedDocument(e.to_string()))
    }

    /// Parse a document from text.
    pub fn from_text(text: &str, format: SourceFormat) -> Result<Self> {
        Self::from_value(parse_tree(text, format)?)
    }

    /// Detect the dialect from the version marker.
    pub fn dialect(&self) -> Result<Dialect> {
        let marker = self
            .swagger
            .as_ref()
            .or(self.openapi.as_ref())
            .ok_or(GenerateError::MissingVersion)?;
        let version = match marker {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => return Err(GenerateError::UnsupportedVersion(other.to_string())),
        };
        if version.starts_with('2') {
            Ok(Dialect::Swagger2)
        } else if version.starts_with('3') {
            Ok(Dialect::OpenApi3)
        } else {
            Err(GenerateError::UnsupportedVersion(version))
        }
    }

    /// The dialect-appropriate model definitions map.
    pub fn definitions(&self, dialect: Dialect) -> Result<&IndexMap<String, Schema>> {
        let definitions = match dialect {
            Dialect::Swagger2 => self.definitions.as_ref(),
            Dialect::OpenApi3 => self.components.as_ref().and_then(|c| c.schemas.as_ref()),
        };
        definitions.ok_or(GenerateError::MissingDefinitions)
    }

    /// Path items in declared order, skipping extension keys.
    pub fn path_items(&self) -> Result<Vec<(&str, PathItem)>> {
        self.paths
            .iter()
            .filter(|(path, _)| !path.starts_with(EXTENSION_PREFIX))
            .map(|(path, value)| {
                let item = PathItem::deserialize(value).map_err(|e| {
                    GenerateError::MalformedDocument(format!("path {path}: {e}"))
                })?;
                Ok((path.as_str(), item))
            })
            .collect()
    }

    /// Resolve a parameter that may be a local reference.
    pub fn resolve_parameter<'a>(
        &'a self,
        dialect: Dialect,
        param: &'a RefOr<Parameter>,
    ) -> Result<&'a Parameter> {
        let reusable = match dialect {
            Dialect::Swagger2 => self.parameters.as_ref(),
            Dialect::OpenApi3 => self.components.as_ref().and_then(|c| c.parameters.as_ref()),
        };
        resolve_local(param, dialect.parameter_ref_prefix(), reusable)
    }

    /// Resolve a request body that may be a local reference.
    pub fn resolve_request_body<'a>(&'a self, body: &'a RefOr<RequestBody>) -> Result<&'a RequestBody> {
        let reusable = self.components.as_ref().and_then(|c| c.request_bodies.as_ref());
        resolve_local(body, REQUEST_BODY_REF_PREFIX, reusable)
    }

    /// Resolve a response that may be a local reference.
    pub fn resolve_response<'a>(
        &'a self,
        dialect: Dialect,
        response: &'a RefOr<Response>,
    ) -> Result<&'a Response> {
        let reusable = match dialect {
            Dialect::Swagger2 => self.responses.as_ref(),
            Dialect::OpenApi3 => self.components.as_ref().and_then(|c| c.responses.as_ref()),
        };
        resolve_local(response, dialect.response_ref_prefix(), reusable)
    }
}

/// Follow a local `$ref` into the reusable map it must point at.
fn resolve_local<'a, T>(
    item: &'a RefOr<T>,
    prefix: &str,
    reusable: Option<&'a IndexMap<String, T>>,
) -> Result<&'a T> {
    let ref_path = match item {
        RefOr::Inline(inline) => return Ok(inline),
        RefOr::Ref { ref_path } => ref_path,
    };
    ref_path
        .strip_prefix(prefix)
        .and_then(|name| reusable?.get(name))
        .ok_or_else(|| GenerateError::UnresolvedReference(ref_path.clone()))
}
