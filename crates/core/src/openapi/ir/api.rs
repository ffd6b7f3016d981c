//! API-level IR produced by the schema resolver.
//!
//! - TypeDef: the closed set of shapes a schema can take
//! - ModelDef: one reusable model (enum, object or alias)
//! - FunctionPropertyDef: one client member per operation
//! - ApiDef: everything one generation run emits
//!
//! Named references hold only the model name, never the model itself, so
//! self-referencing and mutually referencing models build no cycles.

/// Resolved type of a schema node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
    /// Any numeric format.
    Int,
    /// Strings and string-like formats; also the fallback for unknown types.
    Str,
    /// Booleans.
    Bool,
    /// `date` and `date-time`.
    Date,
    /// No schema at all (absent response body, null node).
    Empty,
    /// Inline closed set of string literals, in declared order.
    Enum(Vec<String>),
    /// Inline object with its properties, in declared order.
    Object(Vec<PropertyDef>),
    /// String-keyed map of the given value type.
    Map(Box<TypeDef>),
    /// Reference to a model by name.
    Named(String),
    /// Sequence of the element type.
    Array(Box<TypeDef>),
}

impl TypeDef {
    /// Wrap this type in a sequence.
    pub fn into_array(self) -> TypeDef {
        TypeDef::Array(Box::new(self))
    }

    /// Visit every model name referenced anywhere inside this type.
    pub fn for_each_named<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            TypeDef::Named(name) => f(name),
            TypeDef::Array(inner) | TypeDef::Map(inner) => inner.for_each_named(f),
            TypeDef::Object(props) => {
                for prop in props {
                    prop.type_def.for_each_named(f);
                }
            }
            TypeDef::Int
            | TypeDef::Str
            | TypeDef::Bool
            | TypeDef::Date
            | TypeDef::Empty
            | TypeDef::Enum(_) => {}
        }
    }
}

/// A named, possibly absent field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    pub name: String,
    pub type_def: TypeDef,
    pub optional: bool,
}

/// Operation parameters share the property shape.
pub type ArgumentDef = PropertyDef;

/// Shape of a reusable model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelKind {
    /// Enumeration of literal strings.
    Enum(Vec<String>),
    /// Structure with properties.
    Object(Vec<PropertyDef>),
    /// Any other concrete shape (arrays, maps, primitives).
    Alias(TypeDef),
}

/// One entry of the document's definitions map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDef {
    pub name: String,
    pub kind: ModelKind,
}

/// One client member, built from one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionPropertyDef {
    /// The operation's identifier, verbatim.
    pub name: String,
    /// Arguments in document order.
    pub args: Vec<ArgumentDef>,
    pub return_type_def: TypeDef,
}

/// The client interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDef {
    pub name: String,
    pub members: Vec<FunctionPropertyDef>,
}

/// Complete IR for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDef {
    pub models_def: Vec<ModelDef>,
    pub client_def: ClientDef,
}
