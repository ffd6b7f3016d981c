//! TypeScript declaration tree built by the emitter.
//!
//! This module defines the TypeScript type-level representation:
//! - TsType: Types (primitives, arrays, unions, objects, functions, etc.)
//! - TsTypeDef: Top-level declarations (interfaces, enums, type aliases)
//! - TsModule: One output file (imports followed by declarations)

/// TypeScript type representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Primitive types: string, number, boolean, unknown
    Primitive(TsPrimitive),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Union type: A | B | C
    Union(Vec<TsType>),
    /// Object type: { foo: string; bar?: number }
    Object(Vec<TsProp>),
    /// Record type: Record<K, V>
    Record {
        key: Box<TsType>,
        value: Box<TsType>,
    },
    /// String literal type: "foo"
    Literal(String),
    /// Named type reference: Item, Date
    Ref(String),
    /// Generic instantiation: Promise<Item>
    Generic { name: String, args: Vec<TsType> },
    /// Function type: (a: string, b?: number) => R
    Function {
        params: Vec<TsParam>,
        ret: Box<TsType>,
    },
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    String,
    Number,
    Boolean,
    Unknown,
}

/// Object or interface property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsProp {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
}

/// Function type parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsParam {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
}

/// Named import statement: import { A, B } from "./models";
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsImport {
    /// Imported names
    pub items: Vec<String>,
    /// Module path
    pub from: String,
}

/// Type definition kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefKind {
    /// export interface Foo { ... }
    Interface { properties: Vec<TsProp> },
    /// export type Foo = ...
    TypeAlias { ty: TsType },
    /// export enum Foo { A = "A" }
    Enum { members: Vec<(String, String)> },
}

/// Top-level declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsTypeDef {
    pub name: String,
    pub kind: TypeDefKind,
}

/// One output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsModule {
    pub imports: Vec<TsImport>,
    pub types: Vec<TsTypeDef>,
}
