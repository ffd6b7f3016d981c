//! Code generation from API IR to the TypeScript declaration tree.
//!
//! This module transforms the resolved models and client members into
//! TypeScript declarations (interfaces, enums, aliases, function-typed
//! properties) and computes the client's import set.
//!
//! The generated tree can then be emitted to strings via the `Emit` trait.

use indexmap::IndexSet;

use super::api::{ApiDef, ClientDef, FunctionPropertyDef, ModelDef, ModelKind, PropertyDef, TypeDef};
use super::types::{TsImport, TsModule, TsParam, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind};
use super::utils::{enum_member_name, required_first};

/// Name of the async result wrapper around every member's return type.
const ASYNC_WRAPPER: &str = "Promise";

/// Generate the models module: one declaration per model, in IR order.
pub fn codegen_models(api: &ApiDef) -> TsModule {
    TsModule {
        imports: Vec::new(),
        types: api.models_def.iter().map(codegen_model).collect(),
    }
}

/// Generate the client module: the import from the models module followed by
/// the client interface.
pub fn codegen_client(client: &ClientDef, models_module: &str) -> TsModule {
    let items = collect_imports(&client.members);
    let imports = if items.is_empty() {
        Vec::new()
    } else {
        vec![TsImport {
            items,
            from: format!("./{models_module}"),
        }]
    };

    let properties = client.members.iter().map(codegen_member).collect();

    TsModule {
        imports,
        types: vec![TsTypeDef {
            name: client.name.clone(),
            kind: TypeDefKind::Interface { properties },
        }],
    }
}

/// Generate a top-level declaration for one model.
fn codegen_model(model: &ModelDef) -> TsTypeDef {
    let kind = match &model.kind {
        ModelKind::Enum(literals) => TypeDefKind::Enum {
            members: literals.iter().map(|l| (enum_member_name(l), l.clone())).collect(),
        },
        ModelKind::Object(props) => TypeDefKind::Interface {
            properties: required_first(props).into_iter().map(codegen_prop).collect(),
        },
        ModelKind::Alias(ty) => TypeDefKind::TypeAlias { ty: emit_type(ty) },
    };

    TsTypeDef {
        name: model.name.clone(),
        kind,
    }
}

fn codegen_prop(prop: &PropertyDef) -> TsProp {
    TsProp {
        name: prop.name.clone(),
        ty: emit_type(&prop.type_def),
        optional: prop.optional,
    }
}

/// Generate the function-typed property for one client member.
fn codegen_member(member: &FunctionPropertyDef) -> TsProp {
    let params = required_first(&member.args)
        .into_iter()
        .map(|arg| TsParam {
            name: arg.name.clone(),
            ty: emit_type(&arg.type_def),
            optional: arg.optional,
        })
        .collect();

    TsProp {
        name: member.name.clone(),
        ty: TsType::Function {
            params,
            ret: Box::new(TsType::Generic {
                name: ASYNC_WRAPPER.to_string(),
                args: vec![emit_type(&member.return_type_def)],
            }),
        },
        optional: false,
    }
}

/// Map a resolved type to its TypeScript type.
pub fn emit_type(ty: &TypeDef) -> TsType {
    match ty {
        TypeDef::Int => TsType::Primitive(TsPrimitive::Number),
        TypeDef::Str => TsType::Primitive(TsPrimitive::String),
        TypeDef::Bool => TsType::Primitive(TsPrimitive::Boolean),
        TypeDef::Date => TsType::Ref("Date".to_string()),
        TypeDef::Empty => TsType::Primitive(TsPrimitive::Unknown),
        TypeDef::Enum(literals) => {
            TsType::Union(literals.iter().cloned().map(TsType::Literal).collect())
        }
        TypeDef::Object(props) => TsType::Object(props.iter().map(codegen_prop).collect()),
        TypeDef::Map(value) => TsType::Record {
            key: Box::new(TsType::Primitive(TsPrimitive::String)),
            value: Box::new(emit_type(value)),
        },
        TypeDef::Named(name) => TsType::Ref(name.clone()),
        TypeDef::Array(inner) => TsType::Array(Box::new(emit_type(inner))),
    }
}

/// Distinct model names referenced by any member's arguments or return type,
/// in first-seen order.
fn collect_imports(members: &[FunctionPropertyDef]) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for member in members {
        for arg in &member.args {
            arg.type_def.for_each_named(&mut |name| {
                seen.insert(name);
            });
        }
        member.return_type_def.for_each_named(&mut |name| {
            seen.insert(name);
        });
    }

    seen.into_iter()
        .filter(|name| *name != ASYNC_WRAPPER)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::super::emit::Emit;
    use super::*;

    fn prop(name: &str, type_def: TypeDef, optional: bool) -> PropertyDef {
        PropertyDef {
            name: name.into(),
            type_def,
            optional,
        }
    }

    fn member(name: &str, args: Vec<PropertyDef>, ret: TypeDef) -> FunctionPropertyDef {
        FunctionPropertyDef {
            name: name.into(),
            args,
            return_type_def: ret,
        }
    }

    fn client(members: Vec<FunctionPropertyDef>) -> ClientDef {
        ClientDef {
            name: "ApiClient".into(),
            members,
        }
    }

    #[test]
    fn test_emit_type_primitives() {
        assert_eq!(emit_type(&TypeDef::Int).emit(), "number");
        assert_eq!(emit_type(&TypeDef::Str).emit(), "string");
        assert_eq!(emit_type(&TypeDef::Bool).emit(), "boolean");
        assert_eq!(emit_type(&TypeDef::Date).emit(), "Date");
        assert_eq!(emit_type(&TypeDef::Empty).emit(), "unknown");
    }

    #[test]
    fn test_emit_type_shapes() {
        let enum_ty = TypeDef::Enum(vec!["OPEN".into(), "CLOSED".into()]);
        assert_eq!(emit_type(&enum_ty).emit(), "\"OPEN\" | \"CLOSED\"");
        assert_eq!(emit_type(&enum_ty.into_array()).emit(), "(\"OPEN\" | \"CLOSED\")[]");

        let map = TypeDef::Map(Box::new(TypeDef::Named("Pet".into()).into_array()));
        assert_eq!(emit_type(&map).emit(), "Record<string, Pet[]>");

        let object = TypeDef::Object(vec![prop("a", TypeDef::Int, true), prop("b", TypeDef::Str, false)]);
        assert_eq!(emit_type(&object).emit(), "{ a?: number; b: string }");
    }

    #[test]
    fn test_enum_model_has_one_member_per_literal() {
        let def = codegen_model(&ModelDef {
            name: "Status".into(),
            kind: ModelKind::Enum(vec!["OPEN".into(), "CLOSED".into()]),
        });
        assert_eq!(
            def.kind,
            TypeDefKind::Enum {
                members: vec![
                    ("OPEN".into(), "OPEN".into()),
                    ("CLOSED".into(), "CLOSED".into()),
                ],
            }
        );
    }

    #[test]
    fn test_numeric_enum_members_get_identifier_names() {
        let def = codegen_model(&ModelDef {
            name: "Priority".into(),
            kind: ModelKind::Enum(vec!["1".into(), "2".into(), "HIGH".into()]),
        });
        assert_eq!(
            def.emit(),
            "export enum Priority {\n  _1 = \"1\",\n  _2 = \"2\",\n  HIGH = \"HIGH\",\n}\n"
        );
    }

    #[test]
    fn test_object_model_fields_are_required_first() {
        let def = codegen_model(&ModelDef {
            name: "Ticket".into(),
            kind: ModelKind::Object(vec![
                prop("note", TypeDef::Str, true),
                prop("id", TypeDef::Str, false),
                prop("tags", TypeDef::Str.into_array(), true),
                prop("owner", TypeDef::Named("User".into()), false),
            ]),
        });
        assert_eq!(
            def.emit(),
            "export interface Ticket {\n  id: string;\n  owner: User;\n  note?: string;\n  tags?: string[];\n}\n"
        );
    }

    #[test]
    fn test_alias_model() {
        let def = codegen_model(&ModelDef {
            name: "Counters".into(),
            kind: ModelKind::Alias(TypeDef::Map(Box::new(TypeDef::Int))),
        });
        assert_eq!(def.emit(), "export type Counters = Record<string, number>;\n");
    }

    #[test]
    fn test_member_arguments_are_stably_partitioned() {
        let m = member(
            "search",
            vec![
                prop("a", TypeDef::Str, true),
                prop("b", TypeDef::Int, false),
                prop("c", TypeDef::Bool, true),
                prop("d", TypeDef::Str, false),
            ],
            TypeDef::Empty,
        );
        assert_eq!(
            codegen_member(&m).emit(),
            "search: (b: number, d: string, a?: string, c?: boolean) => Promise<unknown>"
        );
    }

    #[test]
    fn test_imports_cover_nested_references_in_first_seen_order() {
        let members = vec![
            member(
                "update",
                vec![
                    prop("body", TypeDef::Named("Patch".into()), false),
                    prop(
                        "extra",
                        TypeDef::Object(vec![prop("owner", TypeDef::Named("User".into()), true)]),
                        true,
                    ),
                ],
                TypeDef::Named("Ticket".into()),
            ),
            member(
                "list",
                vec![prop("state", TypeDef::Enum(vec!["A".into()]), true)],
                TypeDef::Map(Box::new(TypeDef::Named("Ticket".into()).into_array())),
            ),
            member("ping", Vec::new(), TypeDef::Date),
        ];
        assert_eq!(collect_imports(&members), vec!["Patch", "User", "Ticket"]);
    }

    #[test]
    fn test_imports_exclude_async_wrapper_name() {
        let members = vec![member("odd", Vec::new(), TypeDef::Named("Promise".into()))];
        assert!(collect_imports(&members).is_empty());
    }

    #[test]
    fn test_client_without_references_has_no_import() {
        let module = codegen_client(
            &client(vec![member("health", Vec::new(), TypeDef::Str)]),
            "models",
        );
        assert_eq!(
            module.emit(),
            "export interface ApiClient {\n  health: () => Promise<string>;\n}\n"
        );
    }

    #[test]
    fn test_get_ticket_client() {
        let module = codegen_client(
            &client(vec![member(
                "getTicket",
                vec![prop("id", TypeDef::Str, false)],
                TypeDef::Named("TicketDTO".into()),
            )]),
            "models",
        );
        assert_eq!(
            module.emit(),
            "import { TicketDTO } from \"./models\";\n\nexport interface ApiClient {\n  getTicket: (id: string) => Promise<TicketDTO>;\n}\n"
        );
    }

    #[test]
    fn test_client_import_uses_models_base_name() {
        let module = codegen_client(
            &client(vec![member("me", Vec::new(), TypeDef::Named("User".into()))]),
            "api-models",
        );
        assert_eq!(module.imports[0].from, "./api-models");
    }

    #[test]
    fn test_quoted_member_names() {
        let m = member("get-thing", Vec::new(), TypeDef::Empty);
        assert_eq!(codegen_member(&m).emit(), "\"get-thing\": () => Promise<unknown>");
    }
}
