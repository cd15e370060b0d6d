//! Conversion between SDL text and the [`TypeGraph`].
//!
//! Parsing and printing are delegated to `graphql-parser`. The parsed
//! document is converted into owned graph types once; printing rebuilds a
//! document from the graph and uses its `Display` implementation.

use crate::{Error, Result};
use gqlmodel_core::schema::{
    Directive, DirectiveDef, DirectiveLocation, EnumType, EnumValue, FieldDef, InputObjectType,
    InputValue, ObjectType, TypeDef, TypeGraph, TypeKind, TypeRef, UnionType, Value,
};
use graphql_parser::query::Number;
use graphql_parser::schema as ast;
use graphql_parser::Pos;

type Document = ast::Document<'static, String>;

/// Parses `source` into a new graph.
pub fn parse(source: &str) -> Result<TypeGraph> {
    let mut graph = TypeGraph::new();
    load(&mut graph, source)?;
    Ok(graph)
}

/// Parses `source` and adds its definitions to `graph`.
///
/// Fails if a type or directive is defined twice, counting definitions
/// already in the graph.
pub fn load(graph: &mut TypeGraph, source: &str) -> Result<()> {
    let document = graphql_parser::parse_schema::<String>(source)
        .map_err(|err| Error::invalid_schema(err.to_string()))?;

    for definition in document.definitions {
        match definition {
            ast::Definition::TypeDefinition(def) => {
                let def = type_def(def)?;
                let name = def.name.clone();

                if !graph.insert(def) {
                    return Err(Error::invalid_schema(format!(
                        "type `{name}` is defined more than once"
                    )));
                }
            }
            ast::Definition::DirectiveDefinition(def) => {
                let def = directive_def(def)?;
                let name = def.name.clone();

                if !graph.insert_directive(def) {
                    return Err(Error::invalid_schema(format!(
                        "directive `@{name}` is defined more than once"
                    )));
                }
            }
            ast::Definition::SchemaDefinition(_) => {
                return Err(Error::invalid_schema(
                    "schema definitions are not supported",
                ));
            }
            ast::Definition::TypeExtension(_) => {
                return Err(Error::invalid_schema("type extensions are not supported"));
            }
        }
    }

    Ok(())
}

/// Prints every type in the graph, in graph order.
///
/// Built-in scalars and directive definitions are never printed.
pub fn print(graph: &TypeGraph) -> String {
    let document: Document = ast::Document {
        definitions: graph
            .types()
            .map(|def| ast::Definition::TypeDefinition(print_type(def)))
            .collect(),
    };

    document.to_string()
}

fn type_def(def: ast::TypeDefinition<'_, String>) -> Result<TypeDef> {
    Ok(match def {
        ast::TypeDefinition::Scalar(ty) => TypeDef {
            name: ty.name,
            description: ty.description,
            directives: directives(ty.directives)?,
            kind: TypeKind::Scalar,
        },
        ast::TypeDefinition::Object(ty) => TypeDef {
            name: ty.name,
            description: ty.description,
            directives: directives(ty.directives)?,
            kind: TypeKind::Object(ObjectType {
                interfaces: ty.implements_interfaces,
                fields: fields(ty.fields)?,
            }),
        },
        ast::TypeDefinition::Interface(ty) => TypeDef {
            name: ty.name,
            description: ty.description,
            directives: directives(ty.directives)?,
            kind: TypeKind::Interface(ObjectType {
                interfaces: ty.implements_interfaces,
                fields: fields(ty.fields)?,
            }),
        },
        ast::TypeDefinition::Union(ty) => TypeDef {
            name: ty.name,
            description: ty.description,
            directives: directives(ty.directives)?,
            kind: TypeKind::Union(UnionType { members: ty.types }),
        },
        ast::TypeDefinition::Enum(ty) => TypeDef {
            name: ty.name,
            description: ty.description,
            directives: directives(ty.directives)?,
            kind: TypeKind::Enum(EnumType {
                values: ty
                    .values
                    .into_iter()
                    .map(|value| {
                        Ok(EnumValue {
                            name: value.name,
                            description: value.description,
                            directives: directives(value.directives)?,
                        })
                    })
                    .collect::<Result<_>>()?,
            }),
        },
        ast::TypeDefinition::InputObject(ty) => TypeDef {
            name: ty.name,
            description: ty.description,
            directives: directives(ty.directives)?,
            kind: TypeKind::InputObject(InputObjectType {
                fields: input_values(ty.fields)?,
            }),
        },
    })
}

fn fields(fields: Vec<ast::Field<'_, String>>) -> Result<Vec<FieldDef>> {
    fields
        .into_iter()
        .map(|field| {
            Ok(FieldDef {
                name: field.name,
                description: field.description,
                arguments: input_values(field.arguments)?,
                ty: type_ref(field.field_type),
                directives: directives(field.directives)?,
            })
        })
        .collect()
}

fn input_values(values: Vec<ast::InputValue<'_, String>>) -> Result<Vec<InputValue>> {
    values
        .into_iter()
        .map(|value| {
            Ok(InputValue {
                name: value.name,
                description: value.description,
                ty: type_ref(value.value_type),
                default_value: value.default_value.map(self::value).transpose()?,
                directives: directives(value.directives)?,
            })
        })
        .collect()
}

fn type_ref(ty: ast::Type<'_, String>) -> TypeRef {
    match ty {
        ast::Type::NamedType(name) => TypeRef::Named(name),
        ast::Type::ListType(inner) => TypeRef::List(Box::new(type_ref(*inner))),
        ast::Type::NonNullType(inner) => TypeRef::NonNull(Box::new(type_ref(*inner))),
    }
}

fn directives(directives: Vec<ast::Directive<'_, String>>) -> Result<Vec<Directive>> {
    directives
        .into_iter()
        .map(|directive| {
            Ok(Directive {
                name: directive.name,
                arguments: directive
                    .arguments
                    .into_iter()
                    .map(|(name, value)| Ok((name, self::value(value)?)))
                    .collect::<Result<_>>()?,
            })
        })
        .collect()
}

fn directive_def(def: ast::DirectiveDefinition<'_, String>) -> Result<DirectiveDef> {
    Ok(DirectiveDef {
        name: def.name,
        description: def.description,
        arguments: input_values(def.arguments)?,
        repeatable: def.repeatable,
        locations: def.locations.iter().map(location).collect(),
    })
}

fn location(location: &ast::DirectiveLocation) -> DirectiveLocation {
    use ast::DirectiveLocation as Ast;

    match location {
        Ast::Schema => DirectiveLocation::Schema,
        Ast::Scalar => DirectiveLocation::Scalar,
        Ast::Object => DirectiveLocation::Object,
        Ast::FieldDefinition => DirectiveLocation::FieldDefinition,
        Ast::ArgumentDefinition => DirectiveLocation::ArgumentDefinition,
        Ast::Interface => DirectiveLocation::Interface,
        Ast::Union => DirectiveLocation::Union,
        Ast::Enum => DirectiveLocation::Enum,
        Ast::EnumValue => DirectiveLocation::EnumValue,
        Ast::InputObject => DirectiveLocation::InputObject,
        Ast::InputFieldDefinition => DirectiveLocation::InputFieldDefinition,
        _ => DirectiveLocation::Executable,
    }
}

fn value(value: ast::Value<'_, String>) -> Result<Value> {
    Ok(match value {
        ast::Value::Variable(name) => {
            return Err(Error::invalid_schema(format!(
                "variable `${name}` used in a constant position"
            )))
        }
        ast::Value::Int(number) => Value::Int(
            number
                .as_i64()
                .ok_or_else(|| Error::invalid_schema("integer value out of range"))?,
        ),
        ast::Value::Float(value) => Value::Float(value),
        ast::Value::String(value) => Value::String(value),
        ast::Value::Boolean(value) => Value::Boolean(value),
        ast::Value::Null => Value::Null,
        ast::Value::Enum(value) => Value::Enum(value),
        ast::Value::List(values) => Value::List(
            values
                .into_iter()
                .map(self::value)
                .collect::<Result<_>>()?,
        ),
        ast::Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(name, value)| Ok((name, self::value(value)?)))
                .collect::<Result<_>>()?,
        ),
    })
}

fn print_type(def: &TypeDef) -> ast::TypeDefinition<'static, String> {
    let name = def.name.clone();
    let description = def.description.clone();
    let directives = print_directives(&def.directives);

    match &def.kind {
        TypeKind::Scalar => {
            let mut ty = ast::ScalarType::new(name);
            ty.description = description;
            ty.directives = directives;
            ast::TypeDefinition::Scalar(ty)
        }
        TypeKind::Object(object) => {
            let mut ty = ast::ObjectType::new(name);
            ty.description = description;
            ty.directives = directives;
            ty.implements_interfaces = object.interfaces.clone();
            ty.fields = object.fields.iter().map(print_field).collect();
            ast::TypeDefinition::Object(ty)
        }
        TypeKind::Interface(object) => {
            let mut ty = ast::InterfaceType::new(name);
            ty.description = description;
            ty.directives = directives;
            ty.implements_interfaces = object.interfaces.clone();
            ty.fields = object.fields.iter().map(print_field).collect();
            ast::TypeDefinition::Interface(ty)
        }
        TypeKind::Union(union) => {
            let mut ty = ast::UnionType::new(name);
            ty.description = description;
            ty.directives = directives;
            ty.types = union.members.clone();
            ast::TypeDefinition::Union(ty)
        }
        TypeKind::Enum(enumeration) => {
            let mut ty = ast::EnumType::new(name);
            ty.description = description;
            ty.directives = directives;
            ty.values = enumeration
                .values
                .iter()
                .map(|value| ast::EnumValue {
                    position: Pos::default(),
                    description: value.description.clone(),
                    name: value.name.clone(),
                    directives: print_directives(&value.directives),
                })
                .collect();
            ast::TypeDefinition::Enum(ty)
        }
        TypeKind::InputObject(input) => {
            let mut ty = ast::InputObjectType::new(name);
            ty.description = description;
            ty.directives = directives;
            ty.fields = input.fields.iter().map(print_input_value).collect();
            ast::TypeDefinition::InputObject(ty)
        }
    }
}

fn print_field(field: &FieldDef) -> ast::Field<'static, String> {
    ast::Field {
        position: Pos::default(),
        description: field.description.clone(),
        name: field.name.clone(),
        arguments: field.arguments.iter().map(print_input_value).collect(),
        field_type: print_type_ref(&field.ty),
        directives: print_directives(&field.directives),
    }
}

fn print_input_value(value: &InputValue) -> ast::InputValue<'static, String> {
    ast::InputValue {
        position: Pos::default(),
        description: value.description.clone(),
        name: value.name.clone(),
        value_type: print_type_ref(&value.ty),
        default_value: value.default_value.as_ref().map(print_value),
        directives: print_directives(&value.directives),
    }
}

fn print_type_ref(ty: &TypeRef) -> ast::Type<'static, String> {
    match ty {
        TypeRef::Named(name) => ast::Type::NamedType(name.clone()),
        TypeRef::List(inner) => ast::Type::ListType(Box::new(print_type_ref(inner))),
        TypeRef::NonNull(inner) => ast::Type::NonNullType(Box::new(print_type_ref(inner))),
    }
}

fn print_directives(directives: &[Directive]) -> Vec<ast::Directive<'static, String>> {
    directives
        .iter()
        .map(|directive| ast::Directive {
            position: Pos::default(),
            name: directive.name.clone(),
            arguments: directive
                .arguments
                .iter()
                .map(|(name, value)| (name.clone(), print_value(value)))
                .collect(),
        })
        .collect()
}

fn print_value(value: &Value) -> ast::Value<'static, String> {
    match value {
        Value::Null => ast::Value::Null,
        Value::Int(value) => match i32::try_from(*value) {
            Ok(value) => ast::Value::Int(Number::from(value)),
            // `Number` is only constructible from `i32`
            Err(_) => ast::Value::Float(*value as f64),
        },
        Value::Float(value) => ast::Value::Float(*value),
        Value::String(value) => ast::Value::String(value.clone()),
        Value::Boolean(value) => ast::Value::Boolean(*value),
        Value::Enum(value) => ast::Value::Enum(value.clone()),
        Value::List(values) => ast::Value::List(values.iter().map(print_value).collect()),
        Value::Object(fields) => ast::Value::Object(
            fields
                .iter()
                .map(|(name, value)| (name.clone(), print_value(value)))
                .collect(),
        ),
    }
}
