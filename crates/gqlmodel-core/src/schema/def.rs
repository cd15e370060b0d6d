use super::{Directive, TypeRef, Value};
use std::fmt;

/// A named type in the schema.
#[derive(Debug, Clone)]
pub struct TypeDef {
    /// Name of the type, unique within a [`TypeGraph`](super::TypeGraph)
    pub name: String,

    pub description: Option<String>,

    /// Directives applied to the type itself
    pub directives: Vec<Directive>,

    pub kind: TypeKind,
}

#[derive(Debug, Clone)]
pub enum TypeKind {
    Scalar,
    Object(ObjectType),
    /// Interfaces share the shape of object types
    Interface(ObjectType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

#[derive(Debug, Clone, Default)]
pub struct ObjectType {
    /// Names of the interfaces the type implements
    pub interfaces: Vec<String>,

    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, Default)]
pub struct InputObjectType {
    pub fields: Vec<InputValue>,
}

#[derive(Debug, Clone, Default)]
pub struct EnumType {
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, Default)]
pub struct UnionType {
    pub members: Vec<String>,
}

/// A field of an object or interface type.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<InputValue>,
    pub ty: TypeRef,
    pub directives: Vec<Directive>,
}

/// An argument of a field, or a field of an input object type.
#[derive(Debug, Clone)]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
}

impl TypeDef {
    fn new(name: impl Into<String>, kind: TypeKind) -> TypeDef {
        TypeDef {
            name: name.into(),
            description: None,
            directives: vec![],
            kind,
        }
    }

    pub fn scalar(name: impl Into<String>) -> TypeDef {
        TypeDef::new(name, TypeKind::Scalar)
    }

    pub fn object(name: impl Into<String>, object: ObjectType) -> TypeDef {
        TypeDef::new(name, TypeKind::Object(object))
    }

    pub fn input_object(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = InputValue>,
    ) -> TypeDef {
        TypeDef::new(
            name,
            TypeKind::InputObject(InputObjectType {
                fields: fields.into_iter().collect(),
            }),
        )
    }

    pub fn enumeration<'a>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = &'a str>,
    ) -> TypeDef {
        TypeDef::new(
            name,
            TypeKind::Enum(EnumType {
                values: values.into_iter().map(EnumValue::new).collect(),
            }),
        )
    }

    pub fn with_description(mut self, description: impl Into<String>) -> TypeDef {
        self.description = Some(description.into());
        self
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match &self.kind {
            TypeKind::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut ObjectType> {
        match &mut self.kind {
            TypeKind::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        match &self.kind {
            TypeKind::InputObject(input) => Some(input),
            _ => None,
        }
    }

    pub fn as_input_object_mut(&mut self) -> Option<&mut InputObjectType> {
        match &mut self.kind {
            TypeKind::InputObject(input) => Some(input),
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, TypeKind::Object(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, TypeKind::Scalar)
    }

    pub fn is_input_object(&self) -> bool {
        matches!(self.kind, TypeKind::InputObject(_))
    }

    /// Human readable kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            TypeKind::Scalar => "scalar",
            TypeKind::Object(_) => "object",
            TypeKind::Interface(_) => "interface",
            TypeKind::Union(_) => "union",
            TypeKind::Enum(_) => "enum",
            TypeKind::InputObject(_) => "input object",
        }
    }
}

impl ObjectType {
    pub fn from_fields(fields: impl IntoIterator<Item = FieldDef>) -> ObjectType {
        ObjectType {
            interfaces: vec![],
            fields: fields.into_iter().collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDef> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    /// Replaces the field with the same name in place, or appends `field`.
    pub fn set_field(&mut self, field: FieldDef) {
        match self.field_mut(&field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    /// Appends `field` unless a field with the same name exists.
    pub fn insert_field_if_absent(&mut self, field: FieldDef) -> bool {
        if self.field(&field.name).is_some() {
            return false;
        }

        self.fields.push(field);
        true
    }
}

impl InputObjectType {
    pub fn field(&self, name: &str) -> Option<&InputValue> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Appends `field` unless a field with the same name exists.
    pub fn insert_field_if_absent(&mut self, field: InputValue) -> bool {
        if self.field(&field.name).is_some() {
            return false;
        }

        self.fields.push(field);
        true
    }
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> EnumValue {
        EnumValue {
            name: name.into(),
            description: None,
            directives: vec![],
        }
    }
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> FieldDef {
        FieldDef {
            name: name.into(),
            description: None,
            arguments: vec![],
            ty,
            directives: vec![],
        }
    }

    pub fn with_argument(mut self, argument: InputValue) -> FieldDef {
        self.arguments.push(argument);
        self
    }

    pub fn argument(&self, name: &str) -> Option<&InputValue> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|directive| directive.name == name)
    }
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> InputValue {
        InputValue {
            name: name.into(),
            description: None,
            ty,
            default_value: None,
            directives: vec![],
        }
    }
}

impl fmt::Display for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;

        if !self.arguments.is_empty() {
            f.write_str("(")?;
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(")")?;
        }

        write!(f, ": {}", self.ty)
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}
