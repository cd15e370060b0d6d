use super::{InputValue, Value};

/// A directive applied to a type, field, argument or enum value.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<(String, Value)>,
}

/// A `directive @name(...) on ...` definition.
#[derive(Debug, Clone)]
pub struct DirectiveDef {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<InputValue>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
}

/// The type system locations a directive may be applied at.
///
/// Executable locations (queries, fragments, ...) are irrelevant to schema
/// transformation and collapse into a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveLocation {
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
    Executable,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Directive {
        Directive {
            name: name.into(),
            arguments: vec![],
        }
    }

    pub fn argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Directive {
        self.arguments.push((name.into(), value.into()));
        self
    }

    /// Returns the value passed for argument `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|(arg, _)| arg == name)
            .map(|(_, value)| value)
    }
}

impl DirectiveDef {
    pub fn allows(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use DirectiveLocation::*;

        f.write_str(match self {
            Schema => "SCHEMA",
            Scalar => "SCALAR",
            Object => "OBJECT",
            FieldDefinition => "FIELD_DEFINITION",
            ArgumentDefinition => "ARGUMENT_DEFINITION",
            Interface => "INTERFACE",
            Union => "UNION",
            Enum => "ENUM",
            EnumValue => "ENUM_VALUE",
            InputObject => "INPUT_OBJECT",
            InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Executable => "executable location",
        })
    }
}
