mod def;
pub use def::{
    EnumType, EnumValue, FieldDef, InputObjectType, InputValue, ObjectType, TypeDef, TypeKind,
    UnionType,
};

mod directive;
pub use directive::{Directive, DirectiveDef, DirectiveLocation};

pub mod scalar;

mod ty;
pub use ty::TypeRef;

mod value;
pub use value::Value;

mod verify;
pub use verify::UnresolvedRef;

use crate::{Error, Result};
use indexmap::IndexMap;

/// The schema being transformed, keyed by type name.
///
/// Types reference each other by name only, so a type may be referenced before
/// it is defined. Whether every reference eventually resolves is checked by
/// [`TypeGraph::verify`]. Iteration follows insertion order, which is also the
/// order types are printed in.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    types: IndexMap<String, TypeDef>,
    directives: IndexMap<String, DirectiveDef>,
}

impl TypeGraph {
    pub fn new() -> TypeGraph {
        TypeGraph::default()
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TypeDef> {
        self.types.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns `true` if `name` is a built-in scalar or a defined type.
    pub fn resolves(&self, name: &str) -> bool {
        scalar::is_builtin(name) || self.contains(name)
    }

    /// Inserts `def` unless a type with the same name already exists.
    ///
    /// Returns `true` if the type was inserted.
    pub fn insert(&mut self, def: TypeDef) -> bool {
        if self.types.contains_key(&def.name) {
            return false;
        }

        tracing::trace!(name = %def.name, kind = def.kind_name(), "registered type");
        self.types.insert(def.name.clone(), def);
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<TypeDef> {
        self.types.shift_remove(name)
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDef> + '_ {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the object type named `name`.
    pub fn object(&self, name: &str) -> Result<&ObjectType> {
        let def = self
            .get(name)
            .ok_or_else(|| Error::type_resolution(format!("type `{name}` is not defined")))?;

        def.as_object().ok_or_else(|| {
            Error::type_resolution(format!(
                "expected `{name}` to be an object type, found {}",
                def.kind_name()
            ))
        })
    }

    pub fn object_mut(&mut self, name: &str) -> Result<&mut ObjectType> {
        let def = self
            .types
            .get_mut(name)
            .ok_or_else(|| Error::type_resolution(format!("type `{name}` is not defined")))?;
        let kind = def.kind_name();

        def.as_object_mut().ok_or_else(|| {
            Error::type_resolution(format!(
                "expected `{name}` to be an object type, found {kind}"
            ))
        })
    }

    pub fn input_object_mut(&mut self, name: &str) -> Result<&mut InputObjectType> {
        let def = self
            .types
            .get_mut(name)
            .ok_or_else(|| Error::type_resolution(format!("type `{name}` is not defined")))?;
        let kind = def.kind_name();

        def.as_input_object_mut().ok_or_else(|| {
            Error::type_resolution(format!(
                "expected `{name}` to be an input object type, found {kind}"
            ))
        })
    }

    /// Returns the object type named `name`, creating an empty one first if
    /// it does not exist. Used for the `Query`, `Mutation` and `Subscription`
    /// root types.
    pub fn object_or_insert(&mut self, name: &str) -> Result<&mut ObjectType> {
        if !self.contains(name) {
            self.insert(TypeDef::object(name, ObjectType::default()));
        }

        self.object_mut(name)
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDef> {
        self.directives.get(name)
    }

    /// Inserts a directive definition unless one with the same name exists.
    pub fn insert_directive(&mut self, def: DirectiveDef) -> bool {
        if self.directives.contains_key(&def.name) {
            return false;
        }

        self.directives.insert(def.name.clone(), def);
        true
    }

    pub fn directives(&self) -> impl Iterator<Item = &DirectiveDef> + '_ {
        self.directives.values()
    }

    pub fn clear_directives(&mut self) {
        self.directives.clear();
    }

    /// Keeps only the applied directives satisfying `keep`, on every type,
    /// field, argument, input field and enum value.
    pub fn retain_applied_directives(&mut self, keep: impl Fn(&Directive) -> bool) {
        for def in self.types.values_mut() {
            def.directives.retain(&keep);

            match &mut def.kind {
                TypeKind::Object(object) | TypeKind::Interface(object) => {
                    for field in &mut object.fields {
                        field.directives.retain(&keep);

                        for arg in &mut field.arguments {
                            arg.directives.retain(&keep);
                        }
                    }
                }
                TypeKind::InputObject(input) => {
                    for field in &mut input.fields {
                        field.directives.retain(&keep);
                    }
                }
                TypeKind::Enum(ty) => {
                    for value in &mut ty.values {
                        value.directives.retain(&keep);
                    }
                }
                TypeKind::Scalar | TypeKind::Union(_) => {}
            }
        }
    }
}
