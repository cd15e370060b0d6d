use crate::definitions::{DEPRECATED_DIRECTIVE, SPECIFIED_BY_DIRECTIVE};
use crate::{Error, Result};
use gqlmodel_core::schema::{Directive, DirectiveLocation, TypeGraph, TypeKind};

/// Locations of the directives every schema may use without defining them.
const BUILTIN_DIRECTIVES: &[(&str, &[DirectiveLocation])] = &[
    (
        DEPRECATED_DIRECTIVE,
        &[
            DirectiveLocation::FieldDefinition,
            DirectiveLocation::ArgumentDefinition,
            DirectiveLocation::InputFieldDefinition,
            DirectiveLocation::EnumValue,
        ],
    ),
    (SPECIFIED_BY_DIRECTIVE, &[DirectiveLocation::Scalar]),
];

struct Validate<'a> {
    graph: &'a TypeGraph,
}

/// Checks that `graph` is a usable schema before any directive is visited.
///
/// Every type reference must resolve, and every applied directive must be
/// defined, applied at a location its definition lists, and applied at most
/// once per location unless declared `repeatable`.
pub fn validate(graph: &TypeGraph) -> Result<()> {
    if let Some(unresolved) = graph.unresolved_references().into_iter().next() {
        return Err(Error::type_resolution(unresolved.to_string()));
    }

    Validate { graph }.validate_directives()
}

impl Validate<'_> {
    fn validate_directives(&self) -> Result<()> {
        for def in self.graph.types() {
            let location = match &def.kind {
                TypeKind::Scalar => DirectiveLocation::Scalar,
                TypeKind::Object(_) => DirectiveLocation::Object,
                TypeKind::Interface(_) => DirectiveLocation::Interface,
                TypeKind::Union(_) => DirectiveLocation::Union,
                TypeKind::Enum(_) => DirectiveLocation::Enum,
                TypeKind::InputObject(_) => DirectiveLocation::InputObject,
            };
            self.check(&def.name, &def.directives, location)?;

            match &def.kind {
                TypeKind::Object(object) | TypeKind::Interface(object) => {
                    for field in &object.fields {
                        let site = format!("{}.{}", def.name, field.name);
                        self.check(&site, &field.directives, DirectiveLocation::FieldDefinition)?;

                        for arg in &field.arguments {
                            self.check(
                                &format!("{site}({})", arg.name),
                                &arg.directives,
                                DirectiveLocation::ArgumentDefinition,
                            )?;
                        }
                    }
                }
                TypeKind::InputObject(input) => {
                    for field in &input.fields {
                        self.check(
                            &format!("{}.{}", def.name, field.name),
                            &field.directives,
                            DirectiveLocation::InputFieldDefinition,
                        )?;
                    }
                }
                TypeKind::Enum(ty) => {
                    for value in &ty.values {
                        self.check(
                            &format!("{}.{}", def.name, value.name),
                            &value.directives,
                            DirectiveLocation::EnumValue,
                        )?;
                    }
                }
                TypeKind::Scalar | TypeKind::Union(_) => {}
            }
        }

        Ok(())
    }

    fn check(
        &self,
        site: &str,
        directives: &[Directive],
        location: DirectiveLocation,
    ) -> Result<()> {
        for (i, directive) in directives.iter().enumerate() {
            let (locations, repeatable) = self.lookup(&directive.name).ok_or_else(|| {
                Error::directive_misuse(format!(
                    "unknown directive `@{}` on `{site}`",
                    directive.name
                ))
            })?;

            if !locations.contains(&location) {
                return Err(Error::directive_misuse(format!(
                    "`@{}` may not be applied to `{site}` ({location})",
                    directive.name
                )));
            }

            if !repeatable
                && directives[..i]
                    .iter()
                    .any(|earlier| earlier.name == directive.name)
            {
                return Err(Error::directive_misuse(format!(
                    "`@{}` is applied to `{site}` more than once",
                    directive.name
                )));
            }
        }

        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<(&[DirectiveLocation], bool)> {
        if let Some(def) = self.graph.directive(name) {
            return Some((def.locations.as_slice(), def.repeatable));
        }

        BUILTIN_DIRECTIVES
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(_, locations)| (*locations, false))
    }
}
