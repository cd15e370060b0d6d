use super::{TypeGraph, TypeKind, TypeRef};
use crate::{Error, Result};
use std::fmt;

/// A type reference that names neither a built-in scalar nor a defined type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedRef {
    /// Where the reference appears, e.g. `Query.getBlog(id)`
    pub site: String,

    /// The name that failed to resolve
    pub name: String,
}

struct Verify<'a> {
    graph: &'a TypeGraph,
    unresolved: Vec<UnresolvedRef>,
}

impl TypeGraph {
    /// Lists every reference in the graph that does not resolve, in
    /// definition order.
    pub fn unresolved_references(&self) -> Vec<UnresolvedRef> {
        let mut verify = Verify {
            graph: self,
            unresolved: vec![],
        };
        verify.visit_graph();
        verify.unresolved
    }

    /// Checks that the graph is self-consistent: every type referenced by a
    /// field, argument, input field, union member or implemented interface
    /// is defined.
    ///
    /// Violations indicate a bug in the synthesis of derived types, so they
    /// are reported as internal invariant errors.
    pub fn verify(&self) -> Result<()> {
        match self.unresolved_references().into_iter().next() {
            Some(unresolved) => Err(Error::internal_invariant(format!(
                "{unresolved} after transformation"
            ))),
            None => Ok(()),
        }
    }
}

impl Verify<'_> {
    fn visit_graph(&mut self) {
        let graph = self.graph;

        for def in graph.types() {
            match &def.kind {
                TypeKind::Object(object) | TypeKind::Interface(object) => {
                    for interface in &object.interfaces {
                        self.check_name(|| format!("{} implements", def.name), interface);
                    }

                    for field in &object.fields {
                        self.check(|| format!("{}.{}", def.name, field.name), &field.ty);

                        for arg in &field.arguments {
                            self.check(
                                || format!("{}.{}({})", def.name, field.name, arg.name),
                                &arg.ty,
                            );
                        }
                    }
                }
                TypeKind::InputObject(input) => {
                    for field in &input.fields {
                        self.check(|| format!("{}.{}", def.name, field.name), &field.ty);
                    }
                }
                TypeKind::Union(union) => {
                    for member in &union.members {
                        self.check_name(|| format!("union {}", def.name), member);
                    }
                }
                TypeKind::Scalar | TypeKind::Enum(_) => {}
            }
        }

        for directive in graph.directives() {
            for arg in &directive.arguments {
                self.check(|| format!("@{}({})", directive.name, arg.name), &arg.ty);
            }
        }
    }

    fn check(&mut self, site: impl FnOnce() -> String, ty: &TypeRef) {
        self.check_name(site, ty.named_type());
    }

    fn check_name(&mut self, site: impl FnOnce() -> String, name: &str) {
        if !self.graph.resolves(name) {
            self.unresolved.push(UnresolvedRef {
                site: site(),
                name: name.to_string(),
            });
        }
    }
}

impl fmt::Display for UnresolvedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` references undefined type `{}`", self.site, self.name)
    }
}
