use super::Expand;
use crate::input::{input_field_type, queue_missing_types};
use crate::Result;
use gqlmodel_core::context::ModelContext;
use gqlmodel_core::names::{ID_FIELD, VERSION_FIELD};
use gqlmodel_core::schema::{scalar, FieldDef, InputValue, TypeDef, TypeRef};

impl Expand<'_> {
    pub(super) fn add_create_input(&mut self, cx: &mut ModelContext) -> Result<()> {
        let mut fields = self.mapped_fields(cx, |ty| ty)?;
        fields.push(InputValue::new(ID_FIELD, TypeRef::named(scalar::ID)));
        fields.push(InputValue::new(VERSION_FIELD, TypeRef::named(scalar::INT)));

        self.graph
            .insert(TypeDef::input_object(&self.names.create_input, fields));
        Ok(())
    }

    pub(super) fn add_update_input(&mut self, cx: &mut ModelContext) -> Result<()> {
        let mut fields = self.mapped_fields(cx, TypeRef::into_nullable)?;
        fields.push(InputValue::new(
            ID_FIELD,
            TypeRef::named(scalar::ID).non_null(),
        ));
        fields.push(InputValue::new(VERSION_FIELD, TypeRef::named(scalar::INT)));

        self.graph
            .insert(TypeDef::input_object(&self.names.update_input, fields));
        Ok(())
    }

    pub(super) fn add_delete_input(&mut self) {
        self.graph.insert(TypeDef::input_object(
            &self.names.delete_input,
            [
                InputValue::new(ID_FIELD, TypeRef::named(scalar::ID)),
                InputValue::new(VERSION_FIELD, TypeRef::named(scalar::INT)),
            ],
        ));
    }

    /// Maps every data field of the model onto an input field, queueing the
    /// object types the mapped fields need mirrors for.
    fn mapped_fields(
        &self,
        cx: &mut ModelContext,
        transform: impl Fn(TypeRef) -> TypeRef,
    ) -> Result<Vec<InputValue>> {
        let graph = &*self.graph;
        let mut fields = vec![];

        for field in self.model()?.fields.iter().filter(|field| is_data_field(field)) {
            let Some(ty) = input_field_type(graph, field) else {
                continue;
            };

            queue_missing_types(graph, field, cx);
            fields.push(InputValue::new(&field.name, transform(ty)));
        }

        Ok(fields)
    }
}

/// Fields written by callers: everything except the identity field and
/// the `_`-prefixed bookkeeping fields.
pub(super) fn is_data_field(field: &FieldDef) -> bool {
    field.name != ID_FIELD && !field.name.starts_with('_')
}
