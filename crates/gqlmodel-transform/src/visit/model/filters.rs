use super::inputs::is_data_field;
use super::Expand;
use crate::common::comparison_input;
use crate::Result;
use gqlmodel_core::names::{ID_FIELD, ID_INPUT};
use gqlmodel_core::schema::{InputValue, TypeDef, TypeRef};

impl Expand<'_> {
    pub(super) fn add_filter_input(&mut self) -> Result<()> {
        let name = self.names.filter_input.clone();
        let mut fields = self.comparison_fields()?;
        fields.push(InputValue::new(ID_FIELD, TypeRef::named(ID_INPUT)));

        self.add_combinable_input(&name, fields)
    }

    pub(super) fn add_condition_input(&mut self) -> Result<()> {
        let name = self.names.condition_input.clone();
        let fields = self.comparison_fields()?;

        self.add_combinable_input(&name, fields)
    }

    /// One comparison field per data field whose type has a comparison
    /// input.
    fn comparison_fields(&self) -> Result<Vec<InputValue>> {
        Ok(self
            .model()?
            .fields
            .iter()
            .filter(|field| is_data_field(field))
            .filter_map(|field| {
                comparison_input(&field.ty)
                    .map(|input| InputValue::new(&field.name, TypeRef::named(input)))
            })
            .collect())
    }

    /// Adds an input type whose `and`, `or` and `not` fields refer back to
    /// the type itself.
    ///
    /// The type is registered empty first, so the combinators are added to
    /// a type that already exists in the graph. An existing type with the
    /// same name is left untouched.
    fn add_combinable_input(&mut self, name: &str, fields: Vec<InputValue>) -> Result<()> {
        if !self.graph.insert(TypeDef::input_object(name, [])) {
            return Ok(());
        }

        let input = self.graph.input_object_mut(name)?;
        input.fields = fields;
        input
            .fields
            .push(InputValue::new("and", TypeRef::named(name).list()));
        input
            .fields
            .push(InputValue::new("or", TypeRef::named(name).list()));
        input.fields.push(InputValue::new("not", TypeRef::named(name)));

        Ok(())
    }
}
