use super::Expand;
use crate::Result;
use gqlmodel_core::schema::{scalar, FieldDef, InputValue, TypeRef};
use gqlmodel_core::TransformContext;

impl Expand<'_> {
    /// `get`, `list` and `sync` queries.
    pub(super) fn add_query_fields(&mut self) -> Result<()> {
        let names = self.names;
        let query = self.graph.object_or_insert(&names.query.type_name)?;

        query.set_field(
            FieldDef::new(&names.query.get, TypeRef::named(&names.main)).with_argument(
                InputValue::new("id", TypeRef::named(scalar::ID).non_null()),
            ),
        );
        query.set_field(
            FieldDef::new(&names.query.list, TypeRef::named(&names.connection))
                .with_argument(filter_argument(&names.filter_input))
                .with_argument(InputValue::new("limit", TypeRef::named(scalar::INT)))
                .with_argument(InputValue::new("nextToken", TypeRef::named(scalar::STRING))),
        );
        query.set_field(
            FieldDef::new(&names.query.sync, TypeRef::named(&names.connection))
                .with_argument(filter_argument(&names.filter_input))
                .with_argument(InputValue::new("limit", TypeRef::named(scalar::INT)))
                .with_argument(InputValue::new("nextToken", TypeRef::named(scalar::STRING)))
                .with_argument(InputValue::new(
                    "lastSync",
                    TypeRef::named(scalar::AWS_TIMESTAMP),
                )),
        );

        Ok(())
    }

    /// `create`, `update` and `delete` mutations, each taking the matching
    /// input and an optional condition.
    pub(super) fn add_mutation_fields(&mut self) -> Result<()> {
        let names = self.names;
        let mutation = self.graph.object_or_insert(&names.mutation.type_name)?;

        for (field, input) in [
            (&names.mutation.create, &names.create_input),
            (&names.mutation.update, &names.update_input),
            (&names.mutation.delete, &names.delete_input),
        ] {
            mutation.set_field(
                FieldDef::new(field, TypeRef::named(&names.main))
                    .with_argument(InputValue::new("input", TypeRef::named(input).non_null()))
                    .with_argument(InputValue::new(
                        "condition",
                        TypeRef::named(&names.condition_input),
                    )),
            );
        }

        Ok(())
    }

    /// `onCreate`, `onUpdate` and `onDelete` subscriptions, each recorded
    /// against the mutation that triggers it.
    pub(super) fn add_subscription_fields(&mut self, cx: &mut TransformContext) -> Result<()> {
        let names = self.names;
        let subscription = self
            .graph
            .object_or_insert(&names.subscription.type_name)?;

        for (field, mutation) in [
            (&names.subscription.on_create, &names.mutation.create),
            (&names.subscription.on_update, &names.mutation.update),
            (&names.subscription.on_delete, &names.mutation.delete),
        ] {
            subscription.set_field(FieldDef::new(field, TypeRef::named(&names.main)));
            cx.record_subscription(field, mutation);
        }

        Ok(())
    }
}

fn filter_argument(filter_input: &str) -> InputValue {
    InputValue::new("filter", TypeRef::named(filter_input))
}
