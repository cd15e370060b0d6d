use crate::definitions::AWS_SUBSCRIBE_DIRECTIVE;
use gqlmodel_core::schema::{Directive, TypeGraph};
use gqlmodel_core::TransformContext;

const SUBSCRIPTION: &str = "Subscription";

/// Annotates each generated subscription field with the mutations that
/// trigger it: `@aws_subscribe(mutations: ["createBlog"])`.
pub(crate) fn annotate_subscriptions(graph: &mut TypeGraph, cx: &TransformContext) {
    let Some(subscription) = graph
        .get_mut(SUBSCRIPTION)
        .and_then(|def| def.as_object_mut())
    else {
        return;
    };

    for field in &mut subscription.fields {
        if let Some(mutations) = cx.subscription_map.get(&field.name) {
            field.directives.push(
                Directive::new(AWS_SUBSCRIBE_DIRECTIVE).argument("mutations", mutations.clone()),
            );
        }
    }
}
