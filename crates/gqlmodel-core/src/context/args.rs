use crate::schema::{Directive, Value};
use crate::{Error, Result};
use indexmap::IndexMap;

/// Arguments passed to `@model`.
///
/// The maps are parsed and kept on the model record but do not rename the
/// generated operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelDirectiveArgs {
    pub queries: Option<QueryMap>,
    pub mutations: Option<MutationMap>,
    pub subscriptions: Option<SubscriptionMap>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryMap {
    pub get: Option<String>,
    pub list: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationMap {
    pub create: Option<String>,
    pub update: Option<String>,
    pub delete: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionMap {
    pub on_create: Option<Vec<String>>,
    pub on_update: Option<Vec<String>>,
    pub on_delete: Option<Vec<String>>,
    pub level: Option<SubscriptionLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionLevel {
    Off,
    Public,
    On,
}

/// Arguments passed to `@connection`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionDirectiveArgs {
    /// Groups both sides of a bidirectional connection
    pub name: Option<String>,

    /// Accepted but not used
    pub fields: Option<Vec<String>>,
}

impl ModelDirectiveArgs {
    pub fn from_directive(directive: &Directive) -> Result<ModelDirectiveArgs> {
        let mut args = ModelDirectiveArgs::default();

        for (name, value) in &directive.arguments {
            match name.as_str() {
                "queries" => {
                    args.queries = object(value, "queries")?
                        .map(|fields| -> Result<QueryMap> {
                            Ok(QueryMap {
                                get: string(fields.get("get"), "queries.get")?,
                                list: string(fields.get("list"), "queries.list")?,
                            })
                        })
                        .transpose()?;
                }
                "mutations" => {
                    args.mutations = object(value, "mutations")?
                        .map(|fields| -> Result<MutationMap> {
                            Ok(MutationMap {
                                create: string(fields.get("create"), "mutations.create")?,
                                update: string(fields.get("update"), "mutations.update")?,
                                delete: string(fields.get("delete"), "mutations.delete")?,
                            })
                        })
                        .transpose()?;
                }
                "subscriptions" => {
                    args.subscriptions = object(value, "subscriptions")?
                        .map(|fields| -> Result<SubscriptionMap> {
                            Ok(SubscriptionMap {
                                on_create: strings(
                                    fields.get("onCreate"),
                                    "subscriptions.onCreate",
                                )?,
                                on_update: strings(
                                    fields.get("onUpdate"),
                                    "subscriptions.onUpdate",
                                )?,
                                on_delete: strings(
                                    fields.get("onDelete"),
                                    "subscriptions.onDelete",
                                )?,
                                level: level(fields.get("level"))?,
                            })
                        })
                        .transpose()?;
                }
                _ => return Err(unexpected_argument("model", name)),
            }
        }

        Ok(args)
    }
}

impl ConnectionDirectiveArgs {
    pub fn from_directive(directive: &Directive) -> Result<ConnectionDirectiveArgs> {
        let mut args = ConnectionDirectiveArgs::default();

        for (name, value) in &directive.arguments {
            match name.as_str() {
                "name" => args.name = string(Some(value), "name")?,
                "fields" => args.fields = strings(Some(value), "fields")?,
                _ => return Err(unexpected_argument("connection", name)),
            }
        }

        Ok(args)
    }
}

fn unexpected_argument(directive: &str, name: &str) -> Error {
    Error::directive_misuse(format!("@{directive} has no argument `{name}`"))
}

fn mismatch(path: &str, expected: &str, found: &Value) -> Error {
    Error::directive_misuse(format!(
        "argument `{path}` expects {expected}, found {found:?}"
    ))
}

fn object<'a>(value: &'a Value, path: &str) -> Result<Option<&'a IndexMap<String, Value>>> {
    match value {
        Value::Null => Ok(None),
        Value::Object(fields) => Ok(Some(fields)),
        other => Err(mismatch(path, "an input object", other)),
    }
}

fn string(value: Option<&Value>, path: &str) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(mismatch(path, "a string", other)),
    }
}

fn strings(value: Option<&Value>, path: &str) -> Result<Option<Vec<String>>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::List(values)) => values
            .iter()
            .map(|value| match value {
                Value::String(value) => Ok(value.clone()),
                other => Err(mismatch(path, "a list of strings", other)),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some),
        // A single value is coerced into a one element list
        Some(Value::String(value)) => Ok(Some(vec![value.clone()])),
        Some(other) => Err(mismatch(path, "a list of strings", other)),
    }
}

fn level(value: Option<&Value>) -> Result<Option<SubscriptionLevel>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Enum(level)) => match level.as_str() {
            "off" => Ok(Some(SubscriptionLevel::Off)),
            "public" => Ok(Some(SubscriptionLevel::Public)),
            "on" => Ok(Some(SubscriptionLevel::On)),
            _ => Err(Error::directive_misuse(format!(
                "`{level}` is not a subscription level"
            ))),
        },
        Some(other) => Err(mismatch(
            "subscriptions.level",
            "a subscription level",
            other,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_args_parse_nested_maps() {
        let mut queries = IndexMap::new();
        queries.insert("get".to_string(), Value::from("fetchBlog"));

        let mut subscriptions = IndexMap::new();
        subscriptions.insert("level".to_string(), Value::Enum("public".to_string()));
        subscriptions.insert("onCreate".to_string(), Value::from(vec!["blogAdded"]));

        let directive = Directive::new("model")
            .argument("queries", Value::Object(queries))
            .argument("subscriptions", Value::Object(subscriptions));

        let args = ModelDirectiveArgs::from_directive(&directive).unwrap();
        assert_eq!(args.queries.unwrap().get.as_deref(), Some("fetchBlog"));
        assert!(args.mutations.is_none());

        let subscriptions = args.subscriptions.unwrap();
        assert_eq!(subscriptions.level, Some(SubscriptionLevel::Public));
        assert_eq!(subscriptions.on_create, Some(vec!["blogAdded".to_string()]));
    }

    #[test]
    fn model_args_reject_wrong_shape() {
        let directive = Directive::new("model").argument("queries", "everything");
        let err = ModelDirectiveArgs::from_directive(&directive).unwrap_err();
        assert!(err.is_directive_misuse());
    }

    #[test]
    fn connection_args() {
        let directive = Directive::new("connection").argument("name", "BlogPosts");
        let args = ConnectionDirectiveArgs::from_directive(&directive).unwrap();
        assert_eq!(args.name.as_deref(), Some("BlogPosts"));
        assert_eq!(args.fields, None);

        let directive = Directive::new("connection").argument("keyName", "byBlog");
        assert!(ConnectionDirectiveArgs::from_directive(&directive)
            .unwrap_err()
            .is_directive_misuse());
    }
}
