use crate::{common, write::encode};

use aws_sdk_dynamodb::types;
use serde_json::{Map, Value};
use std::collections;

/// Update expression with its placeholder maps, ready for an update item request.
///
/// `expression_attribute_values` is `None` when nothing is SET, since the
/// store rejects an empty value map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateExpressionParams {
    /// The update expression, e.g. `SET #name = :name REMOVE #age`.
    pub update_expression: String,
    /// Name placeholder (`#key`) to attribute name.
    pub expression_attribute_names: collections::HashMap<String, String>,
    /// Value placeholder (`:key`) to encoded value, for SET entries only.
    pub expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
}

/// Build an update expression from a partial object.
///
/// Every top-level key with a `null` value is removed, every other key is set
/// to its whole encoded value. Nested maps and lists are replaced, not merged.
/// Keys are visited in the map's iteration order.
///
/// ```rust
/// use dynamodb_convert::write::patch;
/// use serde_json::json;
///
/// let changes = json!({"name": "Bob", "age": null}).as_object().cloned().unwrap_or_default();
/// let params = patch::build_patch(changes);
/// assert_eq!(params.update_expression, "SET #name = :name REMOVE #age");
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "dynamodb_convert.build_patch", skip_all)
)]
pub fn build_patch(changes: Map<String, Value>) -> UpdateExpressionParams {
    let mut sets = Vec::new();
    let mut removes = Vec::new();
    for (key, value) in changes {
        let (name_placeholder, value_placeholder) = common::get_placeholders(&key);
        let names = collections::HashMap::from([(name_placeholder.clone(), key)]);
        if value.is_null() {
            let clause = common::PatchClause {
                expression: name_placeholder,
                names,
                ..Default::default()
            };
            removes.push(clause);
        } else {
            let expression = format!("{name_placeholder} = {value_placeholder}");
            let values =
                collections::HashMap::from([(value_placeholder, encode::to_attribute(value))]);
            let clause = common::PatchClause {
                expression,
                names,
                values,
            };
            sets.push(clause);
        }
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        sets = sets.len(),
        removes = removes.len(),
        "built update expression"
    );
    let has_sets = !sets.is_empty();
    let set = common::PatchClause::join(", ", sets).with_keyword("SET");
    let remove = common::PatchClause::join(", ", removes).with_keyword("REMOVE");
    let patch = common::PatchClause::join(" ", vec![set, remove]);
    UpdateExpressionParams {
        update_expression: patch.expression,
        expression_attribute_names: patch.names,
        expression_attribute_values: has_sets.then_some(patch.values),
    }
}

/// apply update expression params to an update item builder
///
/// Works with both the client's fluent builder and `UpdateItemInput::builder()`.
/// An empty names map is left unset, since the store rejects it.
#[macro_export]
macro_rules! apply_patch {
    ($builder:expr, $params:expr) => {{
        let params: $crate::write::patch::UpdateExpressionParams = $params;
        let names = params.expression_attribute_names;
        $builder
            .update_expression(params.update_expression)
            .set_expression_attribute_names((!names.is_empty()).then_some(names))
            .set_expression_attribute_values(params.expression_attribute_values)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::operation::update_item::UpdateItemInput;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::set_and_remove(
        json!(
            {
                "name": "Bob",
                "age": null
            }
        ),
        UpdateExpressionParams {
            update_expression: "SET #name = :name REMOVE #age".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#name".to_string(), "name".to_string()),
                    ("#age".to_string(), "age".to_string()),
                ]
            ),
            expression_attribute_values: Some(
                collections::HashMap::from(
                    [(
                        ":name".to_string(),
                        types::AttributeValue::S(
                            "Bob".to_string()
                        ),
                    )]
                )
            ),
        }
    )]
    #[case::remove_only(
        json!(
            {
                "age": null
            }
        ),
        UpdateExpressionParams {
            update_expression: "REMOVE #age".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#age".to_string(), "age".to_string()),
                ]
            ),
            expression_attribute_values: None,
        }
    )]
    #[case::set_only(
        json!(
            {
                "a": 1,
                "b": true
            }
        ),
        UpdateExpressionParams {
            update_expression: "SET #a = :a, #b = :b".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#a".to_string(), "a".to_string()),
                    ("#b".to_string(), "b".to_string()),
                ]
            ),
            expression_attribute_values: Some(
                collections::HashMap::from(
                    [
                        (
                            ":a".to_string(),
                            types::AttributeValue::N(
                                "1".to_string()
                            ),
                        ),
                        (
                            ":b".to_string(),
                            types::AttributeValue::Bool(true),
                        ),
                    ]
                )
            ),
        }
    )]
    #[case::multiple_removes(
        json!(
            {
                "a": null,
                "b": null
            }
        ),
        UpdateExpressionParams {
            update_expression: "REMOVE #a, #b".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#a".to_string(), "a".to_string()),
                    ("#b".to_string(), "b".to_string()),
                ]
            ),
            expression_attribute_values: None,
        }
    )]
    #[case::nested_values_replaced_whole(
        json!(
            {
                "address": {
                    "city": "Rome",
                    "zip": null
                }
            }
        ),
        UpdateExpressionParams {
            update_expression: "SET #address = :address".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#address".to_string(), "address".to_string()),
                ]
            ),
            expression_attribute_values: Some(
                collections::HashMap::from(
                    [(
                        ":address".to_string(),
                        types::AttributeValue::M(
                            collections::HashMap::from(
                                [
                                    (
                                        "city".to_string(),
                                        types::AttributeValue::S(
                                            "Rome".to_string()
                                        ),
                                    ),
                                    (
                                        "zip".to_string(),
                                        types::AttributeValue::Null(true),
                                    ),
                                ]
                            )
                        ),
                    )]
                )
            ),
        }
    )]
    #[case::empty(
        json!({}),
        UpdateExpressionParams::default()
    )]
    fn test_build_patch(#[case] changes: Value, #[case] expected: UpdateExpressionParams) {
        let Value::Object(changes) = changes else {
            panic!("fixture must be an object");
        };
        let actual = build_patch(changes);
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::set_and_remove(json!({"name": "Bob", "age": null}), true, true)]
    #[case::remove_only(json!({"age": null}), true, false)]
    #[case::empty(json!({}), false, false)]
    fn test_apply_patch(
        #[case] changes: Value,
        #[case] has_names: bool,
        #[case] has_values: bool,
    ) {
        let Value::Object(changes) = changes else {
            panic!("fixture must be an object");
        };
        let params = build_patch(changes);
        let builder = crate::apply_patch!(
            UpdateItemInput::builder().table_name("users"),
            params.clone()
        );
        assert_eq!(
            builder.get_update_expression().as_deref(),
            Some(params.update_expression.as_str())
        );
        assert_eq!(
            builder.get_expression_attribute_names().is_some(),
            has_names
        );
        if has_names {
            assert_eq!(
                builder.get_expression_attribute_names().as_ref(),
                Some(&params.expression_attribute_names)
            );
        }
        assert_eq!(
            builder.get_expression_attribute_values().is_some(),
            has_values
        );
        assert_eq!(
            builder.get_expression_attribute_values(),
            &params.expression_attribute_values
        );
    }
}
