use crate::common::{
    error::{Error, Result},
    item::Item,
};

use aws_sdk_dynamodb::{primitives::Blob, types};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Convert a value into an attribute.
///
/// Never fails: every case of [`Value`] has an encoding. Numbers keep their
/// exact decimal text.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_convert::write::encode;
/// use serde_json::json;
///
/// let attribute = encode::to_attribute(json!(42));
/// assert_eq!(attribute, AttributeValue::N("42".to_string()));
/// ```
pub fn to_attribute(value: Value) -> types::AttributeValue {
    match value {
        Value::String(string) => types::AttributeValue::S(string),
        Value::Number(number) => types::AttributeValue::N(number.to_string()),
        Value::Bool(boolean) => types::AttributeValue::Bool(boolean),
        Value::Null => types::AttributeValue::Null(true),
        Value::Array(values) => {
            types::AttributeValue::L(values.into_iter().map(to_attribute).collect())
        }
        Value::Object(object) => types::AttributeValue::M(into_item(object)),
    }
}

/// Convert a plain object into an item, encoding every value with [`to_attribute`].
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_convert::write::encode;
/// use serde_json::json;
///
/// let object = json!({"id": "1"}).as_object().cloned().unwrap_or_default();
/// let item = encode::to_item(object);
/// assert_eq!(item["id"], AttributeValue::S("1".to_string()));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "dynamodb_convert.to_item", skip_all)
)]
pub fn to_item(object: Map<String, Value>) -> Item {
    into_item(object)
}

fn into_item(object: Map<String, Value>) -> Item {
    object
        .into_iter()
        .map(|(key, value)| (key, to_attribute(value)))
        .collect()
}

/// Fallback for values outside the [`Value`] model: store their string form as binary.
///
/// This is lossy. It does not binary-encode the value, it only records its
/// [`Display`](fmt::Display) text, which decodes back as a string.
pub fn to_opaque_attribute<T: fmt::Display + ?Sized>(value: &T) -> types::AttributeValue {
    types::AttributeValue::B(Blob::new(value.to_string()))
}

/// Serialize a typed record and convert it into an item.
///
/// Fails with [`Error::NotAnObject`] when the record does not serialize to a mapping.
///
/// ```rust
/// use dynamodb_convert::write::encode;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User {
///     id: String,
///     age: u32,
/// }
///
/// # fn main() -> Result<(), dynamodb_convert::common::error::Error> {
/// let item = encode::to_item_from(&User { id: "1".to_string(), age: 30 })?;
/// assert_eq!(item.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn to_item_from<T: Serialize + ?Sized>(record: &T) -> Result<Item> {
    match serde_json::to_value(record)? {
        Value::Object(object) => Ok(to_item(object)),
        _ => Err(Error::NotAnObject),
    }
}
