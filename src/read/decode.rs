use crate::common::{
    error::{Error, Result},
    item::Item,
};

use aws_sdk_dynamodb::{primitives::Blob, types};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

/// Convert an attribute back into a value.
///
/// Sets decode to sequences. Numbers outside the `i64`, `u64` and `f64`
/// ranges lose precision. Fails with [`Error::UnknownAttribute`] when no known
/// case is populated, and with [`Error::InvalidNumber`] when a number's text is
/// not a finite number, rather than decoding it to `NaN`.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_convert::read::decode;
/// use serde_json::json;
///
/// # fn main() -> Result<(), dynamodb_convert::common::error::Error> {
/// let value = decode::from_attribute(AttributeValue::N("42".to_string()))?;
/// assert_eq!(value, json!(42));
/// # Ok(())
/// # }
/// ```
pub fn from_attribute(attribute: types::AttributeValue) -> Result<Value> {
    let value = match attribute {
        types::AttributeValue::S(string) => Value::String(string),
        types::AttributeValue::N(number) => Value::Number(parse_number(number)?),
        types::AttributeValue::Bool(boolean) => Value::Bool(boolean),
        types::AttributeValue::Null(_) => Value::Null,
        types::AttributeValue::L(values) => Value::Array(
            values
                .into_iter()
                .map(from_attribute)
                .collect::<Result<_>>()?,
        ),
        types::AttributeValue::M(map) => Value::Object(into_object(map)?),
        types::AttributeValue::B(blob) => from_blob(blob),
        types::AttributeValue::Ss(strings) => {
            Value::Array(strings.into_iter().map(Value::String).collect())
        }
        types::AttributeValue::Ns(numbers) => Value::Array(
            numbers
                .into_iter()
                .map(|number| parse_number(number).map(Value::Number))
                .collect::<Result<_>>()?,
        ),
        types::AttributeValue::Bs(blobs) => Value::Array(blobs.into_iter().map(from_blob).collect()),
        unknown => return Err(Error::UnknownAttribute(unknown)),
    };
    Ok(value)
}

/// Convert an item back into a plain object.
///
/// The first attribute that fails to decode aborts the whole item.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "dynamodb_convert.from_item", skip_all, err)
)]
pub fn from_item(item: Item) -> Result<Map<String, Value>> {
    into_object(item)
}

/// Convert an item back into a typed record.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_convert::read::decode;
/// use serde::Deserialize;
/// use std::collections::HashMap;
///
/// #[derive(Deserialize)]
/// struct User {
///     id: String,
///     age: u32,
/// }
///
/// # fn main() -> Result<(), dynamodb_convert::common::error::Error> {
/// let item = HashMap::from([
///     ("id".to_string(), AttributeValue::S("1".to_string())),
///     ("age".to_string(), AttributeValue::N("30".to_string())),
/// ]);
/// let user: User = decode::from_item_into(item)?;
/// assert_eq!(user.age, 30);
/// # Ok(())
/// # }
/// ```
pub fn from_item_into<T: DeserializeOwned>(item: Item) -> Result<T> {
    let object = from_item(item)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

fn into_object(item: Item) -> Result<Map<String, Value>> {
    item.into_iter()
        .map(|(key, attribute)| Ok((key, from_attribute(attribute)?)))
        .collect()
}

fn parse_number(number: String) -> Result<Number> {
    if let Ok(integer) = number.parse::<i64>() {
        return Ok(integer.into());
    }
    if let Ok(integer) = number.parse::<u64>() {
        return Ok(integer.into());
    }
    number
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or(Error::InvalidNumber(number))
}

/// Binary payloads written by the opaque fallback come back as text.
fn from_blob(blob: Blob) -> Value {
    match String::from_utf8(blob.into_inner()) {
        Ok(string) => Value::String(string),
        Err(error) => Value::Array(
            error
                .into_bytes()
                .into_iter()
                .map(|byte| Value::Number(byte.into()))
                .collect(),
        ),
    }
}
