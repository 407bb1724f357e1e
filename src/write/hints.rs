use crate::{
    common::{
        error::{Error, Result},
        item::Item,
    },
    write::encode,
};

use aws_sdk_dynamodb::types;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{collections, fmt, str};

/// Encoding directive overriding the default list encoding of an attribute.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Hint {
    /// Encode a sequence of strings as a string set.
    #[serde(rename = "SS")]
    StringSet,
    /// Encode a sequence of numbers as a number set.
    #[serde(rename = "NS")]
    NumberSet,
}

impl Hint {
    /// Returns the DynamoDB wire tag of the hinted type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StringSet => "SS",
            Self::NumberSet => "NS",
        }
    }

    fn to_attribute(self, name: &str, value: Value) -> Result<types::AttributeValue> {
        let mismatch = || Error::HintShapeMismatch {
            name: name.to_string(),
            hint: self,
        };
        let Value::Array(values) = value else {
            return Err(mismatch());
        };
        match self {
            Self::StringSet => values
                .into_iter()
                .map(|value| match value {
                    Value::String(string) => Some(string),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(types::AttributeValue::Ss)
                .ok_or_else(mismatch),
            Self::NumberSet => values
                .into_iter()
                .map(|value| match value {
                    Value::Number(number) => Some(number.to_string()),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(types::AttributeValue::Ns)
                .ok_or_else(mismatch),
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Hint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SS" => Ok(Self::StringSet),
            "NS" => Ok(Self::NumberSet),
            _ => Err(Error::UnknownHint(s.to_string())),
        }
    }
}

/// Per-attribute hints for building items with set-typed attributes.
///
/// Hints only apply to the top-level attributes of an item; nested values are
/// always encoded with [`encode::to_attribute`]. Bind the hints once and apply
/// them to as many objects as needed.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_convert::write::hints::{Hint, Hints};
/// use serde_json::json;
///
/// # fn main() -> Result<(), dynamodb_convert::common::error::Error> {
/// let hints = Hints::from_iter([("tags".to_string(), Hint::StringSet)]);
/// let object = json!({"tags": ["x", "y"]}).as_object().cloned().unwrap_or_default();
/// let item = hints.to_item(object)?;
/// assert_eq!(
///     item["tags"],
///     AttributeValue::Ss(vec!["x".to_string(), "y".to_string()])
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Hints(collections::HashMap<String, Hint>);

impl Hints {
    /// The hint bound to an attribute, if any.
    pub fn get(&self, name: &str) -> Option<Hint> {
        self.0.get(name).copied()
    }

    /// Convert a plain object into an item, honouring the hints.
    ///
    /// Fails with [`Error::HintShapeMismatch`] when a hinted attribute is not
    /// a sequence of the hinted element type.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_convert.to_item_with_hints", skip_all, err)
    )]
    pub fn to_item(&self, object: Map<String, Value>) -> Result<Item> {
        object
            .into_iter()
            .map(|(name, value)| {
                let attribute = match self.get(&name) {
                    Some(hint) => hint.to_attribute(&name, value)?,
                    None => encode::to_attribute(value),
                };
                Ok((name, attribute))
            })
            .collect()
    }
}

impl FromIterator<(String, Hint)> for Hints {
    fn from_iter<I: IntoIterator<Item = (String, Hint)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
