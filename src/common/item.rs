use aws_sdk_dynamodb::types;
use std::collections;

/// A full record: attribute name to attribute value.
///
/// This is the shape the SDK's put, get, query and scan requests use.
pub type Item = collections::HashMap<String, types::AttributeValue>;

/// Wire tag of the populated case of an attribute.
///
/// Returns `None` for an attribute the client could not classify.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_convert::common::item;
///
/// assert_eq!(item::tag(&AttributeValue::N("42".to_string())), Some("N"));
/// ```
pub fn tag(attribute: &types::AttributeValue) -> Option<&'static str> {
    match attribute {
        types::AttributeValue::S(_) => Some("S"),
        types::AttributeValue::N(_) => Some("N"),
        types::AttributeValue::Bool(_) => Some("BOOL"),
        types::AttributeValue::Null(_) => Some("NULL"),
        types::AttributeValue::L(_) => Some("L"),
        types::AttributeValue::M(_) => Some("M"),
        types::AttributeValue::B(_) => Some("B"),
        types::AttributeValue::Ss(_) => Some("SS"),
        types::AttributeValue::Ns(_) => Some("NS"),
        types::AttributeValue::Bs(_) => Some("BS"),
        _ => None,
    }
}
