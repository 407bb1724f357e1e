//! Read-side conversions, from DynamoDB attributes back into plain values.
//!
//! Use these on the items returned by get item, query and scan responses.

/// Attribute and item decoding.
pub mod decode;
