#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Convert
//!
//! Conversions between plain JSON-like values and DynamoDB attribute values.
//!
//! ## Overview
//!
//! This library turns [`serde_json::Value`]s into the
//! [`AttributeValue`](aws_sdk_dynamodb::types::AttributeValue)s the DynamoDB
//! client sends and receives, and back:
//! - Recursive encoding of strings, numbers, booleans, nulls, lists and maps
//! - Hinted encoding of top-level attributes as string or number sets
//! - Recursive decoding of every attribute type, sets included
//! - Update expressions built from a partial object: `null` removes, anything else sets
//!
//! Every conversion is pure and synchronous; nothing here talks to the network.
//!
//! ## Quick Example
//!
//! ```rust
//! use dynamodb_convert::{read, write};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), dynamodb_convert::common::error::Error> {
//! let user = json!({"id": "1", "name": "Jane", "tags": ["a", "b"]});
//! let object = user.as_object().cloned().unwrap_or_default();
//!
//! // Encode for a put item request, with `tags` stored as a string set.
//! let hints = write::hints::Hints::from_iter([(
//!     "tags".to_string(),
//!     write::hints::Hint::StringSet,
//! )]);
//! let item = hints.to_item(object)?;
//!
//! // Decode a get item response.
//! let decoded = read::decode::from_item(item)?;
//! assert_eq!(decoded["name"], json!("Jane"));
//!
//! // Build an update: rename and drop the tags.
//! let changes = json!({"name": "Janet", "tags": null});
//! let params = write::patch::build_patch(changes.as_object().cloned().unwrap_or_default());
//! assert_eq!(params.update_expression, "SET #name = :name REMOVE #tags");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Item model and errors
//! - [`mod@read`] - Decoding attributes and items
//! - [`mod@write`] - Encoding attributes and items, hints, and update expressions

/// Common types for items, attributes and errors.
pub mod common;

/// Read-side conversions from DynamoDB attributes to plain values.
pub mod read;

/// Write-side conversions from plain values to DynamoDB attributes.
///
/// This module provides:
/// - Encoding values and objects into attributes and items
/// - Hinted encoding for set-typed attributes
/// - Update expressions for partial updates
pub mod write;
