//! Common utilities for DynamoDB conversions.
//!
//! This module provides the types shared by the read and write sides,
//! including the item model, errors, and update expression fragments.

/// Error type shared by every conversion.
pub mod error;

/// Item and attribute model.
pub mod item;

use aws_sdk_dynamodb::types;
use std::collections;

/// Name and value placeholders for a top-level attribute.
pub(crate) fn get_placeholders(key: &str) -> (String, String) {
    (format!("#{key}"), format!(":{key}"))
}

fn join_expressions(left: String, separator: &str, right: String) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right,
        (_, true) => left,
        _ => format!("{left}{separator}{right}"),
    }
}

/// Fragment of an update expression with the placeholders it introduces.
///
/// A SET entry, a REMOVE entry or a whole clause.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PatchClause {
    pub(crate) expression: String,
    pub(crate) names: collections::HashMap<String, String>,
    pub(crate) values: collections::HashMap<String, types::AttributeValue>,
}

impl PatchClause {
    /// Join fragments with `separator`, skipping empty ones and collecting their placeholders.
    pub(crate) fn join(separator: &str, clauses: Vec<Self>) -> Self {
        clauses
            .into_iter()
            .fold(Self::default(), |mut joined, clause| {
                joined.names.extend(clause.names);
                joined.values.extend(clause.values);
                joined.expression = join_expressions(joined.expression, separator, clause.expression);
                joined
            })
    }

    /// Prefix a non-empty expression with a clause keyword.
    pub(crate) fn with_keyword(mut self, keyword: &str) -> Self {
        if !self.expression.is_empty() {
            self.expression = format!("{keyword} {}", self.expression);
        }
        self
    }
}
