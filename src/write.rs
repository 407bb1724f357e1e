//! Write-side conversions, from plain values into DynamoDB attributes.
//!
//! This module provides:
//! - Encoding values and objects into attributes and items
//! - Hinted encoding for string and number sets
//! - Building update expressions from partial objects

/// Attribute and item encoding.
pub mod encode;

/// Hinted item encoding for set-typed attributes.
pub mod hints;

/// Update expression building from partial objects.
pub mod patch;
