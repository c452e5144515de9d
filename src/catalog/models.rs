//! Catalog record types

use serde::Serialize;

/// A single catalog entry. Immutable reference data, keyed by a unique
/// positive number.
#[derive(Debug, Clone, Serialize)]
pub struct Pokemon {
    pub number: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub description: String,
}
