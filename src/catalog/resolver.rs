//! Batch key resolver: parse a caller-supplied key list, fetch matching
//! records and report which requested keys were not found.

use sqlx::SqlitePool;

use super::models::Pokemon;
use super::repository::PokemonRepository;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Invalid pokemon number(s). All numbers must be positive integers.")]
    InvalidKeyFormat,
    #[error("No valid pokemon numbers provided")]
    EmptyKeySet,
    #[error("Catalog query failed")]
    Store(#[from] sqlx::Error),
}

/// Outcome of a batch lookup: a partial-success contract, not
/// all-or-nothing. `records.len() + not_found.len() <= requested`, with
/// equality when the request carried no duplicates.
#[derive(Debug)]
pub struct Resolution {
    /// Matching records, ascending by number.
    pub records: Vec<Pokemon>,
    /// Number of keys originally requested, duplicates included.
    pub requested: usize,
    /// Requested keys absent from the store, deduplicated, first-seen order.
    pub not_found: Vec<i64>,
}

/// Parse a comma-delimited key list. All-or-nothing: one bad segment
/// fails the whole batch.
pub fn parse_keys(raw: &str) -> Result<Vec<i64>, LookupError> {
    let segments: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if segments.is_empty() {
        return Err(LookupError::EmptyKeySet);
    }

    let mut keys = Vec::with_capacity(segments.len());
    for segment in segments {
        let key: i64 = segment.parse().map_err(|_| LookupError::InvalidKeyFormat)?;
        if key < 1 {
            // The domain has no non-positive identifiers.
            return Err(LookupError::InvalidKeyFormat);
        }
        keys.push(key);
    }
    Ok(keys)
}

/// Look up the requested keys and partition them into found and not-found.
pub async fn resolve(pool: &SqlitePool, keys: &[i64]) -> Result<Resolution, LookupError> {
    let records = PokemonRepository::get_by_numbers(pool, keys).await?;

    let mut not_found: Vec<i64> = Vec::new();
    for &key in keys {
        if !records.iter().any(|p| p.number == key) && !not_found.contains(&key) {
            not_found.push(key);
        }
    }

    Ok(Resolution {
        records,
        requested: keys.len(),
        not_found,
    })
}

/// Full catalog read, ascending by number. No pagination, no filtering.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Pokemon>, LookupError> {
    Ok(PokemonRepository::get_all(pool).await?)
}
