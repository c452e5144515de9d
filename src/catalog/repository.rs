//! Repository layer for catalog reads

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::models::Pokemon;

/// Read-only accessor over the catalog table
pub struct PokemonRepository;

impl PokemonRepository {
    /// Fetch the full catalog in ascending number order.
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Pokemon>, sqlx::Error> {
        let rows = sqlx::query(
            r#"SELECT number, name, type, hp, attack, defense, description
               FROM pokemon ORDER BY number"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(from_row).collect())
    }

    /// Fetch records whose number is in the given set, ascending by number.
    /// Missing numbers are simply absent from the result, never an error.
    pub async fn get_by_numbers(
        pool: &SqlitePool,
        numbers: &[i64],
    ) -> Result<Vec<Pokemon>, sqlx::Error> {
        if numbers.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; numbers.len()].join(",");
        let sql = format!(
            "SELECT number, name, type, hp, attack, defense, description \
             FROM pokemon WHERE number IN ({placeholders}) ORDER BY number"
        );

        let mut query = sqlx::query(&sql);
        for &number in numbers {
            query = query.bind(number);
        }

        let rows = query.fetch_all(pool).await?;
        Ok(rows.into_iter().map(from_row).collect())
    }
}

fn from_row(r: SqliteRow) -> Pokemon {
    Pokemon {
        number: r.get("number"),
        name: r.get("name"),
        kind: r.get("type"),
        hp: r.get("hp"),
        attack: r.get("attack"),
        defense: r.get("defense"),
        description: r.get("description"),
    }
}
