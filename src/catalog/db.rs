//! Database connection management, schema creation and seed data

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

/// SQLite database connection pool
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        tracing::info!("SQLite connection pool established");
        Ok(Self { pool })
    }

    /// In-memory database on a single connection. Each SQLite memory
    /// database is private to its connection, so the pool must not grow.
    pub async fn connect_in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the catalog table when it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pokemon (
            number INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            hp INTEGER,
            attack INTEGER,
            defense INTEGER,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Canonical seed records: (number, name, type, hp, attack, defense, description)
const SEED_POKEMON: &[(i64, &str, &str, i64, i64, i64, &str)] = &[
    (1, "Bulbasaur", "Grass/Poison", 45, 49, 49, "A strange seed was planted on its back at birth."),
    (2, "Ivysaur", "Grass/Poison", 60, 62, 63, "When the bulb on its back grows large, it appears to lose the ability to stand on its hind legs."),
    (3, "Venusaur", "Grass/Poison", 80, 82, 83, "Its plant blooms when it is absorbing solar energy."),
    (4, "Charmander", "Fire", 39, 52, 43, "Obviously prefers hot places. When it rains, steam is said to spout from the tip of its tail."),
    (5, "Charmeleon", "Fire", 58, 64, 58, "When it swings its burning tail, it elevates the temperature to unbearably high levels."),
    (6, "Charizard", "Fire/Flying", 78, 84, 78, "Spits fire that is hot enough to melt boulders."),
    (7, "Squirtle", "Water", 44, 48, 65, "After birth, its back swells and hardens into a shell."),
    (8, "Wartortle", "Water", 59, 63, 80, "Often hides in water to stalk unwary prey."),
    (9, "Blastoise", "Water", 79, 83, 100, "A brutal Pokemon with pressurized water jets on its shell."),
    (25, "Pikachu", "Electric", 35, 55, 40, "When several of these Pokemon gather, their electricity could build and cause lightning storms."),
];

/// Load the seed records. Idempotent: skips when the table already has rows.
pub async fn seed(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pokemon")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        tracing::info!("Catalog already seeded ({} records)", count);
        return Ok(());
    }

    for &(number, name, kind, hp, attack, defense, description) in SEED_POKEMON {
        sqlx::query(
            r#"INSERT INTO pokemon (number, name, type, hp, attack, defense, description)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(number)
        .bind(name)
        .bind(kind)
        .bind(hp)
        .bind(attack)
        .bind(defense)
        .bind(description)
        .execute(pool)
        .await?;
    }

    tracing::info!("Catalog seeded with {} records", SEED_POKEMON.len());
    Ok(())
}
