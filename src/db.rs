use crate::domain::dates::today_stamp;
use crate::domain::streak::next_streak;
use anyhow::Result;
use chrono::NaiveDate;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::fs;
use std::path::Path;

pub type DbPool = Pool<Sqlite>;

pub const KEY_NAME: &str = "fortune_name";
pub const KEY_BIRTH: &str = "fortune_birth";
pub const KEY_STREAK: &str = "fortune_streak";
pub const KEY_LAST_VISIT: &str = "fortune_last_visit";

/// Opens (or creates) the device-local key/value store.
pub async fn init_db(db_path: &str) -> Result<DbPool> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS local_storage (
          key TEXT PRIMARY KEY,
          value TEXT NOT NULL
        );
        "#,
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}

pub async fn get_item(pool: &DbPool, key: &str) -> Result<Option<String>> {
    let value = sqlx::query_scalar::<_, String>("SELECT value FROM local_storage WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(value)
}

pub async fn set_item(pool: &DbPool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO local_storage (key, value) VALUES (?, ?) \
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn remove_item(pool: &DbPool, key: &str) -> Result<()> {
    sqlx::query("DELETE FROM local_storage WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn save_last_input(pool: &DbPool, name: &str, birth: &str) -> Result<()> {
    set_item(pool, KEY_NAME, name).await?;
    set_item(pool, KEY_BIRTH, birth).await?;
    Ok(())
}

/// The name and birthdate from the last accepted submission, if both are stored.
pub async fn load_last_input(pool: &DbPool) -> Result<Option<(String, String)>> {
    let name = get_item(pool, KEY_NAME).await?;
    let birth = get_item(pool, KEY_BIRTH).await?;
    Ok(name.zip(birth))
}

/// Counts a visit on `today` and returns the updated streak.
pub async fn record_visit(pool: &DbPool, today: NaiveDate) -> Result<u32> {
    let last_visit = get_item(pool, KEY_LAST_VISIT).await?;
    let streak = get_item(pool, KEY_STREAK)
        .await?
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(0);

    let streak = next_streak(last_visit.as_deref(), streak, today);

    set_item(pool, KEY_STREAK, &streak.to_string()).await?;
    set_item(pool, KEY_LAST_VISIT, &today_stamp(today)).await?;

    tracing::debug!(streak, last_visit = ?last_visit, "Recorded visit");
    Ok(streak)
}
