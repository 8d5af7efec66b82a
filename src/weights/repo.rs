use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeightRow {
    pub id: i64,
    pub date: String,
    pub weight_lbs: f64,
}

pub async fn insert(db: &SqlitePool, date: &str, weight_lbs: f64) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO weights (date, weight_lbs) VALUES (?1, ?2)")
        .bind(date)
        .bind(weight_lbs)
        .execute(db)
        .await?;
    Ok(())
}

/// Ordering by the stored text is chronological because every date that
/// passes validation is zero-padded ISO 8601.
pub async fn list_ascending(db: &SqlitePool) -> anyhow::Result<Vec<WeightRow>> {
    let rows = sqlx::query_as::<_, WeightRow>(
        "SELECT id, date, weight_lbs FROM weights ORDER BY date",
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn latest(db: &SqlitePool) -> anyhow::Result<Option<WeightRow>> {
    let row = sqlx::query_as::<_, WeightRow>(
        "SELECT id, date, weight_lbs FROM weights ORDER BY date DESC LIMIT 1",
    )
    .fetch_optional(db)
    .await?;
    Ok(row)
}
