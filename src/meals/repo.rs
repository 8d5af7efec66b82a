use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MealRow {
    pub id: i64,
    pub date: String,
    pub meal: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone)]
pub struct NewMeal<'a> {
    pub date: &'a str,
    pub meal: &'a str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// The fixed sample day: (meal, calories, protein, carbs, fat).
pub const SAMPLE_MEALS: &[(&str, f64, f64, f64, f64)] = &[
    ("Breakfast", 350.0, 25.0, 50.0, 5.0),
    ("Snack1", 150.0, 20.0, 15.0, 0.0),
    ("Lunch", 600.0, 65.0, 30.0, 25.0),
    ("Snack2", 200.0, 3.0, 25.0, 10.0),
    ("Dinner", 400.0, 30.0, 35.0, 15.0),
];

pub async fn insert(db: &SqlitePool, entry: &NewMeal<'_>) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO meals (date, meal, calories, protein, carbs, fat)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(entry.date)
    .bind(entry.meal)
    .bind(entry.calories)
    .bind(entry.protein)
    .bind(entry.carbs)
    .bind(entry.fat)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn list_for_date(db: &SqlitePool, date: &str) -> anyhow::Result<Vec<MealRow>> {
    let rows = sqlx::query_as::<_, MealRow>(
        r#"
        SELECT id, date, meal, calories, protein, carbs, fat
        FROM meals
        WHERE date = ?1
        ORDER BY id
        "#,
    )
    .bind(date)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Inserts the sample set under one transaction so a mid-loop failure leaves
/// no partial day behind. Repeated calls intentionally duplicate rows.
pub async fn insert_samples(db: &SqlitePool, date: &str) -> anyhow::Result<()> {
    let mut tx = db.begin().await?;
    for &(meal, calories, protein, carbs, fat) in SAMPLE_MEALS {
        sqlx::query(
            r#"
            INSERT INTO meals (date, meal, calories, protein, carbs, fat)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(date)
        .bind(meal)
        .bind(calories)
        .bind(protein)
        .bind(carbs)
        .bind(fat)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(())
}
