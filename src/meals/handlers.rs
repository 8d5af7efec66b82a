use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use crate::dates;
use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{LogMealRequest, MealQuery, MessageResponse};
use super::repo::{self, MealRow, NewMeal};

#[instrument(skip(state, body))]
pub async fn log_meal(
    State(state): State<AppState>,
    Json(body): Json<LogMealRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let (Some(date), Some(meal), Some(calories), Some(protein), Some(carbs), Some(fat)) = (
        body.date,
        body.meal,
        body.calories,
        body.protein,
        body.carbs,
        body.fat,
    ) else {
        return Err(ApiError::Validation("Missing required fields".into()));
    };

    if meal.chars().count() > 100 {
        return Err(ApiError::Validation("Meal name too long".into()));
    }
    if dates::parse(&date).is_none() {
        return Err(ApiError::Validation("Date must be YYYY-MM-DD".into()));
    }
    if [calories, protein, carbs, fat].iter().any(|v| *v < 0.0) {
        return Err(ApiError::Validation(
            "Numeric fields must be non-negative".into(),
        ));
    }

    repo::insert(
        &state.db,
        &NewMeal {
            date: &date,
            meal: &meal,
            calories,
            protein,
            carbs,
            fat,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Meal logged",
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_meals(
    State(state): State<AppState>,
    Query(query): Query<MealQuery>,
) -> Result<Json<Vec<MealRow>>, ApiError> {
    let date = query.date.unwrap_or_else(dates::today);
    let meals = repo::list_for_date(&state.db, &date).await?;
    Ok(Json(meals))
}

#[instrument(skip(state))]
pub async fn load_sample(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    repo::insert_samples(&state.db, &dates::today()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Sample plan loaded",
        }),
    ))
}
