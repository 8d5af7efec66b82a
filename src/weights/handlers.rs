use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use crate::dates;
use crate::error::ApiError;
use crate::metabolism::{self, LBS_PER_KG};
use crate::state::AppState;

use super::dto::{LogWeightRequest, MessageResponse, ProjectionResponse, WeightItem};
use super::repo;

#[instrument(skip(state, body))]
pub async fn log_weight(
    State(state): State<AppState>,
    Json(body): Json<LogWeightRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let (Some(date), Some(weight_lbs)) = (body.date, body.weight_lbs) else {
        return Err(ApiError::Validation("Missing required fields".into()));
    };

    if dates::parse(&date).is_none() {
        return Err(ApiError::Validation("Date must be YYYY-MM-DD".into()));
    }
    if weight_lbs <= 0.0 {
        return Err(ApiError::Validation("Weight must be positive".into()));
    }

    repo::insert(&state.db, &date, weight_lbs).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Weight logged",
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_weights(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeightItem>>, ApiError> {
    let rows = repo::list_ascending(&state.db).await?;
    let items = rows
        .into_iter()
        .map(|w| WeightItem {
            date: w.date,
            weight_lbs: w.weight_lbs,
        })
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state))]
pub async fn project_loss(
    State(state): State<AppState>,
) -> Result<Json<ProjectionResponse>, ApiError> {
    let profile = &state.config.profile;
    let current_lbs = match repo::latest(&state.db).await? {
        Some(row) => row.weight_lbs,
        None => profile.start_weight_kg * LBS_PER_KG,
    };
    let (weekly, monthly) = metabolism::project_loss(profile, current_lbs / LBS_PER_KG);
    Ok(Json(ProjectionResponse {
        weekly: round1(weekly),
        monthly: round1(monthly),
    }))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use crate::db;

    use super::*;

    async fn test_state() -> AppState {
        let state = AppState::fake();
        db::init_schema(&state.db).await.expect("schema");
        state
    }

    fn weight_request(date: &str, weight_lbs: f64) -> LogWeightRequest {
        LogWeightRequest {
            date: Some(date.into()),
            weight_lbs: Some(weight_lbs),
        }
    }

    #[tokio::test]
    async fn weights_list_ascending_regardless_of_insertion_order() {
        let state = test_state().await;
        for (date, lbs) in [
            ("2024-01-01", 280.0),
            ("2024-03-01", 270.0),
            ("2024-02-01", 275.0),
        ] {
            log_weight(State(state.clone()), Json(weight_request(date, lbs)))
                .await
                .expect("log weight");
        }

        let Json(items) = get_weights(State(state)).await.expect("list");
        let dates: Vec<&str> = items.iter().map(|w| w.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-02-01", "2024-03-01"]);
    }

    #[tokio::test]
    async fn non_positive_weight_is_rejected() {
        let state = test_state().await;
        let err = log_weight(State(state.clone()), Json(weight_request("2024-01-01", 0.0)))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = log_weight(State(state), Json(weight_request("2024-01-01", -5.0)))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let state = test_state().await;
        let err = log_weight(
            State(state),
            Json(LogWeightRequest {
                date: Some("2024-01-01".into()),
                weight_lbs: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn projection_falls_back_to_configured_start_weight() {
        let empty = test_state().await;
        let Json(fallback) = project_loss(State(empty.clone())).await.expect("fallback");

        let explicit = test_state().await;
        let start_lbs = explicit.config.profile.start_weight_kg * LBS_PER_KG;
        log_weight(
            State(explicit.clone()),
            Json(weight_request("2024-01-01", start_lbs)),
        )
        .await
        .expect("log weight");
        let Json(logged) = project_loss(State(explicit)).await.expect("explicit");

        assert_eq!(fallback.weekly, logged.weekly);
        assert_eq!(fallback.monthly, logged.monthly);
    }

    #[tokio::test]
    async fn projection_uses_latest_dated_weight() {
        let state = test_state().await;
        log_weight(State(state.clone()), Json(weight_request("2024-02-01", 260.0)))
            .await
            .expect("later entry");
        log_weight(State(state.clone()), Json(weight_request("2024-01-01", 280.0)))
            .await
            .expect("earlier entry");

        let profile = state.config.profile.clone();
        let Json(response) = project_loss(State(state)).await.expect("projection");
        let (weekly, _) = metabolism::project_loss(&profile, 260.0 / LBS_PER_KG);
        assert_eq!(response.weekly, round1(weekly));
    }
}
