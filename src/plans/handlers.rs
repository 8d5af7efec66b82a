use axum::extract::State;
use axum::Json;
use tracing::{error, instrument};

use crate::config::{Sex, UserProfile};
use crate::error::ApiError;
use crate::metabolism::LBS_PER_KG;
use crate::state::AppState;

use super::dto::{GeneratePlanRequest, PlanResponse};

#[instrument(skip(state, body))]
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(body): Json<GeneratePlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    // Checked before any outbound work so a missing key never hits the wire.
    let Some(api_key) = state.config.gemini_api_key.as_deref() else {
        return Err(ApiError::MissingCredential);
    };

    let plan_type = body
        .plan_type
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Missing plan type".into()))?;

    let prompt = build_prompt(&state.config.profile, &plan_type, &body.details);
    let plan = state.plans.generate(api_key, &prompt).await.map_err(|e| {
        error!(error = %e, %plan_type, "plan generation failed");
        ApiError::PlanApi(e.to_string())
    })?;

    Ok(Json(PlanResponse { plan }))
}

fn build_prompt(profile: &UserProfile, plan_type: &str, details: &str) -> String {
    let sex = match profile.sex {
        Sex::Male => "male",
        Sex::Female => "female",
    };
    let start_lbs = profile.start_weight_kg * LBS_PER_KG;
    format!(
        "Generate a safe, beginner-friendly {plan_type} plan for a {age}-year-old {sex}, \
         {height:.0} cm tall, {weight:.0} lbs, with a {activity} lifestyle aiming for gradual \
         weight loss. Include realistic goals, nutritional balance, and warnings to consult \
         a doctor. Custom details: {details}. Keep it concise, structured, and evidence-based.",
        age = profile.age,
        height = profile.height_cm,
        weight = start_lbs,
        activity = activity_description(profile.activity_multiplier),
    )
}

fn activity_description(multiplier: f64) -> &'static str {
    if multiplier < 1.4 {
        "sedentary"
    } else if multiplier < 1.7 {
        "moderately active"
    } else {
        "very active"
    }
}
