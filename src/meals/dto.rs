use serde::{Deserialize, Serialize};

/// Fields arrive as `Option` so a missing field is a 400 from our own
/// validation rather than a framework rejection.
#[derive(Debug, Deserialize)]
pub struct LogMealRequest {
    pub date: Option<String>,
    pub meal: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct MealQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
