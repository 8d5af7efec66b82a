use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LogWeightRequest {
    pub date: Option<String>,
    pub weight_lbs: Option<f64>,
}

/// Listing shape: the row id is not exposed, only date and reading.
#[derive(Debug, Serialize)]
pub struct WeightItem {
    pub date: String,
    pub weight_lbs: f64,
}

#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub weekly: f64,
    pub monthly: f64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
