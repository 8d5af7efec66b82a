use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    #[serde(rename = "type")]
    pub plan_type: Option<String>,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: String,
}
