use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Fixed user profile the calculator and plan prompt are built from.
/// Loaded once at startup; handlers only ever see it behind `Arc<AppConfig>`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub height_cm: f64,
    pub sex: Sex,
    pub activity_multiplier: f64,
    pub daily_calories: f64,
    pub start_weight_kg: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub profile: UserProfile,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:tracker.db".into());
        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".into());

        let sex = match std::env::var("PROFILE_SEX")
            .unwrap_or_else(|_| "male".into())
            .to_lowercase()
            .as_str()
        {
            "male" => Sex::Male,
            "female" => Sex::Female,
            other => anyhow::bail!("PROFILE_SEX must be 'male' or 'female', got '{other}'"),
        };

        let profile = UserProfile {
            age: env_or("PROFILE_AGE", 26),
            height_cm: env_or("PROFILE_HEIGHT_CM", 180.0),
            sex,
            activity_multiplier: env_or("PROFILE_ACTIVITY_MULTIPLIER", 1.2),
            daily_calories: env_or("PROFILE_DAILY_CALORIES", 1500.0),
            start_weight_kg: env_or("PROFILE_START_WEIGHT_KG", 127.0),
        };

        Ok(Self {
            database_url,
            gemini_api_key,
            gemini_model,
            profile,
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
