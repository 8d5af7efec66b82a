use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::db;
use crate::plans::client::{GeminiClient, PlanClient};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub plans: Arc<dyn PlanClient>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config.database_url).await?;
        let plans =
            Arc::new(GeminiClient::new(config.gemini_model.clone())) as Arc<dyn PlanClient>;
        Ok(Self { db, config, plans })
    }

    pub fn from_parts(
        db: SqlitePool,
        config: Arc<AppConfig>,
        plans: Arc<dyn PlanClient>,
    ) -> Self {
        Self { db, config, plans }
    }

    /// In-memory state for tests: a single-connection SQLite pool (each
    /// in-memory connection is its own database) and a canned plan client.
    pub fn fake() -> Self {
        use async_trait::async_trait;

        struct FakePlans;

        #[async_trait]
        impl PlanClient for FakePlans {
            async fn generate(&self, _api_key: &str, _prompt: &str) -> anyhow::Result<String> {
                Ok("fake plan".into())
            }
        }

        let options = sqlx::sqlite::SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("in-memory sqlite options");
        let db = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_lazy_with(options);

        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            gemini_api_key: None,
            gemini_model: "gemini-2.0-flash".into(),
            profile: crate::config::UserProfile {
                age: 26,
                height_cm: 180.0,
                sex: crate::config::Sex::Male,
                activity_multiplier: 1.2,
                daily_calories: 1500.0,
                start_weight_kg: 127.0,
            },
        });

        Self {
            db,
            config,
            plans: Arc::new(FakePlans),
        }
    }
}
