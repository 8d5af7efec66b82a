mod app;
mod config;
mod dates;
mod db;
mod error;
mod meals;
mod metabolism;
mod plans;
mod state;
mod weights;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "caltrack=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = state::AppState::init().await?;
    db::init_schema(&app_state.db).await?;

    if app_state.config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; /api/generate_plan is disabled");
    }

    let app = app::build_app(app_state);
    app::serve(app).await
}
