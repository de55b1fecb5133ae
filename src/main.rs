mod app;
mod auth;
mod config;
mod error;
mod gmail;
mod recommend;
mod state;
mod statements;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "cardwise=debug,axum=info,tower_http=info".to_string());
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
    let db = app_state.db.clone();

    sqlx::migrate!("./migrations").run(&db).await?;

    let app = app::build_app(app_state);
    app::serve(app).await?;

    // serve() returns once the shutdown signal fires; release the pool so
    // in-flight statements finish before the process exits.
    db.close().await;
    tracing::info!("database pool closed, bye");

    Ok(())
}
