use anyhow::Result;
use cafe_service::{api, config::Args, db, store::PgStore};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let database_url = args.database_url();

    db::run_migrations(&database_url)?;

    let pool = db::build_pool(&database_url, args.pool_size, args.acquire_timeout()).await?;
    info!("Database pool ready with up to {} connections", args.pool_size);

    let store = Arc::new(PgStore::new(pool));
    let app_state = api::AppState {
        catalog: store.clone(),
        orders: store,
    };

    let app = api::create_router(app_state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port)).await?;

    info!("Cafe service ready to accept HTTP requests at http://0.0.0.0:{}/api", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
