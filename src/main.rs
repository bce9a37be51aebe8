use axum::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::{net::SocketAddr, sync::Arc};

use tayib_api::{
    app::build_app,
    completion::OpenAiClient,
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tayib_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    if config.completion.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; /chat will answer with 500");
    }
    if let Some(kv) = &config.kv_store {
        tracing::info!(host = %kv.host, port = kv.port, "key-value store configured");
    }

    let state = AppState {
        orm,
        completion: Arc::new(OpenAiClient::new(&config.completion)?),
    };
    let app = build_app(state, &config.assets_dir);

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    tracing::info!("listening on {}", addr);

    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
