use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lawsathi_api::{
    assistant::{LlmResponder, Responder},
    build_router,
    config::Config,
    state::AppState,
    API_PREFIX,
};
use lawsathi_extract::{CompositeExtractor, TextExtractor};
use lawsathi_llm::{ChatClient, OpenAIClient};
use lawsathi_persist::{MongoPersistenceClient, PersistenceClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config);

    tracing::info!("Starting LawSathi API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    tracing::info!(model = %config.llm.model, "Initializing LLM client");
    let mut openai = OpenAIClient::new(config.llm_api_key.clone())?;
    if let Some(base_url) = &config.llm.base_url {
        openai = openai.with_base_url(base_url);
    }
    let llm_client: Arc<dyn ChatClient> = Arc::new(openai);
    let responder: Arc<dyn Responder> = Arc::new(LlmResponder::new(llm_client, &config.llm));

    tracing::info!("Connecting to MongoDB");
    let mongo = Arc::new(
        MongoPersistenceClient::connect(&config.mongodb_uri, &config.mongodb.database).await?,
    );
    let persist: Arc<dyn PersistenceClient> = mongo.clone();

    let extractor: Arc<dyn TextExtractor> =
        Arc::new(CompositeExtractor::standard(config.extraction.ocr_config()));

    let state = Arc::new(AppState::new(config.clone(), persist, responder, extractor));
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("API docs: http://{}{}/openapi.json", addr, API_PREFIX);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing MongoDB connections");
    mongo.shutdown().await;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
