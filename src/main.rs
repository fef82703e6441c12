use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use notes_core::config::{rest_addr_from_env_value, CoreConfig, StoreConfig};
use notes_core::{NoteService, NoteStore, StoreBackend};

/// Main entry point for the notes service
///
/// Resolves configuration once, builds the store, and serves the REST API until the process is
/// stopped. The store handle is passed to the handlers through axum state.
///
/// # Environment Variables
/// - `NOTES_REST_ADDR`: REST server address (default: "127.0.0.1:8001")
/// - `NOTES_STORE`: `mongo` (default) or `memory`
/// - `MONGO_URI`, `DATABASE_NAME`, `COLLECTION_NAME`: MongoDB settings, required for `mongo`
///
/// A `.env` file in the working directory is loaded first if present.
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is missing or invalid,
/// - the MongoDB connection string cannot be parsed,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notes=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::new(
        rest_addr_from_env_value(std::env::var("NOTES_REST_ADDR").ok())?,
        StoreConfig::from_env_values(
            std::env::var("NOTES_STORE").ok(),
            std::env::var("MONGO_URI").ok(),
            std::env::var("DATABASE_NAME").ok(),
            std::env::var("COLLECTION_NAME").ok(),
        )?,
    );

    let store = NoteStore::from_config(cfg.store()).await?;
    if store.backend() == StoreBackend::Mongo {
        // The driver connects lazily; an unreachable server is reported per request instead.
        match store.ping().await {
            Ok(()) => tracing::info!("Connected to MongoDB"),
            Err(e) => tracing::warn!("MongoDB ping failed: {}", e),
        }
    }

    tracing::info!("++ Starting notes REST on {} ({} store)", cfg.rest_addr(), store.backend());

    let app = router(AppState::new(NoteService::new(store)));
    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
