use std::{net::SocketAddr, sync::Arc};

use dotenvy::dotenv;
use text_review_service::{
    app_module::AppState,
    app_router::build_app,
    config::{AppConfig, StoreBackend},
    shutdown::shutdown_signal,
    text::{
        memory_repository::InMemoryTextRepository,
        text_repository::{MongoTextRepository, TextRepository},
    },
};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(config.is_dev())?;

    let repository = setup_store(&config.store).await?;
    let state = AppState::new(repository);
    let app = build_app(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let shutdown = shutdown_signal()?;

    tracing::info!("Server started, listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    state.shutdown().await;
    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(dev: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    if dev {
        tracing::subscriber::set_global_default(
            subscriber_builder.pretty().with_ansi(true).finish(),
        )?;
    } else {
        tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )?;
    }
    Ok(())
}

async fn setup_store(store: &StoreBackend) -> anyhow::Result<Arc<dyn TextRepository>> {
    match store {
        StoreBackend::Mongo {
            uri,
            database,
            collection,
        } => {
            let repository = MongoTextRepository::connect(uri, database, collection).await?;
            tracing::info!("Using MongoDB store {}.{}", database, collection);
            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, records are lost on exit");
            Ok(Arc::new(InMemoryTextRepository::new()))
        }
    }
}
