use rusty_book_catalog::{
    adapters::{
        memory::InMemoryBookRepository, postgres::PostgresBookRepository,
        random::RandomIsbnGenerator,
    },
    api::{handlers::AppState, router::create_router},
    application::book::ServiceDependencies,
    config::{AppConfig, StorageBackend},
    ports::BookRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("rusty_book_catalog={},tower_http=debug", config.logging.level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting book catalog v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the record store
    let book_repository: Arc<dyn BookRepository> = match config.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory book store");
            Arc::new(InMemoryBookRepository::new())
        }
        StorageBackend::Postgres => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&config.database.url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations completed");

            Arc::new(PostgresBookRepository::new(pool))
        }
    };

    // Create service dependencies
    let service_deps = ServiceDependencies {
        book_repository,
        isbn_generator: Arc::new(RandomIsbnGenerator::new()),
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
