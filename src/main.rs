use std::sync::Arc;

use keepnote::{
    config,
    repository::{InMemoryNoteRepository, NoteRepository, PgNoteRepository},
    service::NoteService,
};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to locate or load config: {e}");
    });
    tracing::info!("Successfully loaded keepnote config");

    // Repository creation and migration
    let repo: Arc<dyn NoteRepository> = if let Some(database_dsn) = &cfg.database_dsn {
        let mut repo = PgNoteRepository::new(database_dsn)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Failed to establish database connection: {e}");
                panic!("failed to establish database connection: {e}");
            });

        repo.migrate().await.unwrap_or_else(|e| {
            tracing::error!("Failed to migrate database: {e}");
            panic!("failed to migrate database: {e}");
        });

        Arc::new(repo)
    } else {
        tracing::warn!("No database configured, notes are kept in memory and lost on exit");
        Arc::new(InMemoryNoteRepository::new())
    };

    // Service creation
    let service = Arc::new(NoteService::new(repo));
    let router = keepnote::router(service);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.http_port))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to port {}: {e}", cfg.http_port);
            panic!("failed to bind to port {}: {e}", cfg.http_port);
        });

    match listener.local_addr() {
        Ok(addr) => tracing::info!("HTTP server starting, listening on {}", addr),
        Err(e) => tracing::warn!("HTTP server starting, local address unknown: {e}"),
    }

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    }
}
