use axum::routing::{get, post, put};
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers::{boards, notes, system, tags, tasks, vault};
use crate::state::AppState;

/// Build the Axum router with all routes.
///
/// Path parameters share the name `{id}` at each depth so the static
/// `columns`/`cards` segments can sit beside a board id.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route("/api/tasks/{id}", get(tasks::get).put(tasks::update).delete(tasks::delete))
        .route("/api/notes", get(notes::list).post(notes::create))
        .route("/api/notes/{id}", get(notes::get).put(notes::update).delete(notes::delete))
        .route("/api/boards", get(boards::list).post(boards::create))
        .route("/api/boards/{id}", get(boards::get).put(boards::update).delete(boards::delete))
        .route(
            "/api/boards/{id}/columns",
            get(boards::list_columns).post(boards::create_column),
        )
        .route(
            "/api/boards/columns/{id}",
            put(boards::update_column).delete(boards::delete_column),
        )
        .route(
            "/api/boards/columns/{id}/cards",
            get(boards::list_cards).post(boards::create_card),
        )
        .route(
            "/api/boards/cards/{id}",
            put(boards::update_card).delete(boards::delete_card),
        )
        .route("/api/tags", get(tags::list).post(tags::create))
        .route("/api/tags/{id}", get(tags::get).delete(tags::delete))
        .route("/api/vault/save", post(vault::save))
        .route("/api/vault/update", put(vault::update))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and start serving in the background. Returns a handle to shut it down.
pub async fn start(config: ServerConfig, state: AppState) -> Result<ServerHandle, std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let local_addr = listener.local_addr()?;
    let router = build_router(state);

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    let server = tokio::spawn(async move {
        let result = axum::serve(listener, router)
            .with_graceful_shutdown(async move { signal.cancelled().await })
            .await;
        if let Err(e) = result {
            tracing::error!(error = %e, "server stopped with error");
        }
    });

    tracing::info!(addr = %local_addr, "toduo server started");

    Ok(ServerHandle {
        port: local_addr.port(),
        shutdown,
        server,
    })
}

/// Handle returned by `start()`. Dropping it leaves the server running.
pub struct ServerHandle {
    pub port: u16,
    shutdown: CancellationToken,
    server: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Stop accepting connections and wait for in-flight requests to finish.
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        if let Err(e) = self.server.await {
            tracing::warn!(error = %e, "server task did not exit cleanly");
        }
        tracing::info!("toduo server stopped");
    }
}
