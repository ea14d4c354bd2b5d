//! Development backend for taskdeck
//!
//! Serves the `/tasks` collection from memory so the client can be run and
//! tested without a hosted backend. Nothing is persisted.

pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub use state::{SharedStore, StoredTask, TaskStore};

/// Default port for `taskdeck serve`
pub const DEFAULT_PORT: u16 = 3000;

/// Create the task router
pub fn create_router(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/{id}",
            put(handlers::toggle_task).delete(handlers::delete_task),
        )
        .with_state(store)
        .layer(cors)
}

/// Start the development backend
pub async fn start_server(host: &str, port: u16) -> std::io::Result<()> {
    let app = create_router(Arc::new(TaskStore::new()));
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "development backend listening");
    println!("taskdeck backend: http://{}/tasks", addr);
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app)
        .await
        .map_err(std::io::Error::other)
}

/// Backend bound to an ephemeral port for tests
#[cfg(test)]
pub struct TestServer {
    addr: std::net::SocketAddr,
}

#[cfg(test)]
impl TestServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Bind synchronously so requests issued right after return are queued,
/// then serve on a dedicated runtime thread.
#[cfg(test)]
pub fn spawn_for_test() -> TestServer {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    listener
        .set_nonblocking(true)
        .expect("set listener non-blocking");
    let addr = listener.local_addr().expect("listener address");

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build test runtime");
        runtime.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("adopt test listener");
            let app = create_router(Arc::new(TaskStore::new()));
            let _ = axum::serve(listener, app).await;
        });
    });

    TestServer { addr }
}
