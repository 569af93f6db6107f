//! HTTP surface for task management.
//!
//! Routes:
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | `POST` | `/tasks` | `201` with the created task |
//! | `GET` | `/tasks` | `200` with every task |
//! | `GET` | `/tasks/{id}` | `200` with the task |
//! | `PUT` | `/tasks/{id}` | `200` with the updated task |
//! | `DELETE` | `/tasks/{id}` | `204` |
//! | `GET` | `/health` | `200` with `{"status":"ok"}` |
//!
//! Failures carry the error message as a plain-text body; see [`ApiError`].

mod error;
mod handlers;
mod middleware;
mod routes;

pub use error::ApiError;
pub use middleware::log_requests;
pub use routes::router;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Serves `app` on `listener` until `shutdown` is cancelled.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}

#[cfg(test)]
mod tests;
