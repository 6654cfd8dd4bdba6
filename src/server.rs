use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::prom;
use crate::typesense::TypesenseCollector;

const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Serve the exporter on `0.0.0.0:<port>` until the process is stopped.
pub async fn serve(collector: Arc<TypesenseCollector>, port: u16) -> anyhow::Result<()> {
    let app = Router::new()
        .route("/", get(index))
        .route("/metrics", get(metrics))
        .with_state(collector);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> &'static str {
    "Typesense exporter. Metrics are served on /metrics.\n"
}

/// Scrape handler: fetch from the cluster, encode, always answer 200.
///
/// The collector does blocking I/O, so it runs on the blocking thread pool.
/// An upstream outage degrades to a partial or empty exposition body, never
/// to a failed scrape.
async fn metrics(State(collector): State<Arc<TypesenseCollector>>) -> impl IntoResponse {
    let families = tokio::task::spawn_blocking(move || collector.collect())
        .await
        .unwrap_or_else(|err| {
            log::error!("Metric collection task failed: {err}");
            Vec::new()
        });

    (
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        prom::encode(&families),
    )
}
