use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Route template the request matched, e.g. `/user/{id}`.
///
/// Only set once routing has run, so the middleware must be attached with
/// `route_layer`.
fn route_of(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "<unmatched>".to_string(), |path| path.as_str().to_string())
}

/// Logs each request once it completes, tagged with a fresh request id and
/// the matched route rather than the raw URI.
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/user/{id}", get(get_user))
///     .route_layer(middleware::from_fn(logging_middleware));
/// ```
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let route = route_of(&req);

    debug!(%request_id, %method, %route, "Request received");

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    if response.status().is_server_error() {
        error!(%request_id, %method, %route, status, latency_ms, "Request failed");
    } else if response.status().is_client_error() {
        warn!(%request_id, %method, %route, status, latency_ms, "Request rejected");
    } else {
        info!(%request_id, %method, %route, status, latency_ms, "Request served");
    }

    response
}

fn default_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "account_master={log_level},account_master_store={log_level},tower_http=warn,hyper=warn"
        ))
    })
}

/// Installs the global subscriber.
///
/// - Console: compact, filtered by `RUST_LOG` or `LOG_LEVEL`
/// - `LOG_DIR/account-master.json`: daily-rolling structured log at info
///
/// When `LOG_DIR` (default `storage/logs`) cannot be created the file layer
/// is skipped and only the console is used.
pub fn init_tracing() {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(default_filter());

    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "storage/logs".to_string());

    match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let json_appender =
                RollingFileAppender::new(Rotation::DAILY, &log_dir, "account-master.json");

            let json_layer = fmt::layer()
                .json()
                .with_writer(json_appender)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(EnvFilter::new("info"));

            tracing_subscriber::registry()
                .with(console_layer)
                .with(json_layer)
                .init();

            info!(log_dir = %log_dir, "Tracing initialized with console and file logging");
        }
        Err(e) => {
            tracing_subscriber::registry().with(console_layer).init();

            warn!(
                log_dir = %log_dir,
                error = %e,
                "Could not create log directory, logging to console only"
            );
        }
    }
}
