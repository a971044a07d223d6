//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request carrying method, URI and HTTP version,
/// logs every response with its status and latency in milliseconds, and
/// logs 5xx responses a second time at `ERROR`.
///
/// Request bodies are never recorded, so submitted passwords stay out of the
/// logs.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/adminlogin version=HTTP/1.1}: finished processing request latency=12 ms status=200
/// ERROR request{method=POST uri=/api/adminlogin version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=3 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
