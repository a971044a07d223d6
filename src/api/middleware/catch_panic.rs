//! Converts handler panics into the generic 500 response.

use std::any::Any;

use axum::response::Response;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::internal_error_response;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Creates a layer that turns any panic inside the service stack into
/// `{ "success": false, "message": "Internal server error" }` with status 500.
///
/// The panic payload is logged, never returned to the client.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");

    internal_error_response()
}
