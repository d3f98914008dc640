//! Logger binding for HTTP requests.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::Extensions;
use uuid::Uuid;

use crate::context::BoundLogger;
use crate::logging::{default_logger, Logger};

/// Header whose value becomes the request id, if present.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attach and look up a logger on HTTP request state.
pub trait RequestLoggerExt {
    fn attach_logger(&mut self, logger: Logger);

    /// The attached logger, or the process-wide default.
    fn logger(&self) -> Logger;
}

impl RequestLoggerExt for Extensions {
    fn attach_logger(&mut self, logger: Logger) {
        self.insert(BoundLogger(logger));
    }

    fn logger(&self) -> Logger {
        self.get::<BoundLogger>()
            .map(|bound| bound.0.clone())
            .unwrap_or_else(|| default_logger().clone())
    }
}

impl<B> RequestLoggerExt for http::Request<B> {
    fn attach_logger(&mut self, logger: Logger) {
        self.extensions_mut().attach_logger(logger);
    }

    fn logger(&self) -> Logger {
        self.extensions().logger()
    }
}

/// Middleware attaching a per-request logger derived from `base`.
///
/// The request logger records its events inside a `request` span carrying
/// `request_id`, `method` and `uri`.
///
/// ```ignore
/// let app = Router::new()
///     .route("/", get(handler))
///     .layer(middleware::from_fn_with_state(base_logger, attach_request_logger));
/// ```
pub async fn attach_request_logger(
    State(base): State<Logger>,
    mut request: Request,
    next: Next,
) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = base.in_scope(|| {
        tracing::info_span!(
            "request",
            request_id = %request_id,
            method = %request.method(),
            uri = %request.uri()
        )
    });
    request.attach_logger(base.with_span(span));

    next.run(request).await
}
