use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;

use crate::router::AppState;

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
}

/// Resolves the bearer token to a [`campus_core::model::scope::Principal`]
/// and attaches it to the request for the controllers.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<axum::response::Response, StatusCode> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok());

    let auth_header = if let Some(auth_header) = auth_header {
        auth_header.to_owned()
    } else {
        tracing::warn!("Authorization header not found.");
        return Err(StatusCode::UNAUTHORIZED);
    };

    let mut split = auth_header.split(' ');
    let auth_type = split.next().unwrap_or_default();
    let token = split.next().unwrap_or_default();

    if auth_type != "Bearer" || token.is_empty() {
        tracing::warn!("Could not authorize request. Incorrect authorization method.");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let principal = state
        .core
        .user_service
        .get_principal_by_token(token)
        .await
        .map_err(|error| {
            tracing::error!(%error, "Failed resolving bearer token");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    match principal {
        Some(principal) => {
            request.extensions_mut().insert(principal);
            Ok(next.run(request).await)
        }
        None => {
            tracing::warn!("Could not authorize request. Unknown token.");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

pub async fn metrics_counter(request: Request<Body>, next: Next) -> axum::response::Response {
    let start = Instant::now();

    let response = next.run(request).await;

    crate::metrics::track_request_count_and_time(start.elapsed().as_secs_f64());
    response
}

pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext {
    let headers = request.headers();
    let request_id = headers
        .get("x-request-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id,
    }
}
