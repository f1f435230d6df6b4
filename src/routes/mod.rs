pub mod car;
pub mod health;
pub mod login;
pub mod pages;

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate;

/// Shared not-found rendering. A missing identifier and a backend-reported
/// absence are indistinguishable to the operator.
pub(crate) fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(NotFoundTemplate.render().unwrap_or_default()),
    )
        .into_response()
}

/// Percent-encode a value for use in a query string.
pub(crate) fn encode_query(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
