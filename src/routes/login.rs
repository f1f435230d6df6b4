//! Login page and endpoint.
//!
//! `POST /api/login` is the only place a session marker is issued. An unset
//! server password is a 500, never a 401, so a misconfigured deployment is
//! distinguishable from a wrong guess.

use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::middleware::access_gate;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login_page))
        .route("/api/login", post(api_login))
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate;

async fn login_page() -> impl IntoResponse {
    Html(LoginTemplate.render().unwrap_or_default())
}

#[derive(Deserialize)]
struct LoginBody {
    #[serde(default)]
    password: String,
}

async fn api_login(State(state): State<Arc<AppState>>, Json(body): Json<LoginBody>) -> Response {
    let Some(expected) = state.config.password.as_deref() else {
        tracing::error!("login attempted but SHOWROOM_PASSWORD is not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "ok": false })),
        )
            .into_response();
    };

    if body.password == expected {
        let cookie = access_gate::session_cookie(state.config.production);
        ([(header::SET_COOKIE, cookie)], Json(json!({ "ok": true }))).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "ok": false }))).into_response()
    }
}
