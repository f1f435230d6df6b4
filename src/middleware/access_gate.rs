//! Access Gate -- sits in front of every route.
//!
//! Resolution per request:
//!   1. Allow-listed path (login page/endpoint, well-known files, /static/)
//!      passes with no session check.
//!   2. Otherwise the session cookie must carry the authenticated value.
//!   3. Anything else is redirected to the login page.
//!
//! The decision itself is a pure function so it can be tested without
//! constructing HTTP machinery.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Session cookie name.
pub const SESSION_COOKIE: &str = "showroom_auth";
/// The only cookie value treated as authenticated.
pub const SESSION_AUTHED: &str = "1";
/// Redirect target for denied requests.
pub const LOGIN_PATH: &str = "/login";

/// Paths reachable without a session.
const ALLOWED_PATHS: &[&str] = &["/login", "/api/login", "/favicon.ico", "/robots.txt"];
/// Path prefixes reachable without a session.
const ALLOWED_PREFIXES: &[&str] = &["/static/"];

/// Outcome of the gate for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    RedirectTo(&'static str),
}

/// Classify a request path and session marker.
pub fn decide(path: &str, marker: Option<&str>) -> GateDecision {
    if ALLOWED_PATHS.contains(&path) || ALLOWED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return GateDecision::Allow;
    }
    match marker {
        Some(SESSION_AUTHED) => GateDecision::Allow,
        _ => GateDecision::RedirectTo(LOGIN_PATH),
    }
}

/// Build the Set-Cookie value issued on successful authentication.
///
/// HttpOnly keeps the marker away from page scripts, SameSite=Lax keeps it
/// on top-level navigations from other sites, Secure is added only in
/// production where the dashboard is served over TLS.
pub fn session_cookie(production: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE}={SESSION_AUTHED}; Path=/; HttpOnly; SameSite=Lax");
    if production {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Axum middleware applying the gate in front of the routed handlers.
pub async fn require_auth(req: Request, next: Next) -> Response {
    let marker = session_marker(&req);
    match decide(req.uri().path(), marker.as_deref()) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::RedirectTo(target) => Redirect::to(target).into_response(),
    }
}

fn session_marker(req: &Request) -> Option<String> {
    let cookies = req.headers().get(header::COOKIE)?.to_str().ok()?;
    for pair in cookies.split(';') {
        let pair = pair.trim();
        if let Some(rest) = pair.strip_prefix(SESSION_COOKIE) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(value.to_string());
            }
        }
    }
    None
}
