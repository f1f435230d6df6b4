//! Listing detail -- `/car?url=<source url>`
//!
//! The source URL is the listing's identity. No `url` parameter, a backend
//! 404 and a failed fetch all land on the same not-found page.

use std::sync::Arc;

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::inventory::display;
use crate::routes::not_found;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/car", get(car_page))
}

#[derive(Deserialize)]
struct DetailQuery {
    url: Option<String>,
}

#[derive(Template)]
#[template(path = "car.html")]
struct CarTemplate {
    title: String,
    price: String,
    exterior: String,
    interior: String,
    miles: String,
    body_style: String,
    transmission: String,
    engine: String,
    vin: String,
    stock: String,
    thumb: Option<String>,
    source_url: String,
    sticker_href: String,
}

async fn car_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DetailQuery>,
) -> Response {
    let Some(url) = query.url else {
        return not_found();
    };

    let listing = match state.inventory.detail(&url).await {
        Ok(Some(listing)) => listing,
        Ok(None) => return not_found(),
        Err(err) => {
            tracing::warn!(error = %err, "detail fetch failed");
            return not_found();
        }
    };

    let content = CarTemplate {
        title: display::display_title(&listing),
        price: display::display_price(&listing),
        exterior: display::dash_or(listing.exterior_color.as_deref()),
        interior: display::dash_or(listing.interior_color.as_deref()),
        miles: display::display_miles(listing.miles)
            .unwrap_or_else(|| display::DASH.to_string()),
        body_style: display::dash_or(listing.body_style.as_deref()),
        transmission: display::dash_or(listing.transmission.as_deref()),
        engine: display::dash_or(listing.engine.as_deref()),
        vin: display::dash_or(listing.vin.as_deref()),
        stock: display::dash_or(listing.stock.as_deref()),
        thumb: listing.thumb.clone(),
        sticker_href: state.inventory.sticker_url(&listing.url),
        source_url: listing.url,
    };

    Html(content.render().unwrap_or_default()).into_response()
}
