//! Inventory list -- `/`
//!
//! One fresh backend fetch per view. A failed fetch renders an empty
//! inventory with an explanatory message instead of an error page.

use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::inventory::display;
use crate::inventory::model::Listing;
use crate::routes::encode_query;
use crate::AppState;

/// Upper bound on listings requested per page view.
const LIST_LIMIT: u32 = 200;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(inventory_page))
}

struct CardView {
    href: String,
    thumb: Option<String>,
    title: String,
    colors: Option<String>,
    price: String,
    miles: Option<String>,
    badge: Option<String>,
}

#[derive(Template)]
#[template(path = "inventory.html")]
struct InventoryTemplate {
    cars: Vec<CardView>,
}

async fn inventory_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let listings = match state.inventory.inventory(LIST_LIMIT).await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, "inventory fetch failed, rendering empty list");
            Vec::new()
        }
    };

    let cars = listings.iter().map(card_view).collect();
    Html(InventoryTemplate { cars }.render().unwrap_or_default())
}

fn card_view(listing: &Listing) -> CardView {
    let colors = display::color_summary(
        listing.exterior_color.as_deref(),
        listing.interior_color.as_deref(),
    );
    CardView {
        href: format!("/car?url={}", encode_query(&listing.url)),
        thumb: listing.thumb.clone(),
        title: display::display_title(listing),
        colors: (!colors.is_empty()).then_some(colors),
        price: display::display_price(listing),
        miles: display::display_miles(listing.miles),
        badge: display::status_badge(listing.status.as_deref()),
    }
}
