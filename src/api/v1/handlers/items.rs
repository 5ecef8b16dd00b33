/*
 * Responsibility
 * - GET item lists behind authentication
 * - Which scheme applies is decided in routes.rs, not here
 */
use axum::Json;

use crate::api::v1::{dto::items::ItemsResponse, extractors::Authenticated};

const ITEMS: [&str; 2] = ["item1", "item2"];

pub async fn list_items(Authenticated(principal): Authenticated) -> Json<ItemsResponse> {
    Json(ItemsResponse {
        scheme: principal.scheme,
        items: ITEMS.to_vec(),
    })
}
