//! Handler for `GET /items`.

use axum::extract::{Query, State};
use axum::Json;
use clipfix_core::eligibility::{parse_flag, EnrichedItem};
use clipfix_core::pagination::parse_page;

use crate::engine::EligibilitySelector;
use crate::query::ItemListParams;
use crate::state::AppState;

/// GET /api/items
///
/// One page of items still open for annotation, with the requesting user's
/// saved state filled in. Always a JSON array: internal failures yield `[]`.
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ItemListParams>,
) -> Json<Vec<EnrichedItem>> {
    let page = parse_page(params.limit.as_deref(), params.offset.as_deref());
    let hide_confirmed = parse_flag(params.hide_confirmed.as_deref());

    let items = EligibilitySelector::from_state(&state)
        .list(params.requesting_user(), page, hide_confirmed)
        .await;

    Json(items)
}
