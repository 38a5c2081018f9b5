//! Eligibility selector.
//!
//! Lists the items a user may still work on, enriched with that user's own
//! saved correction. Store failures degrade to an empty listing so a page load
//! never fails on a transient database error.

use clipfix_core::eligibility::{EligibilityFilter, EnrichedItem, ItemCandidate};
use clipfix_core::pagination::Page;
use clipfix_db::repositories::ItemRepo;
use clipfix_db::DbPool;

use crate::state::AppState;

/// Read-only view of the eligible item set.
pub struct EligibilitySelector<'a> {
    pool: &'a DbPool,
    asset_base_url: &'a str,
    owner_override: bool,
}

impl<'a> EligibilitySelector<'a> {
    pub fn new(pool: &'a DbPool, asset_base_url: &'a str) -> Self {
        Self {
            pool,
            asset_base_url,
            owner_override: false,
        }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(&state.pool, &state.config.asset_base_url)
            .with_owner_override(state.config.quota_owner_override)
    }

    pub fn with_owner_override(mut self, owner_override: bool) -> Self {
        self.owner_override = owner_override;
        self
    }

    /// One page of eligible items for `user` (`None` = anonymous), ascending
    /// by item id.
    pub async fn list(
        &self,
        user: Option<&str>,
        page: Page,
        hide_confirmed: bool,
    ) -> Vec<EnrichedItem> {
        let filter = EligibilityFilter::new(user, page, hide_confirmed)
            .with_owner_override(self.owner_override);

        match ItemRepo::list_eligible(self.pool, &filter).await {
            Ok(candidates) => enrich(candidates, page.offset, self.asset_base_url),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    username = ?filter.username,
                    limit = page.limit,
                    offset = page.offset,
                    "Eligibility query failed, returning empty listing"
                );
                Vec::new()
            }
        }
    }
}

/// Present a page of candidates; positions continue across pages.
fn enrich(candidates: Vec<ItemCandidate>, offset: i64, asset_base_url: &str) -> Vec<EnrichedItem> {
    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            let position = offset.saturating_add(index as i64).saturating_add(1);
            EnrichedItem::from_candidate(candidate, position, asset_base_url)
        })
        .collect()
}
