use bevy::prelude::*;
use constants::catalog::{CATEGORY_RESULT_CAP, PRIORITY_CARD_NAMES, RECOMMENDED_FILTER};

/// Runtime selection settings, seeded from the compile-time constants.
#[derive(Resource, Debug, Clone)]
pub struct CatalogSettings {
    pub recommended_filter: String,
    pub priority_names: Vec<String>,
    pub category_cap: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            recommended_filter: RECOMMENDED_FILTER.to_string(),
            priority_names: PRIORITY_CARD_NAMES.iter().map(|n| n.to_string()).collect(),
            category_cap: CATEGORY_RESULT_CAP,
        }
    }
}

impl CatalogSettings {
    pub fn is_recommended(&self, filter: &str) -> bool {
        filter == self.recommended_filter
    }

    /// Position of `name` on the priority list, if pinned.
    pub fn priority_rank(&self, name: &str) -> Option<usize> {
        self.priority_names.iter().position(|n| n == name)
    }
}
