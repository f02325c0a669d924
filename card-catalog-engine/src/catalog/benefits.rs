use crate::engine::assets::card_dataset::{Benefit, Card};
use constants::catalog::{
    MAX_DISPLAY_BENEFITS, NOTICE_BENEFIT_TITLE, SELECT_BENEFIT_TITLE, is_displayable_summary,
};
use constants::category::{display_category, get_category_icon};
use serde::Serialize;
use std::collections::HashSet;

/// One benefit row on a rendered card widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitRow {
    pub category: String,
    pub icon: &'static str,
    pub summary: String,
    pub highlighted: bool,
}

/// Up to four displayable rows with distinct summaries, in list order.
/// The first accepted row is highlighted.
pub fn select_display_benefits(card: &Card) -> Vec<BenefitRow> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows = Vec::with_capacity(MAX_DISPLAY_BENEFITS);

    for benefit in card.benefits() {
        if rows.len() == MAX_DISPLAY_BENEFITS {
            break;
        }
        let summary = benefit.summary();
        if !is_displayable_summary(summary) || !seen.insert(summary) {
            continue;
        }
        let category = display_category(benefit.category());
        rows.push(BenefitRow {
            category: category.to_string(),
            icon: get_category_icon(category),
            summary: summary.to_string(),
            highlighted: rows.is_empty(),
        });
    }

    rows
}

/// Recompute row highlights for a concrete category filter: a row is
/// highlighted when its label contains the filter. The recommended view keeps
/// the first-row highlight from selection.
pub fn apply_category_highlight(rows: &mut [BenefitRow], filter: &str, is_recommended: bool) {
    if is_recommended {
        return;
    }
    for row in rows.iter_mut() {
        row.highlighted = !filter.is_empty() && row.category.contains(filter);
    }
}

/// First `count` raw benefits worth headlining: categorised, not a
/// select-option, and not a notice or select-type entry.
pub fn top_benefits(benefits: &[Benefit], count: usize) -> Vec<&Benefit> {
    benefits
        .iter()
        .filter(|b| {
            let title = b.title.as_deref();
            title != Some(NOTICE_BENEFIT_TITLE)
                && title != Some(SELECT_BENEFIT_TITLE)
                && b.category.is_some()
                && !b.is_select_option
        })
        .take(count)
        .collect()
}
