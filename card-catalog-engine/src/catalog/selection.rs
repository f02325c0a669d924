use crate::catalog::settings::CatalogSettings;
use crate::engine::assets::card_dataset::Card;
use std::cmp::Reverse;

/// Sort key for a category result. Variant order puts pinned cards first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum CategoryRank {
    Pinned(usize),
    ByMatches(Reverse<usize>),
}

/// Derive the visible cards for `filter`.
///
/// The recommended filter yields the pinned shortlist in list order, skipping
/// names absent from `cards`. Any other filter keeps the cards with at least
/// one benefit in that category, pinned cards first, then by descending
/// matching-benefit count, capped to `settings.category_cap`. Ties keep
/// dataset order.
pub fn select_visible_cards(cards: &[Card], filter: &str, settings: &CatalogSettings) -> Vec<Card> {
    if settings.is_recommended(filter) {
        return settings
            .priority_names
            .iter()
            .filter_map(|name| cards.iter().find(|card| &card.name == name))
            .cloned()
            .collect();
    }

    let mut matched: Vec<&Card> = cards
        .iter()
        .filter(|card| card.has_benefit_in(filter))
        .collect();

    // `sort_by_key` is stable, which keeps equal-count cards in dataset order.
    matched.sort_by_key(|card| category_rank(card, filter, settings));

    matched
        .into_iter()
        .take(settings.category_cap)
        .cloned()
        .collect()
}

fn category_rank(card: &Card, filter: &str, settings: &CatalogSettings) -> CategoryRank {
    match settings.priority_rank(&card.name) {
        Some(rank) => CategoryRank::Pinned(rank),
        None => CategoryRank::ByMatches(Reverse(card.matching_benefit_count(filter))),
    }
}
