use card_catalog_engine::catalog::selection::select_visible_cards;
use card_catalog_engine::catalog::settings::CatalogSettings;
use card_catalog_engine::engine::assets::card_dataset::{Benefit, Card};
use proptest::prelude::*;

const CATEGORIES: [&str; 4] = ["커피", "교통", "쇼핑", "주유"];

fn benefit_strategy() -> impl Strategy<Value = Benefit> {
    (prop::option::of(0..CATEGORIES.len()), "[a-z]{0,6}").prop_map(|(category, summary)| Benefit {
        category: category.map(|i| CATEGORIES[i].to_string()),
        summary: Some(summary),
        ..Default::default()
    })
}

fn card_strategy() -> impl Strategy<Value = Card> {
    let names = prop_oneof![
        Just("삼성카드 taptap O".to_string()),
        Just("삼성 iD SELECT ALL 카드".to_string()),
        Just("모니모카드".to_string()),
        "[A-Z][a-z]{2,8}",
    ];
    (names, prop::collection::vec(benefit_strategy(), 0..6)).prop_map(|(name, benefits)| Card {
        name,
        display_benefits: Some(benefits),
        ..Default::default()
    })
}

fn filter_strategy() -> impl Strategy<Value = String> {
    (0..CATEGORIES.len()).prop_map(|i| CATEGORIES[i].to_string())
}

proptest! {
    #[test]
    fn category_results_are_capped_and_matching(
        cards in prop::collection::vec(card_strategy(), 0..40),
        filter in filter_strategy(),
    ) {
        let settings = CatalogSettings::default();
        let visible = select_visible_cards(&cards, &filter, &settings);
        prop_assert!(visible.len() <= settings.category_cap);
        for card in &visible {
            prop_assert!(card.has_benefit_in(&filter));
        }
    }

    #[test]
    fn pinned_first_then_non_increasing_counts(
        cards in prop::collection::vec(card_strategy(), 0..40),
        filter in filter_strategy(),
    ) {
        let settings = CatalogSettings::default();
        let visible = select_visible_cards(&cards, &filter, &settings);

        let ranks: Vec<Option<usize>> = visible
            .iter()
            .map(|card| settings.priority_rank(&card.name))
            .collect();
        let first_unpinned = ranks.iter().position(Option::is_none).unwrap_or(ranks.len());
        prop_assert!(ranks[first_unpinned..].iter().all(Option::is_none));

        let pinned: Vec<usize> = ranks[..first_unpinned].iter().flatten().copied().collect();
        prop_assert!(pinned.windows(2).all(|w| w[0] <= w[1]));

        let counts: Vec<usize> = visible[first_unpinned..]
            .iter()
            .map(|card| card.matching_benefit_count(&filter))
            .collect();
        prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn selection_is_deterministic(
        cards in prop::collection::vec(card_strategy(), 0..30),
        filter in filter_strategy(),
    ) {
        let settings = CatalogSettings::default();
        prop_assert_eq!(
            select_visible_cards(&cards, &filter, &settings),
            select_visible_cards(&cards, &filter, &settings)
        );
    }

    #[test]
    fn recommended_is_an_ordered_subset_of_the_priority_list(
        cards in prop::collection::vec(card_strategy(), 0..30),
    ) {
        let settings = CatalogSettings::default();
        let visible = select_visible_cards(&cards, &settings.recommended_filter, &settings);
        let names: Vec<&str> = visible.iter().map(|card| card.name.as_str()).collect();

        let expected: Vec<&str> = settings
            .priority_names
            .iter()
            .map(String::as_str)
            .filter(|name| cards.iter().any(|card| card.name == *name))
            .collect();
        prop_assert_eq!(names, expected);
    }
}
