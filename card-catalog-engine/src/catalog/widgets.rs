use crate::catalog::benefits::{BenefitRow, apply_category_highlight, select_display_benefits};
use crate::catalog::format::format_annual_fee;
use crate::catalog::settings::CatalogSettings;
use crate::catalog::state::CatalogState;
use crate::engine::assets::card_dataset::Card;
use serde::Serialize;

/// Stagger between card entrance animations, in seconds.
const ENTRANCE_DELAY_STEP: f32 = 0.05;

/// View model of one rendered catalog card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardWidget {
    pub name: String,
    pub image_url: String,
    pub tagline: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub annual_fee: String,
    pub benefits: Vec<BenefitRow>,
    pub detail_url: String,
    pub entrance_delay: f32,
}

/// Everything the host page needs to redraw the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub filter: String,
    pub count: usize,
    pub loaded: bool,
    pub cards: Vec<CardWidget>,
}

pub fn build_card_widget(card: &Card, index: usize, filter: &str, settings: &CatalogSettings) -> CardWidget {
    let mut benefits = select_display_benefits(card);
    apply_category_highlight(&mut benefits, filter, settings.is_recommended(filter));

    CardWidget {
        name: card.name.clone(),
        image_url: card.image_url().to_string(),
        tagline: card.tagline().to_string(),
        primary_color: card.primary_color().to_string(),
        secondary_color: card.secondary_color().to_string(),
        annual_fee: format_annual_fee(card.annual_fee_amount()),
        benefits,
        detail_url: card.detail_url().to_string(),
        entrance_delay: index as f32 * ENTRANCE_DELAY_STEP,
    }
}

pub fn build_catalog_view(state: &CatalogState, settings: &CatalogSettings) -> CatalogView {
    let filter = state.current_filter();
    let cards: Vec<CardWidget> = state
        .visible_cards()
        .iter()
        .enumerate()
        .map(|(index, card)| build_card_widget(card, index, filter, settings))
        .collect();

    CatalogView {
        filter: filter.to_string(),
        count: cards.len(),
        loaded: state.is_loaded(),
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::card_dataset::{AnnualFee, Benefit};

    #[test]
    fn widget_carries_formatted_fee_and_defaults() {
        let card = Card {
            name: "모니모카드".into(),
            annual_fee: Some(AnnualFee {
                domestic: Some(15000),
            }),
            detail_url: Some("https://example.com/monimo".into()),
            display_benefits: Some(vec![Benefit {
                category: Some("커피".into()),
                summary: Some("스타벅스 50%".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let settings = CatalogSettings::default();
        let widget = build_card_widget(&card, 2, "추천", &settings);
        assert_eq!(widget.annual_fee, "15,000원");
        assert_eq!(widget.primary_color, "#1428a0");
        assert_eq!(widget.detail_url, "https://example.com/monimo");
        assert_eq!(widget.benefits.len(), 1);
        assert!(widget.benefits[0].highlighted);
        assert!((widget.entrance_delay - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn view_serialises_for_the_host_page() {
        let settings = CatalogSettings::default();
        let state = CatalogState::default();
        let view = build_catalog_view(&state, &settings);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["filter"], "추천");
        assert_eq!(json["count"], 0);
        assert_eq!(json["loaded"], false);
    }
}
