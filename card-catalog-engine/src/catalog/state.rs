use crate::catalog::selection::select_visible_cards;
use crate::catalog::settings::CatalogSettings;
use crate::catalog::widgets::build_catalog_view;
use crate::engine::assets::card_dataset::Card;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use constants::catalog::RECOMMENDED_FILTER;

/// Catalog state for the lifetime of the page view.
///
/// `visible_cards` is only ever replaced as a whole by re-deriving it from
/// `(all_cards, current_filter)`.
#[derive(Resource, Debug, Clone)]
pub struct CatalogState {
    all_cards: Vec<Card>,
    current_filter: String,
    visible_cards: Vec<Card>,
    loaded: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            all_cards: Vec::new(),
            current_filter: RECOMMENDED_FILTER.to_string(),
            visible_cards: Vec::new(),
            loaded: false,
        }
    }
}

impl CatalogState {
    /// Install the loaded dataset. Only the first call has any effect.
    pub fn populate(&mut self, cards: Vec<Card>, settings: &CatalogSettings) -> bool {
        if self.loaded {
            warn!("Catalog already populated, ignoring {} cards", cards.len());
            return false;
        }
        self.all_cards = cards;
        self.loaded = true;
        self.visible_cards = select_visible_cards(&self.all_cards, &self.current_filter, settings);
        true
    }

    pub fn select_filter(&mut self, filter: &str, settings: &CatalogSettings) {
        self.current_filter = filter.to_string();
        self.visible_cards = select_visible_cards(&self.all_cards, &self.current_filter, settings);
    }

    pub fn all_cards(&self) -> &[Card] {
        &self.all_cards
    }

    pub fn current_filter(&self) -> &str {
        &self.current_filter
    }

    pub fn visible_cards(&self) -> &[Card] {
        &self.visible_cards
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn find_card(&self, name: &str) -> Option<&Card> {
        self.all_cards.iter().find(|card| card.name == name)
    }
}

/// A filter button was pressed (RPC or native UI).
#[derive(Event, Debug, Clone)]
pub struct CategorySelectedEvent {
    pub category: String,
}

/// Visible cards changed and the grid must be redrawn.
#[derive(Event, Debug, Clone, Default)]
pub struct CatalogUpdatedEvent;

/// The apply control of a card was activated.
#[derive(Event, Debug, Clone)]
pub struct OpenCardDetailEvent {
    pub name: String,
}

pub fn apply_category_selection(
    mut events: EventReader<CategorySelectedEvent>,
    mut state: ResMut<CatalogState>,
    settings: Res<CatalogSettings>,
    mut updates: EventWriter<CatalogUpdatedEvent>,
) {
    for event in events.read() {
        state.select_filter(&event.category, &settings);
        info!(
            "{} filter: {} cards",
            state.current_filter(),
            state.visible_cards().len()
        );
        updates.write(CatalogUpdatedEvent);
    }
}

pub fn request_initial_render(mut updates: EventWriter<CatalogUpdatedEvent>) {
    updates.write(CatalogUpdatedEvent);
}

/// Push the rendered grid to the host page.
pub fn publish_catalog_view(
    mut updates: EventReader<CatalogUpdatedEvent>,
    state: Res<CatalogState>,
    settings: Res<CatalogSettings>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if updates.is_empty() {
        return;
    }
    updates.clear();

    let view = build_catalog_view(&state, &settings);
    match serde_json::to_value(&view) {
        Ok(params) => rpc_interface.send_notification("catalog_rendered", params),
        Err(e) => error!("Failed to serialise catalog view: {}", e),
    }
}
