use crate::catalog::state::{CatalogState, OpenCardDetailEvent};
use bevy::prelude::*;

pub fn handle_open_detail_events(
    mut events: EventReader<OpenCardDetailEvent>,
    state: Res<CatalogState>,
) {
    for event in events.read() {
        let Some(card) = state.find_card(&event.name) else {
            warn!("No card named {:?}", event.name);
            continue;
        };
        if card.detail_url().is_empty() {
            warn!("Card {:?} has no detail page", card.name);
            continue;
        }
        open_in_new_context(card.detail_url());
    }
}

/// Open `url` in a new browsing context.
pub fn open_in_new_context(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                    error!("Failed to open {}: {:?}", url, e);
                }
            }
            None => error!("Window object not available"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("Detail page: {}", url);
    }
}
