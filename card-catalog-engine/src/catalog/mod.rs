//! Card catalog: selection, formatting and publication of the card grid.
//!
//! The catalog owns one `CatalogState` resource. Everything that derives data
//! from it is a pure function so it can be exercised without a renderer:
//!
//! ```text
//! CategorySelectedEvent (RPC / filter button / number key)
//!   └─> apply_category_selection()
//!       ├─> select_visible_cards(all_cards, filter)   [selection]
//!       └─> CatalogUpdatedEvent
//!           ├─> publish_catalog_view()   -> `catalog_rendered` notification
//!           └─> rebuild_catalog_panel()  -> bevy_ui grid (native only)
//! ```
//!
//! Publication only runs in `AppState::Running`, which is entered once the
//! dataset load has resolved, so nothing renders from a half-loaded catalog.

/// Benefit rows shown on a card, highlight pass and top-benefit filter.
pub mod benefits;

/// Detail page opening for a card's apply control.
pub mod detail;

/// Annual fee label formatting.
pub mod format;

/// Pinned-shortlist and category selection policy.
pub mod selection;

/// Runtime selection settings seeded from `constants::catalog`.
pub mod settings;

/// Catalog resource, catalog events and the systems that mutate the state.
pub mod state;

/// Native `bevy_ui` rendition of the grid.
pub mod ui;

/// Serialisable card widget view models.
pub mod widgets;

use crate::engine::core::app_state::AppState;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use detail::handle_open_detail_events;
use settings::CatalogSettings;
use state::{
    CatalogState, CatalogUpdatedEvent, CategorySelectedEvent, OpenCardDetailEvent,
    apply_category_selection, publish_catalog_view, request_initial_render,
};

/// Catalog state, selection and publication. Loading lives in the app's
/// loading pipeline so this plugin runs headless.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CatalogSettings>()
            .init_resource::<CatalogState>()
            .init_resource::<WebRpcInterface>()
            .add_event::<CategorySelectedEvent>()
            .add_event::<CatalogUpdatedEvent>()
            .add_event::<OpenCardDetailEvent>()
            .add_systems(OnEnter(AppState::Running), request_initial_render)
            .add_systems(Update, apply_category_selection)
            .add_systems(
                Update,
                (publish_catalog_view, handle_open_detail_events)
                    .after(apply_category_selection)
                    .run_if(in_state(AppState::Running)),
            );
    }
}

/// Native grid panel with filter buttons and number-key shortcuts.
pub struct CatalogPanelPlugin;

impl Plugin for CatalogPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, ui::setup_catalog_panel).add_systems(
            Update,
            (
                ui::handle_filter_shortcuts,
                ui::handle_filter_buttons,
                ui::handle_apply_buttons,
                ui::rebuild_catalog_panel
                    .after(apply_category_selection)
                    .run_if(in_state(AppState::Running)),
            ),
        );
    }
}
