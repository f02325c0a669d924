use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::catalog::CatalogPlugin;
use crate::engine::assets::card_dataset::CardDataset;
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::dataset_loader::{DatasetLoader, load_dataset_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::hero::HeroAnimationPlugin;
use crate::engine::scene::showcase::CardShowcasePlugin;
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::catalog::CatalogPanelPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers CardDataset as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<CardDataset>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(CatalogPlugin)
        .add_plugins(HeroAnimationPlugin)
        .add_plugins(CardShowcasePlugin);

    // The host page renders the grid on wasm; natively we draw it ourselves.
    #[cfg(not(target_arch = "wasm32"))]
    app.add_plugins(CatalogPanelPlugin);

    app.init_resource::<LoadingProgress>()
        .init_resource::<DatasetLoader>()
        .add_systems(Startup, start_loading)
        .add_systems(
            Update,
            (load_dataset_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
