use crate::catalog::settings::CatalogSettings;
use crate::catalog::state::CatalogState;
use crate::engine::assets::card_dataset::CardDataset;
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::CARD_DATASET_PATH;

#[derive(Resource, Default)]
pub struct DatasetLoader {
    pub handle: Option<Handle<CardDataset>>,
}

// Kick off the single dataset load
pub fn start_loading(mut dataset_loader: ResMut<DatasetLoader>, asset_server: Res<AssetServer>) {
    info!("Loading card dataset from: {}", CARD_DATASET_PATH);
    dataset_loader.handle = Some(asset_server.load(CARD_DATASET_PATH));
}

/// Resolve the dataset load into the catalog. A failed load leaves the catalog
/// empty and is reported, never propagated.
pub fn load_dataset_system(
    mut loading_progress: ResMut<LoadingProgress>,
    dataset_loader: Res<DatasetLoader>,
    asset_server: Res<AssetServer>,
    datasets: Res<Assets<CardDataset>>,
    settings: Res<CatalogSettings>,
    mut catalog: ResMut<CatalogState>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if loading_progress.dataset_resolved {
        return;
    }

    let Some(ref handle) = dataset_loader.handle else {
        return;
    };

    if let Some(dataset) = datasets.get(handle) {
        catalog.populate(dataset.cards.clone(), &settings);
        info!("✓ {} cards loaded", dataset.len());
        rpc_interface.send_notification(
            "catalog_loaded",
            serde_json::json!({ "count": dataset.len() }),
        );
        loading_progress.card_count = dataset.len();
        loading_progress.dataset_resolved = true;
        return;
    }

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
        error!("Card dataset load failed: {}", err);
        rpc_interface.send_notification(
            "catalog_load_failed",
            serde_json::json!({ "message": err.to_string() }),
        );
        loading_progress.dataset_failed = true;
        loading_progress.dataset_resolved = true;
    }
}
