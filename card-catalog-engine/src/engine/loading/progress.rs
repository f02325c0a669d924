use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    /// The dataset load finished, successfully or not.
    pub dataset_resolved: bool,
    pub dataset_failed: bool,
    pub card_count: usize,
}
