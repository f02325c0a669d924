use crate::engine::loading::progress::LoadingProgress;
use bevy::prelude::*;

/// Catalog lifecycle. `Running` is entered once the dataset load has resolved,
/// successfully or not.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.dataset_resolved {
        info!("→ Dataset resolved, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
