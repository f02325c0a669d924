use bevy::asset::LoadState;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    Pending,
    Loaded,
    Failed,
}

impl ImageOutcome {
    pub fn from_load_state(state: Option<LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => Self::Loaded,
            Some(LoadState::Failed(_)) => Self::Failed,
            _ => Self::Pending,
        }
    }

    /// Failures count as resolved so one broken image never stalls setup.
    pub fn is_resolved(self) -> bool {
        self != Self::Pending
    }
}

/// Fire-and-forget image requests whose completions are counted together.
#[derive(Debug, Clone, Default)]
pub struct ImageBatch {
    handles: Vec<Handle<Image>>,
}

impl ImageBatch {
    pub fn load(asset_server: &AssetServer, paths: &[&str]) -> Self {
        Self {
            handles: paths.iter().map(|path| asset_server.load(*path)).collect(),
        }
    }

    pub fn handle(&self, index: usize) -> Option<&Handle<Image>> {
        self.handles.get(index)
    }

    pub fn outcomes(&self, asset_server: &AssetServer) -> Vec<ImageOutcome> {
        self.handles
            .iter()
            .map(|handle| ImageOutcome::from_load_state(asset_server.get_load_state(handle)))
            .collect()
    }
}

pub fn resolved_count(outcomes: &[ImageOutcome]) -> usize {
    outcomes.iter().filter(|o| o.is_resolved()).count()
}

pub fn all_resolved(outcomes: &[ImageOutcome]) -> bool {
    resolved_count(outcomes) == outcomes.len()
}
