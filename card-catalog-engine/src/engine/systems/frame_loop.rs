use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Presentation views that run their own per-frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Hero,
    Showcase,
}

impl ViewKind {
    /// Convert string identifier to view kind for RPC compatibility.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hero" => Some(Self::Hero),
            "showcase" => Some(Self::Showcase),
            _ => None,
        }
    }

    pub fn to_string(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Showcase => "showcase",
        }
    }
}

/// Stop flag for a per-frame animation loop. Checked before every frame;
/// once stopped the loop never runs again.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self {
            running: true,
            frames: 0,
        }
    }
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Count a frame if the loop is still live.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.frames += 1;
        }
        self.running
    }

    /// Returns whether the loop was running before the call.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Tear down a presentation view: stop its loop and despawn its entities.
#[derive(Event, Debug, Clone, Copy)]
pub struct ViewTeardownEvent {
    pub view: ViewKind,
}
