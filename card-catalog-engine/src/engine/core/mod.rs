//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, the loading to
//! running transition, and plugin initialisation for native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Application state machine and the transition out of loading.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
