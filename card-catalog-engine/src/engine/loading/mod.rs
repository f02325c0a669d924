//! Asset loading for the card catalog.
//!
//! The dataset is requested once at startup and polled every frame until it
//! either lands in `Assets<CardDataset>` or the asset server reports a
//! failure. Either outcome resolves loading.

/// Card dataset request and resolution into `CatalogState`.
pub mod dataset_loader;

/// Image load bookkeeping shared by the hero and showcase views.
pub mod image_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
