//! Card recommendation showcase engine.
//!
//! A Bevy app that loads a card dataset, derives a filtered and ranked
//! catalog from it, and presents it alongside two decorative views: a 2D
//! hero band of floating cards and a lit 3D showcase. The embedding page
//! drives it over a JSON-RPC `postMessage` bridge.

pub mod catalog;
pub mod engine;
pub mod rpc;

pub use engine::core::app_setup::create_app;
