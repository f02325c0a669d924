//! JSON-RPC 2.0 bridge between the engine and the page embedding it.
//!
//! Messages travel over `window.postMessage`. The wasm `message` listener
//! pushes raw text into a shared queue that is drained once per frame.
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Engine (iframe / canvas)
//!        │                                            │
//!        ├─ Request (with ID) ──────────────────────> │
//!        │                                            ├─ RpcCommand::from_request
//!        │                                            ├─ RpcCommand::result
//!        │                                            ├─ RpcOutlets::dispatch (events)
//!        │ <───────────────────── Response (with ID) ─┤
//!        │ <────────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Methods
//!
//! - `select_category { category }` -> `{ success, filter, count }`
//! - `get_catalog` -> `{ filter, count, loaded, cards }`
//! - `get_card_details { name }` -> `{ name, annual_fee, top_benefits }`
//! - `open_card_detail { name }` -> `{ success, url }`, opens the detail page
//! - `teardown_view { view: "hero" | "showcase" }` -> `{ success, view }`
//!
//! ## Notifications
//!
//! - `catalog_loaded { count }` / `catalog_load_failed { message }`
//! - `catalog_rendered { filter, count, loaded, cards }`
//!
//! ## Error codes
//!
//! - `-32601`: Method not found
//! - `-32602`: Invalid params (missing field, unknown card or view)
//! - `-32603`: Internal error

/// Request parsing, dispatch and outgoing message transport.
pub mod web_rpc;
