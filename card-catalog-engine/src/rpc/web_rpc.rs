use crate::catalog::benefits::top_benefits;
use crate::catalog::format::format_annual_fee;
use crate::catalog::selection::select_visible_cards;
use crate::catalog::settings::CatalogSettings;
use crate::catalog::state::{CatalogState, CategorySelectedEvent, OpenCardDetailEvent};
use crate::catalog::widgets::build_catalog_view;
use crate::engine::systems::frame_loop::{ViewKind, ViewTeardownEvent};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use constants::catalog::MAX_DISPLAY_BENEFITS;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource buffering outgoing traffic to the host page until the end of the frame.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the postMessage bridge to the embedding page.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .init_resource::<CatalogState>()
            .init_resource::<CatalogSettings>()
            .add_event::<IncomingRpcMessage>()
            .add_event::<CategorySelectedEvent>()
            .add_event::<OpenCardDetailEvent>()
            .add_event::<ViewTeardownEvent>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    match window() {
        Some(window) => {
            if let Err(e) = window
                .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            {
                error!("Failed to register message listener: {:?}", e);
            }
        }
        None => error!("Window object not available"),
    }

    // JS owns the closure from here on.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Messages pushed by the wasm `message` listener, drained once per frame.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw JSON-RPC text received from the host page.
#[derive(Event, Debug, Clone)]
pub struct IncomingRpcMessage {
    pub content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Parsed and validated RPC call.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcCommand {
    SelectCategory { category: String },
    GetCatalog,
    GetCardDetails { name: String },
    OpenCardDetail { name: String },
    TeardownView { view: ViewKind },
}

#[derive(Deserialize)]
struct CategoryParams {
    category: String,
}

#[derive(Deserialize)]
struct NameParams {
    name: String,
}

#[derive(Deserialize)]
struct ViewParams {
    view: String,
}

fn parse_params<T: DeserializeOwned>(params: &serde_json::Value, hint: &str) -> Result<T, RpcError> {
    serde_json::from_value::<T>(params.clone()).map_err(|_| RpcError::invalid_params(hint))
}

impl RpcCommand {
    pub fn from_request(request: &RpcRequest) -> Result<Self, RpcError> {
        match request.method.as_str() {
            "select_category" => {
                let params: CategoryParams =
                    parse_params(&request.params, "Expected 'category' parameter")?;
                Ok(Self::SelectCategory {
                    category: params.category,
                })
            }
            "get_catalog" => Ok(Self::GetCatalog),
            "get_card_details" => {
                let params: NameParams = parse_params(&request.params, "Expected 'name' parameter")?;
                Ok(Self::GetCardDetails { name: params.name })
            }
            "open_card_detail" => {
                let params: NameParams = parse_params(&request.params, "Expected 'name' parameter")?;
                Ok(Self::OpenCardDetail { name: params.name })
            }
            "teardown_view" => {
                let params: ViewParams = parse_params(&request.params, "Expected 'view' parameter")?;
                let view = ViewKind::from_string(&params.view).ok_or_else(|| {
                    RpcError::invalid_params(&format!("Unknown view: {}", params.view))
                })?;
                Ok(Self::TeardownView { view })
            }
            other => Err(RpcError::method_not_found(other)),
        }
    }

    /// Compute the result payload against the catalog as it stands now.
    pub fn result(
        &self,
        state: &CatalogState,
        settings: &CatalogSettings,
    ) -> Result<serde_json::Value, RpcError> {
        match self {
            Self::SelectCategory { category } => {
                // Applied later this frame; preview the outcome for the reply.
                let count = select_visible_cards(state.all_cards(), category, settings).len();
                Ok(serde_json::json!({
                    "success": true,
                    "filter": category,
                    "count": count
                }))
            }
            Self::GetCatalog => serde_json::to_value(build_catalog_view(state, settings))
                .map_err(|e| RpcError::internal_error(&e.to_string())),
            Self::GetCardDetails { name } => {
                let card = state
                    .find_card(name)
                    .ok_or_else(|| RpcError::invalid_params(&format!("Unknown card: {}", name)))?;
                Ok(serde_json::json!({
                    "name": card.name,
                    "annual_fee": format_annual_fee(card.annual_fee_amount()),
                    "top_benefits": top_benefits(card.raw_benefits(), MAX_DISPLAY_BENEFITS)
                }))
            }
            Self::OpenCardDetail { name } => {
                let card = state
                    .find_card(name)
                    .ok_or_else(|| RpcError::invalid_params(&format!("Unknown card: {}", name)))?;
                Ok(serde_json::json!({
                    "success": true,
                    "url": card.detail_url()
                }))
            }
            Self::TeardownView { view } => Ok(serde_json::json!({
                "success": true,
                "view": view.to_string()
            })),
        }
    }
}

/// Event writers an RPC command may fire.
#[derive(SystemParam)]
pub struct RpcOutlets<'w> {
    categories: EventWriter<'w, CategorySelectedEvent>,
    details: EventWriter<'w, OpenCardDetailEvent>,
    teardowns: EventWriter<'w, ViewTeardownEvent>,
}

impl RpcOutlets<'_> {
    fn dispatch(&mut self, command: RpcCommand) {
        match command {
            RpcCommand::SelectCategory { category } => {
                self.categories.write(CategorySelectedEvent { category });
            }
            RpcCommand::OpenCardDetail { name } => {
                self.details.write(OpenCardDetailEvent { name });
            }
            RpcCommand::TeardownView { view } => {
                self.teardowns.write(ViewTeardownEvent { view });
            }
            RpcCommand::GetCatalog | RpcCommand::GetCardDetails { .. } => {}
        }
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    state: Res<CatalogState>,
    settings: Res<CatalogSettings>,
    mut outlets: RpcOutlets,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);
                if let Some(response) = handle_rpc_request(&request, &state, &settings, &mut outlets)
                {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Malformed RPC message: {}", parse_error);
            }
        }
    }
}

/// Run one request. Requests without an ID are notifications: their side
/// effects still happen but nothing is sent back.
fn handle_rpc_request(
    request: &RpcRequest,
    state: &CatalogState,
    settings: &CatalogSettings,
    outlets: &mut RpcOutlets,
) -> Option<RpcResponse> {
    let outcome = RpcCommand::from_request(request).and_then(|command| {
        let result = command.result(state, settings)?;
        outlets.dispatch(command);
        Ok(result)
    });

    if let Err(error) = &outcome {
        warn!("RPC {} failed: {}", request.method, error.message);
    }

    let id = request.id.clone()?;
    Some(match outcome {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
