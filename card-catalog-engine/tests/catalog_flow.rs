use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_common_assets::json::JsonAssetPlugin;
use card_catalog_engine::catalog::CatalogPlugin;
use card_catalog_engine::catalog::settings::CatalogSettings;
use card_catalog_engine::catalog::state::{CatalogState, CategorySelectedEvent};
use card_catalog_engine::engine::assets::card_dataset::{Benefit, Card, CardDataset};
use card_catalog_engine::engine::core::app_state::{AppState, transition_to_running};
use card_catalog_engine::engine::loading::dataset_loader::{DatasetLoader, load_dataset_system};
use card_catalog_engine::engine::loading::progress::LoadingProgress;
use card_catalog_engine::engine::scene::hero::{HeroAnimation, teardown_hero};
use card_catalog_engine::rpc::web_rpc::{IncomingRpcMessage, WebRpcPlugin};
use std::time::Duration;

fn card(name: &str, categories: &[&str]) -> Card {
    Card {
        name: name.to_string(),
        display_benefits: Some(
            categories
                .iter()
                .enumerate()
                .map(|(i, category)| Benefit {
                    category: Some(category.to_string()),
                    summary: Some(format!("{} 혜택 {}", category, i)),
                    ..Default::default()
                })
                .collect(),
        ),
        ..Default::default()
    }
}

fn dataset() -> Vec<Card> {
    vec![
        card("Alpha", &["커피"]),
        card("Beta", &["커피", "커피", "쇼핑"]),
        card("모니모카드", &["교통"]),
        card("삼성카드 taptap O", &["커피", "교통"]),
    ]
}

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_state::<AppState>()
        .add_plugins(WebRpcPlugin)
        .add_plugins(CatalogPlugin);
    app
}

fn populate(app: &mut App, cards: Vec<Card>) {
    app.world_mut()
        .resource_scope(|world, mut state: Mut<CatalogState>| {
            let settings = world.resource::<CatalogSettings>();
            state.populate(cards, settings);
        });
}

fn running_app() -> App {
    let mut app = headless_app();
    populate(&mut app, dataset());
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Running);
    app.update();
    app
}

fn visible_names(app: &App) -> Vec<String> {
    app.world()
        .resource::<CatalogState>()
        .visible_cards()
        .iter()
        .map(|card| card.name.clone())
        .collect()
}

fn send_rpc(app: &mut App, message: &str) {
    app.world_mut().send_event(IncomingRpcMessage {
        content: message.to_string(),
    });
    // RPC dispatch and the catalog systems are unordered; give it a second frame.
    app.update();
    app.update();
}

#[test]
fn recommended_view_is_the_pinned_shortlist() {
    let app = running_app();
    assert_eq!(visible_names(&app), vec!["삼성카드 taptap O", "모니모카드"]);
}

#[test]
fn category_event_reorders_by_pin_then_matches() {
    let mut app = running_app();
    app.world_mut().send_event(CategorySelectedEvent {
        category: "커피".to_string(),
    });
    app.update();

    let state = app.world().resource::<CatalogState>();
    assert_eq!(state.current_filter(), "커피");
    assert_eq!(visible_names(&app), vec!["삼성카드 taptap O", "Beta", "Alpha"]);
}

#[test]
fn rpc_select_category_drives_the_catalog() {
    let mut app = running_app();
    send_rpc(
        &mut app,
        r#"{"jsonrpc":"2.0","method":"select_category","params":{"category":"쇼핑"},"id":1}"#,
    );
    assert_eq!(visible_names(&app), vec!["Beta"]);
}

#[test]
fn malformed_and_unknown_rpc_leave_state_alone() {
    let mut app = running_app();
    send_rpc(&mut app, "not json at all");
    send_rpc(&mut app, r#"{"jsonrpc":"2.0","method":"get_fps","params":{},"id":2}"#);
    send_rpc(
        &mut app,
        r#"{"jsonrpc":"2.0","method":"select_category","params":{},"id":3}"#,
    );

    let state = app.world().resource::<CatalogState>();
    assert_eq!(state.current_filter(), "추천");
    assert_eq!(visible_names(&app), vec!["삼성카드 taptap O", "모니모카드"]);
}

#[test]
fn filter_chosen_before_load_applies_on_populate() {
    let mut app = headless_app();
    app.world_mut().send_event(CategorySelectedEvent {
        category: "교통".to_string(),
    });
    app.update();
    assert!(visible_names(&app).is_empty());

    populate(&mut app, dataset());
    assert_eq!(visible_names(&app), vec!["삼성카드 taptap O", "모니모카드"]);
    assert_eq!(
        app.world().resource::<CatalogState>().current_filter(),
        "교통"
    );
}

#[test]
fn second_populate_is_ignored() {
    let mut app = running_app();
    populate(&mut app, vec![card("Gamma", &["커피"])]);
    assert_eq!(app.world().resource::<CatalogState>().all_cards().len(), 4);
}

#[test]
fn rpc_teardown_stops_the_hero_loop() {
    let mut app = running_app();
    app.insert_resource(HeroAnimation::default())
        .add_systems(Update, teardown_hero);

    send_rpc(
        &mut app,
        r#"{"jsonrpc":"2.0","method":"teardown_view","params":{"view":"hero"}}"#,
    );

    let hero = app.world().resource::<HeroAnimation>();
    assert!(!hero.frame_loop.is_running());
}

fn loading_app(assets: AssetPlugin) -> App {
    let mut app = headless_app();
    app.add_plugins(assets)
        .add_plugins(JsonAssetPlugin::<CardDataset>::new(&["json"]))
        .init_resource::<LoadingProgress>()
        .init_resource::<DatasetLoader>()
        .add_systems(
            Update,
            (load_dataset_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );
    app
}

fn current_state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

/// Asset IO runs on the task pools; keep updating until loading resolves.
fn update_until_running(app: &mut App) {
    for _ in 0..400 {
        app.update();
        if current_state(app) == AppState::Running {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("dataset loading never resolved");
}

fn asset_root(name: &str, dataset: Option<&str>) -> AssetPlugin {
    let root = std::env::temp_dir().join(format!("card-catalog-{}-{}", name, std::process::id()));
    let data = root.join("data");
    std::fs::create_dir_all(&data).expect("create asset dir");
    if let Some(contents) = dataset {
        std::fs::write(data.join("cards.json"), contents).expect("write dataset");
    }
    AssetPlugin {
        file_path: root.to_string_lossy().into_owned(),
        meta_check: AssetMetaCheck::Never,
        ..default()
    }
}

fn request_dataset(app: &mut App, path: &str) {
    let handle = app.world().resource::<AssetServer>().load(path.to_string());
    app.world_mut().resource_mut::<DatasetLoader>().handle = Some(handle);
}

fn assert_failed_load(app: &App) {
    let progress = app.world().resource::<LoadingProgress>();
    assert!(progress.dataset_resolved);
    assert!(progress.dataset_failed);
    assert_eq!(progress.card_count, 0);

    let state = app.world().resource::<CatalogState>();
    assert!(!state.is_loaded());
    assert!(state.visible_cards().is_empty());
}

#[test]
fn loaded_dataset_moves_app_to_running() {
    let mut app = loading_app(AssetPlugin::default());

    let handle = app
        .world_mut()
        .resource_mut::<Assets<CardDataset>>()
        .add(CardDataset { cards: dataset() });
    app.world_mut().resource_mut::<DatasetLoader>().handle = Some(handle);

    app.update();
    app.update();

    assert_eq!(current_state(&app), AppState::Running);
    let progress = app.world().resource::<LoadingProgress>();
    assert!(progress.dataset_resolved);
    assert!(!progress.dataset_failed);
    assert_eq!(progress.card_count, 4);
    assert_eq!(visible_names(&app).len(), 2);
}

#[test]
fn missing_dataset_file_still_reaches_running_with_empty_catalog() {
    let mut app = loading_app(asset_root("missing", None));
    request_dataset(&mut app, "data/cards.json");

    update_until_running(&mut app);
    assert_failed_load(&app);
}

#[test]
fn malformed_dataset_file_still_reaches_running_with_empty_catalog() {
    let mut app = loading_app(asset_root("malformed", Some(r#"{"cards": 3}"#)));
    request_dataset(&mut app, "data/cards.json");

    update_until_running(&mut app);
    assert_failed_load(&app);
}

#[test]
fn dataset_file_with_odd_fields_loads_every_card() {
    let mut app = loading_app(asset_root(
        "odd-fields",
        Some(
            r#"{"cards": [
                {"name": "삼성카드 taptap O", "annual_fee": {"domestic": "10,000원"}},
                {"name": "모니모카드", "display_benefits": [{"category": "교통", "is_select_option": null}]}
            ]}"#,
        ),
    ));
    request_dataset(&mut app, "data/cards.json");

    update_until_running(&mut app);
    let progress = app.world().resource::<LoadingProgress>();
    assert!(!progress.dataset_failed);
    assert_eq!(progress.card_count, 2);
    assert_eq!(visible_names(&app), vec!["삼성카드 taptap O", "모니모카드"]);
}
