use crate::catalog::benefits::BenefitRow;
use crate::catalog::settings::CatalogSettings;
use crate::catalog::state::{
    CatalogState, CatalogUpdatedEvent, CategorySelectedEvent, OpenCardDetailEvent,
};
use crate::catalog::widgets::{CardWidget, build_catalog_view};
use bevy::color::Srgba;
use bevy::prelude::*;
use bevy::ui::IsDefaultUiCamera;
use constants::catalog::{
    APPLY_LABEL, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, FEE_LABEL, FILTER_CATEGORIES,
};
use constants::hero::HERO_BAND_HEIGHT;
use constants::path::UI_FONT_PATH;

const PANEL_BACKGROUND: Color = Color::srgba(0.96, 0.97, 0.99, 0.94);
const CARD_BACKGROUND: Color = Color::WHITE;
const TEXT_PRIMARY: Color = Color::srgb(0.10, 0.11, 0.14);
const TEXT_MUTED: Color = Color::srgb(0.45, 0.47, 0.52);
const ROW_BACKGROUND: Color = Color::srgb(0.95, 0.96, 0.98);
const ROW_HIGHLIGHT: Color = Color::srgb(0.87, 0.91, 1.0);
const FILTER_IDLE: Color = Color::srgb(0.90, 0.91, 0.94);
const FILTER_ACTIVE: Color = Color::srgb(0.08, 0.16, 0.63);

#[derive(Component)]
pub struct CatalogPanelRoot;

#[derive(Component)]
pub struct FilterButton {
    pub category: String,
}

#[derive(Component)]
pub struct ApplyButton {
    pub name: String,
}

#[derive(Resource)]
pub struct CatalogFont(pub Handle<Font>);

pub fn setup_catalog_panel(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(CatalogFont(asset_server.load(UI_FONT_PATH)));
    commands.spawn((
        Camera2d,
        Camera {
            order: 2,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
    ));
}

/// Redraw the whole grid whenever the visible cards change.
pub fn rebuild_catalog_panel(
    mut commands: Commands,
    mut updates: EventReader<CatalogUpdatedEvent>,
    state: Res<CatalogState>,
    settings: Res<CatalogSettings>,
    font: Res<CatalogFont>,
    roots: Query<Entity, With<CatalogPanelRoot>>,
) {
    if updates.is_empty() {
        return;
    }
    updates.clear();

    for root in &roots {
        commands.entity(root).despawn();
    }

    let view = build_catalog_view(&state, &settings);
    let font = font.0.clone();

    commands
        .spawn((
            CatalogPanelRoot,
            Name::new("CatalogPanel"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(HERO_BAND_HEIGHT),
                right: Val::Px(0.0),
                bottom: Val::Px(0.0),
                width: Val::Percent(55.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(16.0)),
                row_gap: Val::Px(12.0),
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|panel| {
            spawn_filter_bar(panel, &font, &view.filter);

            panel.spawn((
                Text::new(format!("{} cards", view.count)),
                TextFont {
                    font: font.clone(),
                    font_size: 14.0,
                    ..default()
                },
                TextColor(TEXT_MUTED),
            ));

            panel
                .spawn(Node {
                    display: Display::Flex,
                    flex_direction: FlexDirection::Row,
                    flex_wrap: FlexWrap::Wrap,
                    column_gap: Val::Px(12.0),
                    row_gap: Val::Px(12.0),
                    ..default()
                })
                .with_children(|grid| {
                    for widget in &view.cards {
                        spawn_card_widget(grid, &font, widget);
                    }
                });
        });
}

fn spawn_filter_bar(panel: &mut ChildSpawnerCommands, font: &Handle<Font>, active: &str) {
    panel
        .spawn(Node {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(6.0),
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|bar| {
            for category in FILTER_CATEGORIES {
                let is_active = *category == active;
                bar.spawn((
                    FilterButton {
                        category: category.to_string(),
                    },
                    Button,
                    BackgroundColor(if is_active { FILTER_ACTIVE } else { FILTER_IDLE }),
                    BorderRadius::all(Val::Px(14.0)),
                    Node {
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                        ..default()
                    },
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new(*category),
                        TextFont {
                            font: font.clone(),
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(if is_active { Color::WHITE } else { TEXT_PRIMARY }),
                    ));
                });
            }
        });
}

fn spawn_card_widget(grid: &mut ChildSpawnerCommands, font: &Handle<Font>, widget: &CardWidget) {
    let primary = parse_hex_color(&widget.primary_color, DEFAULT_PRIMARY_COLOR);
    let secondary = parse_hex_color(&widget.secondary_color, DEFAULT_SECONDARY_COLOR);
    let text = |value: &str, size: f32, color: Color| {
        (
            Text::new(value),
            TextFont {
                font: font.clone(),
                font_size: size,
                ..default()
            },
            TextColor(color),
        )
    };

    grid.spawn((
        Name::new(widget.name.clone()),
        BackgroundColor(CARD_BACKGROUND),
        BorderRadius::all(Val::Px(12.0)),
        Node {
            width: Val::Px(240.0),
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            padding: UiRect::all(Val::Px(12.0)),
            row_gap: Val::Px(6.0),
            ..default()
        },
    ))
    .with_children(|card| {
        card.spawn((
            BackgroundColor(secondary),
            BorderRadius::all(Val::Px(8.0)),
            Node {
                height: Val::Px(56.0),
                padding: UiRect::all(Val::Px(8.0)),
                align_items: AlignItems::FlexEnd,
                ..default()
            },
        ))
        .with_children(|image| {
            image.spawn(text(&widget.tagline, 12.0, Color::WHITE));
        });

        card.spawn(text(&widget.name, 15.0, TEXT_PRIMARY));

        card.spawn(Node {
            display: Display::Flex,
            justify_content: JustifyContent::SpaceBetween,
            ..default()
        })
        .with_children(|fee| {
            fee.spawn(text(FEE_LABEL, 12.0, TEXT_MUTED));
            fee.spawn(text(&widget.annual_fee, 12.0, TEXT_PRIMARY));
        });

        for row in &widget.benefits {
            spawn_benefit_row(card, font, row);
        }

        card.spawn((
            ApplyButton {
                name: widget.name.clone(),
            },
            Button,
            BackgroundColor(primary),
            BorderRadius::all(Val::Px(8.0)),
            Node {
                padding: UiRect::axes(Val::Px(10.0), Val::Px(8.0)),
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|button| {
            button.spawn(text(APPLY_LABEL, 13.0, Color::WHITE));
        });
    });
}

fn spawn_benefit_row(card: &mut ChildSpawnerCommands, font: &Handle<Font>, row: &BenefitRow) {
    card.spawn((
        BackgroundColor(if row.highlighted { ROW_HIGHLIGHT } else { ROW_BACKGROUND }),
        BorderRadius::all(Val::Px(6.0)),
        Node {
            display: Display::Flex,
            justify_content: JustifyContent::SpaceBetween,
            padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
            column_gap: Val::Px(8.0),
            ..default()
        },
    ))
    .with_children(|line| {
        line.spawn((
            Text::new(row.category.clone()),
            TextFont {
                font: font.clone(),
                font_size: 11.0,
                ..default()
            },
            TextColor(TEXT_MUTED),
        ));
        line.spawn((
            Text::new(row.summary.clone()),
            TextFont {
                font: font.clone(),
                font_size: 12.0,
                ..default()
            },
            TextColor(TEXT_PRIMARY),
        ));
    });
}

pub fn handle_filter_buttons(
    buttons: Query<(&Interaction, &FilterButton), Changed<Interaction>>,
    mut selections: EventWriter<CategorySelectedEvent>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            selections.write(CategorySelectedEvent {
                category: button.category.clone(),
            });
        }
    }
}

pub fn handle_apply_buttons(
    buttons: Query<(&Interaction, &ApplyButton), Changed<Interaction>>,
    mut opens: EventWriter<OpenCardDetailEvent>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            opens.write(OpenCardDetailEvent {
                name: button.name.clone(),
            });
        }
    }
}

/// Number keys 1-9 select the filter buttons in display order.
pub fn handle_filter_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selections: EventWriter<CategorySelectedEvent>,
) {
    const DIGITS: [KeyCode; 9] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];

    for (key, category) in DIGITS.iter().zip(FILTER_CATEGORIES) {
        if keyboard.just_pressed(*key) {
            selections.write(CategorySelectedEvent {
                category: category.to_string(),
            });
        }
    }
}

pub fn parse_hex_color(hex: &str, fallback: &str) -> Color {
    Srgba::hex(hex)
        .or_else(|_| Srgba::hex(fallback))
        .map(Color::from)
        .unwrap_or(Color::BLACK)
}
