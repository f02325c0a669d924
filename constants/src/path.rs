/// Card dataset, relative to the asset root.
pub const CARD_DATASET_PATH: &str = "data/samsung_cards.json";

/// Hero band sprites. A missing file renders as a blank card.
pub const HERO_IMAGE_PATHS: [&str; 3] = ["hero/card1.png", "hero/card2.png", "hero/card3.png"];

/// Showcase card textures: taptap O (pink), SELECT ALL (white), monimo (blue).
pub const SHOWCASE_TEXTURE_PATHS: [&str; 3] = [
    "assets/card1.png",
    "assets/card2.png",
    "assets/card3_monimo.png",
];

/// Hangul-capable font for the native catalog panel.
pub const UI_FONT_PATH: &str = "fonts/NotoSansKR-Regular.otf";
