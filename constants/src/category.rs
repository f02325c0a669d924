use crate::catalog::FALLBACK_CATEGORY_LABEL;

pub struct CategoryInfo {
    pub label: &'static str,
    pub icon: &'static str,
}

/// Icon keys the host page maps to its SVG set.
pub const CATEGORY_MAP: &[CategoryInfo] = &[
    CategoryInfo {
        label: "커피",
        icon: "coffee",
    },
    CategoryInfo {
        label: "교통",
        icon: "transport",
    },
    CategoryInfo {
        label: "쇼핑",
        icon: "shopping",
    },
    CategoryInfo {
        label: "통신",
        icon: "telecom",
    },
    CategoryInfo {
        label: "주유",
        icon: "fuel",
    },
    CategoryInfo {
        label: "스트리밍",
        icon: "streaming",
    },
    CategoryInfo {
        label: "항공",
        icon: "airline",
    },
    CategoryInfo {
        label: "영화",
        icon: "movie",
    },
];

pub const FALLBACK_ICON: &str = "check";

pub fn get_category_icon(label: &str) -> &'static str {
    CATEGORY_MAP
        .iter()
        .find(|c| c.label == label)
        .map_or(FALLBACK_ICON, |c| c.icon)
}

/// Label used when a benefit has no category of its own.
pub fn display_category(category: Option<&str>) -> &str {
    match category {
        Some(label) if !label.is_empty() => label,
        _ => FALLBACK_CATEGORY_LABEL,
    }
}
