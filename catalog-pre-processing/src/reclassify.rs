/// Rebuilds a card's display list from its raw `benefits`: notice and bare
/// option entries are dropped, the category is re-detected from the text and
/// every summary reads `target value kind`.
use crate::summary::{description_value, discount_value};
use constants::catalog::{FALLBACK_CATEGORY_LABEL, NOTICE_BENEFIT_TITLE};
use serde_json::{Value, json};
use std::collections::HashSet;

const OPTION_ONLY_MARKER: &str = "선택 옵션에 따른";
const FREE_KEYWORD: &str = "무료";
const ACCRUAL_KIND: &str = "적립";
const DISCOUNT_KIND: &str = "할인";
const GENERIC_KIND: &str = "혜택";

/// Checked in order against the lowercased description and detail text.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("커피", &["스타벅스", "투썸", "이디야", "메가커피", "커피", "카페"]),
    (
        "스트리밍",
        &["넷플릭스", "유튜브", "디즈니", "티빙", "웨이브", "ott", "디지털콘텐츠"],
    ),
    ("영화", &["cgv", "롯데시네마", "메가박스", "영화"]),
    (
        "쇼핑",
        &[
            "쿠팡", "네이버", "ssg", "g마켓", "옥션", "11번가", "온라인쇼핑", "쇼핑몰", "마트",
            "이마트", "롯데마트", "편의점",
        ],
    ),
    ("배달", &["배달의민족", "배민", "쿠팡이츠", "요기요", "배달앱"]),
    ("주유", &["주유", "sk에너지", "gs칼텍스", "s-oil", "오일뱅크"]),
    (
        "통신",
        &["통신", "skt", "kt", "lg u+", "이동통신", "인터넷", "휴대폰"],
    ),
    (
        "교통",
        &["대중교통", "버스", "지하철", "택시", "ktx", "고속버스", "철도"],
    ),
    (
        "항공",
        &["마일리지", "스카이패스", "항공", "라운지", "아시아나", "대한항공"],
    ),
    ("해외", &["해외"]),
    ("교육", &["학원", "교육", "인터넷강의", "학습"]),
    ("의료", &["병원", "의료", "약국", "동물병원"]),
    ("생활", &["관리비", "아파트"]),
];

/// Per category: `(needle, target)` pairs tried in order, then the default.
const CATEGORY_TARGETS: &[(&str, &[(&str, &str)], &str)] = &[
    (
        "커피",
        &[
            ("스타벅스", "스타벅스"),
            ("투썸", "투썸"),
            ("이디야", "이디야"),
            ("메가커피", "메가커피"),
        ],
        "커피전문점",
    ),
    (
        "스트리밍",
        &[
            ("넷플릭스", "넷플릭스"),
            ("유튜브", "유튜브"),
            ("디즈니", "디즈니+"),
            ("티빙", "티빙"),
        ],
        "OTT",
    ),
    (
        "영화",
        &[
            ("cgv", "CGV"),
            ("롯데시네마", "롯데시네마"),
            ("메가박스", "메가박스"),
        ],
        "영화관",
    ),
    (
        "쇼핑",
        &[
            ("쿠팡", "쿠팡"),
            ("네이버", "네이버쇼핑"),
            ("ssg", "SSG.COM"),
            ("11번가", "11번가"),
            ("이마트", "이마트"),
            ("편의점", "편의점"),
        ],
        "온라인쇼핑",
    ),
    (
        "배달",
        &[
            ("배달의민족", "배달의민족"),
            ("배민", "배달의민족"),
            ("쿠팡이츠", "쿠팡이츠"),
            ("요기요", "요기요"),
        ],
        "배달앱",
    ),
    ("주유", &[], "주유"),
    ("통신", &[], "통신비"),
    ("교통", &[("택시", "택시"), ("ktx", "KTX")], "대중교통"),
    (
        "항공",
        &[("라운지", "공항라운지"), ("마일리지", "마일리지")],
        "항공",
    ),
    ("해외", &[], "해외결제"),
];

pub fn detect_category(text: &str) -> Option<&'static str> {
    let text = text.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
}

/// Merchant or service named in the description, else the category default.
pub fn detect_target(description: &str, category: &str) -> String {
    let text = description.to_lowercase();
    let Some((_, needles, default)) = CATEGORY_TARGETS.iter().find(|(c, ..)| *c == category)
    else {
        return category.to_string();
    };
    needles
        .iter()
        // Coupang Eats is a delivery app, not the Coupang store.
        .filter(|(needle, _)| !(*needle == "쿠팡" && text.contains("이츠")))
        .find(|(needle, _)| text.contains(needle))
        .map_or(default, |(_, target)| target)
        .to_string()
}

/// Formatted value and its kind. Wording with `적립` marks an accrual.
fn benefit_value(benefit: &Value, description: &str) -> (Option<String>, &'static str) {
    let kind = if description.contains(ACCRUAL_KIND) {
        ACCRUAL_KIND
    } else {
        DISCOUNT_KIND
    };
    if let Some(value) = discount_value(benefit).or_else(|| description_value(description)) {
        return (Some(value), kind);
    }
    if description.contains(FREE_KEYWORD) {
        return (None, FREE_KEYWORD);
    }
    (None, GENERIC_KIND)
}

fn has_discount_value(benefit: &Value) -> bool {
    match benefit.get("discount").and_then(|d| d.get("value")) {
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}

fn text_field<'a>(benefit: &'a Value, key: &str) -> &'a str {
    benefit.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Display entry `{ category, summary, is_select_option }` for one raw
/// benefit, or `None` for notices and option-only descriptions.
pub fn reclassify_benefit(benefit: &Value) -> Option<Value> {
    let description = text_field(benefit, "description");
    let title = text_field(benefit, "title");

    if title == NOTICE_BENEFIT_TITLE || description.contains(NOTICE_BENEFIT_TITLE) {
        return None;
    }
    if description.contains(OPTION_ONLY_MARKER) && !has_discount_value(benefit) {
        return None;
    }

    let text = format!("{} {}", description, text_field(benefit, "detail"));
    let category = detect_category(&text)
        .map(str::to_string)
        .unwrap_or_else(|| match text_field(benefit, "category") {
            "" => FALLBACK_CATEGORY_LABEL.to_string(),
            original => original.to_string(),
        });
    let target = detect_target(description, &category);

    let summary = match benefit_value(benefit, description) {
        (Some(value), kind) => format!("{} {} {}", target, value, kind),
        (None, FREE_KEYWORD) => format!("{} {}", target, FREE_KEYWORD),
        (None, _) => format!("{} {}", target, GENERIC_KIND),
    };

    Some(json!({
        "category": category,
        "summary": summary.trim(),
        "is_select_option": benefit
            .get("is_select_option")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    }))
}

/// Display list for a card's raw benefits, first occurrence of each summary kept.
pub fn reclassify_benefits(raw: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::new();
    raw.iter()
        .filter_map(reclassify_benefit)
        .filter(|entry| seen.insert(text_field(entry, "summary").to_string()))
        .collect()
}
