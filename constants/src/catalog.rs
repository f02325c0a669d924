/// Sentinel filter label selecting the pinned shortlist instead of a benefit category.
pub const RECOMMENDED_FILTER: &str = "추천";

/// Cards always surfaced first, in this order.
pub const PRIORITY_CARD_NAMES: &[&str] = &["삼성카드 taptap O", "삼성 iD SELECT ALL 카드", "모니모카드"];

/// Maximum number of cards shown for a concrete category filter.
pub const CATEGORY_RESULT_CAP: usize = 20;

/// Maximum number of benefit rows on a single card widget.
pub const MAX_DISPLAY_BENEFITS: usize = 4;

/// Summary text the upstream summariser emits when it has nothing to say.
pub const PLACEHOLDER_SUMMARY: &str = "혜택";

/// Doubled placeholder produced by a summariser defect; any summary containing it is dropped.
pub const DOUBLED_PLACEHOLDER_SUMMARY: &str = "혜택 혜택";

/// Category label shown for benefits that carry none.
pub const FALLBACK_CATEGORY_LABEL: &str = "혜택";

/// Raw benefit titles excluded from the top-benefit computation.
pub const NOTICE_BENEFIT_TITLE: &str = "유의사항";
pub const SELECT_BENEFIT_TITLE: &str = "선택형";

pub const FEE_CURRENCY_SUFFIX: &str = "원";
pub const FREE_FEE_LABEL: &str = "무료";
pub const FEE_LABEL: &str = "연회비";
pub const APPLY_LABEL: &str = "발급하기";

pub const DEFAULT_PRIMARY_COLOR: &str = "#1428a0";
pub const DEFAULT_SECONDARY_COLOR: &str = "#2d4de0";
pub const DEFAULT_TAGLINE: &str = "일상에 혜택을 더하다";

/// Filter buttons in display order. Native builds bind them to the number keys.
pub const FILTER_CATEGORIES: &[&str] = &[
    RECOMMENDED_FILTER,
    "커피",
    "교통",
    "쇼핑",
    "통신",
    "주유",
    "스트리밍",
    "항공",
    "영화",
];

/// Summaries the upstream summariser got wrong are hidden: blank text, the
/// bare placeholder, and anything containing the doubled placeholder.
pub fn is_displayable_summary(summary: &str) -> bool {
    !(summary.trim().is_empty()
        || summary == PLACEHOLDER_SUMMARY
        || summary.contains(DOUBLED_PLACEHOLDER_SUMMARY))
}

/// Insert `,` between every group of three digits.
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
