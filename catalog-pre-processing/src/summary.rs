/// Short benefit summaries derived from discount data or description text.
use constants::catalog::group_thousands;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%").expect("valid percent pattern"));
static WON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d[\d,]*)\s*원").expect("valid won pattern"));
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("valid bracket pattern"));

const MILEAGE_KEYWORD: &str = "마일리지";
const ACCRUAL_KEYWORD: &str = "적립";
const DISCOUNT_KIND: &str = "할인";
const FALLBACK_MAX_CHARS: usize = 12;
const FALLBACK_KEEP_CHARS: usize = 10;

/// `10.0` -> `10%`, `1.5` -> `1.5%`.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        format!("{}%", value)
    }
}

/// Amounts of ten thousand won or more read as `N만원`.
pub fn format_won(value: u64) -> String {
    if value >= 10_000 {
        format!("{}만원", value / 10_000)
    } else {
        format!("{}원", group_thousands(value))
    }
}

fn benefit_kind(description: &str) -> &'static str {
    if description.contains(ACCRUAL_KEYWORD) || description.contains(MILEAGE_KEYWORD) {
        ACCRUAL_KEYWORD
    } else {
        DISCOUNT_KIND
    }
}

/// Value from the structured `discount` object: `{ type, value }`.
pub fn discount_value(benefit: &Value) -> Option<String> {
    let discount = benefit.get("discount")?;
    let value = discount.get("value")?.as_f64().filter(|v| *v > 0.0)?;
    match discount.get("type")?.as_str()? {
        "percent" => Some(format_percent(value)),
        "won" => Some(format_won(value as u64)),
        _ => None,
    }
}

pub fn description_value(description: &str) -> Option<String> {
    if let Some(captures) = PERCENT.captures(description) {
        let value: f64 = captures[1].parse().ok()?;
        return Some(format_percent(value));
    }
    let captures = WON.captures(description)?;
    let value: u64 = captures[1].replace(',', "").parse().ok()?;
    Some(format_won(value))
}

/// First description line without `[...]` markers, shortened when long.
fn fallback_text(description: &str) -> Option<String> {
    let line = description.lines().next()?;
    let cleaned = BRACKETED.replace_all(line, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    if cleaned.chars().count() > FALLBACK_MAX_CHARS {
        let head: String = cleaned.chars().take(FALLBACK_KEEP_CHARS).collect();
        Some(format!("{}...", head))
    } else {
        Some(cleaned.to_string())
    }
}

/// Summary for a benefit record, or `None` when nothing usable is present.
pub fn summarize_benefit(benefit: &Value) -> Option<String> {
    let description = benefit
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();

    // Structured discounts always read as `할인`.
    if let Some(value) = discount_value(benefit) {
        return Some(format!("{} {}", value, DISCOUNT_KIND));
    }
    if let Some(value) = description_value(description) {
        return Some(format!("{} {}", value, benefit_kind(description)));
    }
    if description.contains(MILEAGE_KEYWORD) {
        return Some("마일리지 적립".to_string());
    }
    fallback_text(description)
}

/// Whether the record's summary needs filling.
pub fn summary_missing(benefit: &Value) -> bool {
    benefit
        .get("summary")
        .and_then(Value::as_str)
        .is_none_or(|s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structured_discount_wins() {
        let benefit = json!({
            "description": "커피 10% 할인",
            "discount": { "type": "percent", "value": 50.0 }
        });
        assert_eq!(summarize_benefit(&benefit).as_deref(), Some("50% 할인"));

        let benefit = json!({ "discount": { "type": "won", "value": 3000 } });
        assert_eq!(summarize_benefit(&benefit).as_deref(), Some("3,000원 할인"));

        let benefit = json!({ "discount": { "type": "won", "value": 20000 } });
        assert_eq!(summarize_benefit(&benefit).as_deref(), Some("2만원 할인"));
    }

    #[test]
    fn structured_discount_ignores_accrual_wording() {
        let benefit = json!({
            "description": "포인트 1.5% 적립",
            "discount": { "type": "percent", "value": 1.5 }
        });
        assert_eq!(summarize_benefit(&benefit).as_deref(), Some("1.5% 할인"));

        let benefit = json!({
            "description": "대한항공 마일리지 적립",
            "discount": { "type": "won", "value": 1000 }
        });
        assert_eq!(summarize_benefit(&benefit).as_deref(), Some("1,000원 할인"));
    }

    #[test]
    fn description_patterns() {
        let benefit = json!({ "description": "대중교통 이용 시 1.5% 적립" });
        assert_eq!(summarize_benefit(&benefit).as_deref(), Some("1.5% 적립"));

        let benefit = json!({ "description": "월 최대 5,000원 할인" });
        assert_eq!(summarize_benefit(&benefit).as_deref(), Some("5,000원 할인"));

        let benefit = json!({ "description": "스카이패스 마일리지 제공" });
        assert_eq!(summarize_benefit(&benefit).as_deref(), Some("마일리지 적립"));
    }

    #[test]
    fn fallback_strips_brackets_and_truncates() {
        let benefit = json!({ "description": "[필독] 공항 라운지\n두번째 줄" });
        assert_eq!(summarize_benefit(&benefit).as_deref(), Some("공항 라운지"));

        let benefit = json!({ "description": "프리미엄 호텔 객실 업그레이드 서비스" });
        assert_eq!(
            summarize_benefit(&benefit).as_deref(),
            Some("프리미엄 호텔 객실...")
        );

        assert_eq!(summarize_benefit(&json!({ "description": "[안내]" })), None);
        assert_eq!(summarize_benefit(&json!({})), None);
    }

    #[test]
    fn blank_summaries_are_missing() {
        assert!(summary_missing(&json!({ "summary": "  " })));
        assert!(summary_missing(&json!({ "summary": null })));
        assert!(summary_missing(&json!({})));
        assert!(!summary_missing(&json!({ "summary": "스타벅스 50%" })));
    }
}
