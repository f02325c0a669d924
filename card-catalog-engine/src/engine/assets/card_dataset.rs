use crate::engine::assets::lenient;
use bevy::prelude::*;
use constants::catalog::{DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, DEFAULT_TAGLINE};
use serde::{Deserialize, Serialize};

/// Discount attached to a raw benefit, e.g. `{ "type": "percent", "value": 10 }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(rename = "type", default, deserialize_with = "lenient::or_default")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub value: Option<f64>,
}

/// One perk entry attached to a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub summary: Option<String>,
    #[serde(
        default,
        alias = "isSelectOption",
        deserialize_with = "lenient::or_default"
    )]
    pub is_select_option: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: Option<String>,
    /// Free-form value; upstream data mixes numbers and strings here.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub discount: Option<Discount>,
}

impl Benefit {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualFee {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub domestic: Option<u64>,
}

/// One promotional credit-card record. Every field except `name` is optional on
/// the wire; accessors apply the display defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, alias = "annualFee", deserialize_with = "lenient::or_default")]
    pub annual_fee: Option<AnnualFee>,
    #[serde(default, alias = "displayBenefits", deserialize_with = "lenient::list")]
    pub display_benefits: Option<Vec<Benefit>>,
    #[serde(default, alias = "summarizedBenefits", deserialize_with = "lenient::list")]
    pub summarized_benefits: Option<Vec<Benefit>>,
    /// Raw, unsummarised benefit list.
    #[serde(default, deserialize_with = "lenient::list")]
    pub benefits: Option<Vec<Benefit>>,
    #[serde(default, alias = "primaryColor", deserialize_with = "lenient::or_default")]
    pub primary_color: Option<String>,
    #[serde(default, alias = "secondaryColor", deserialize_with = "lenient::or_default")]
    pub secondary_color: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub tagline: Option<String>,
    #[serde(default, alias = "imageUrl", deserialize_with = "lenient::or_default")]
    pub image_url: Option<String>,
    #[serde(default, alias = "detailUrl", deserialize_with = "lenient::or_default")]
    pub detail_url: Option<String>,
}

impl Card {
    /// Benefits used for filtering and display: the curated display list if
    /// present, else the summarised list.
    pub fn benefits(&self) -> &[Benefit] {
        self.display_benefits
            .as_deref()
            .or(self.summarized_benefits.as_deref())
            .unwrap_or(&[])
    }

    pub fn raw_benefits(&self) -> &[Benefit] {
        self.benefits.as_deref().unwrap_or(&[])
    }

    pub fn has_benefit_in(&self, category: &str) -> bool {
        self.benefits().iter().any(|b| b.has_category(category))
    }

    pub fn matching_benefit_count(&self, category: &str) -> usize {
        self.benefits()
            .iter()
            .filter(|b| b.has_category(category))
            .count()
    }

    /// Domestic annual fee; zero is treated as free.
    pub fn annual_fee_amount(&self) -> Option<u64> {
        self.annual_fee
            .as_ref()
            .and_then(|fee| fee.domestic)
            .filter(|amount| *amount > 0)
    }

    pub fn primary_color(&self) -> &str {
        non_empty(self.primary_color.as_deref()).unwrap_or(DEFAULT_PRIMARY_COLOR)
    }

    pub fn secondary_color(&self) -> &str {
        non_empty(self.secondary_color.as_deref()).unwrap_or(DEFAULT_SECONDARY_COLOR)
    }

    pub fn tagline(&self) -> &str {
        non_empty(self.tagline.as_deref()).unwrap_or(DEFAULT_TAGLINE)
    }

    pub fn image_url(&self) -> &str {
        self.image_url.as_deref().unwrap_or("")
    }

    pub fn detail_url(&self) -> &str {
        self.detail_url.as_deref().unwrap_or("")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Accepted document shapes: a bare array of cards or `{ "cards": [...] }`.
/// Records are decoded one by one so a single bad entry cannot sink the rest.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum DatasetDocument {
    List(Vec<serde_json::Value>),
    Wrapped { cards: Vec<serde_json::Value> },
}

/// Card dataset as a Bevy asset, loaded from JSON.
#[derive(Asset, TypePath, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "DatasetDocument")]
pub struct CardDataset {
    pub cards: Vec<Card>,
}

impl From<DatasetDocument> for CardDataset {
    fn from(document: DatasetDocument) -> Self {
        let (DatasetDocument::List(records) | DatasetDocument::Wrapped { cards: records }) =
            document;
        let total = records.len();
        let cards: Vec<Card> = records
            .into_iter()
            .filter_map(|record| serde_json::from_value(record).ok())
            .collect();
        if cards.len() < total {
            warn!("Skipped {} malformed card records", total - cards.len());
        }
        Self { cards }
    }
}

impl CardDataset {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_wrapped_and_bare_documents() {
        let wrapped = CardDataset::from_json_slice(br#"{"cards":[{"name":"A"}]}"#).unwrap();
        let bare = CardDataset::from_json_slice(br#"[{"name":"A"},{"name":"B"}]"#).unwrap();
        assert_eq!(wrapped.len(), 1);
        assert_eq!(bare.len(), 2);
    }

    #[test]
    fn missing_fields_fall_back_to_display_defaults() {
        let dataset = CardDataset::from_json_slice(br#"[{"name":"Plain"}]"#).unwrap();
        let card = &dataset.cards[0];
        assert_eq!(card.primary_color(), DEFAULT_PRIMARY_COLOR);
        assert_eq!(card.secondary_color(), DEFAULT_SECONDARY_COLOR);
        assert_eq!(card.tagline(), DEFAULT_TAGLINE);
        assert_eq!(card.annual_fee_amount(), None);
        assert!(card.benefits().is_empty());
        assert_eq!(card.detail_url(), "");
    }

    #[test]
    fn display_benefits_take_precedence_over_summarised() {
        let json = r#"[{
            "name": "A",
            "display_benefits": [{"category": "커피", "summary": "10%"}],
            "summarized_benefits": [{"category": "교통", "summary": "5%"}, {"category": "교통", "summary": "7%"}]
        }]"#.as_bytes();
        let dataset = CardDataset::from_json_slice(json).unwrap();
        let card = &dataset.cards[0];
        assert_eq!(card.benefits().len(), 1);
        assert!(card.has_benefit_in("커피"));
        assert!(!card.has_benefit_in("교통"));
    }

    #[test]
    fn zero_and_null_fees_are_free() {
        let json = br#"[
            {"name": "Zero", "annual_fee": {"domestic": 0}},
            {"name": "Null", "annual_fee": {"domestic": null}},
            {"name": "Paid", "annualFee": {"domestic": 15000}}
        ]"#;
        let dataset = CardDataset::from_json_slice(json).unwrap();
        let fees: Vec<_> = dataset.cards.iter().map(Card::annual_fee_amount).collect();
        assert_eq!(fees, vec![None, None, Some(15000)]);
    }

    #[test]
    fn mixed_benefit_values_and_unknown_fields_load() {
        let json = r#"{"crawled_at": "2025-01-01", "cards": [{
            "name": "A",
            "benefits": [
                {"title": "할인", "value": 10, "discount": {"type": "percent", "value": 10}},
                {"title": "적립", "value": "1.5%", "is_select_option": true}
            ]
        }]}"#.as_bytes();
        let dataset = CardDataset::from_json_slice(json).unwrap();
        let raw = dataset.cards[0].raw_benefits();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].discount.as_ref().and_then(|d| d.value), Some(10.0));
        assert!(raw[1].is_select_option);
    }

    #[test]
    fn wrongly_typed_optional_fields_fall_back_per_field() {
        let json = r#"{"cards": [
            {"name": "Good", "annual_fee": {"domestic": 15000},
             "display_benefits": [{"category": "커피", "summary": "스타벅스 50%"}]},
            {"name": "OddFee", "annual_fee": {"domestic": "15,000원"}},
            {"name": "NullOption", "benefits": [{"title": "적립", "is_select_option": null}]},
            {"name": "TextDiscount", "benefits": [
                {"discount": {"type": "percent", "value": "10%"}},
                {"discount": "10%"}
            ]},
            {"name": "BadLists", "display_benefits": "none", "summarized_benefits": [3, {"summary": "5% 할인"}],
             "primary_color": 7, "tagline": null, "annual_fee": "free"}
        ]}"#.as_bytes();
        let dataset = CardDataset::from_json_slice(json).unwrap();
        let names: Vec<_> = dataset.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Good", "OddFee", "NullOption", "TextDiscount", "BadLists"]);

        assert_eq!(dataset.cards[0].annual_fee_amount(), Some(15000));
        assert_eq!(dataset.cards[1].annual_fee_amount(), Some(15000));
        assert!(!dataset.cards[2].raw_benefits()[0].is_select_option);

        let discounts = dataset.cards[3].raw_benefits();
        assert_eq!(discounts[0].discount.as_ref().and_then(|d| d.value), Some(10.0));
        assert_eq!(discounts[1].discount, None);

        let bad = &dataset.cards[4];
        assert_eq!(bad.display_benefits, None);
        assert_eq!(bad.benefits().len(), 1);
        assert_eq!(bad.benefits()[0].summary(), "5% 할인");
        assert_eq!(bad.primary_color(), DEFAULT_PRIMARY_COLOR);
        assert_eq!(bad.tagline(), DEFAULT_TAGLINE);
        assert_eq!(bad.annual_fee_amount(), None);
    }

    #[test]
    fn non_object_records_are_skipped() {
        let dataset = CardDataset::from_json_slice(br#"[{"name": "A"}, "oops", 3, {"name": "B"}]"#)
            .unwrap();
        let names: Vec<_> = dataset.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(CardDataset::from_json_slice(b"{\"cards\": 3}").is_err());
        assert!(CardDataset::from_json_slice(b"not json").is_err());
    }
}
