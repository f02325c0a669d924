/// Dataset enrichment pass: card metadata and missing benefit summaries.
use crate::metadata::card_metadata;
use crate::reclassify::reclassify_benefits;
use crate::summary::{summarize_benefit, summary_missing};
use constants::catalog::is_displayable_summary;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const DISPLAY_LISTS: [(&str, &str); 2] = [
    ("display_benefits", "displayBenefits"),
    ("summarized_benefits", "summarizedBenefits"),
];

/// Counts reported after an enrichment or check pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnrichReport {
    pub cards: usize,
    pub summaries_filled: usize,
    /// Cards whose display list has no renderable summary.
    pub empty_cards: Vec<String>,
}

/// Counts reported after rebuilding display lists from raw benefits.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReclassifyReport {
    pub cards: usize,
    pub kept: usize,
    /// Notices, bare option entries and duplicate summaries.
    pub dropped: usize,
}

/// Untyped dataset document; fields the engine does not know are kept.
pub struct CatalogEnricher {
    document: Value,
}

impl CatalogEnricher {
    pub fn from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let document: Value = serde_json::from_str(text)?;
        if cards_of(&document).is_none() {
            return Err("Expected an array of cards or an object with a 'cards' array".into());
        }
        Ok(Self { document })
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Assign colours and tagline to every card and fill blank summaries.
    pub fn enrich(&mut self) -> EnrichReport {
        let mut report = EnrichReport::default();
        let Some(cards) = cards_of_mut(&mut self.document) else {
            return report;
        };

        let pb = ProgressBar::new(cards.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} cards ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏"),
        );
        pb.set_message("Enriching cards");

        for card in cards.iter_mut() {
            let Some(object) = card.as_object_mut() else {
                pb.inc(1);
                continue;
            };

            let name = object
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let metadata = {
                let categories = raw_categories(object.get("benefits"));
                card_metadata(&name, &categories)
            };
            object.insert("primary_color".into(), metadata.primary_color.into());
            object.insert("secondary_color".into(), metadata.secondary_color.into());
            object.insert("tagline".into(), metadata.tagline.into());

            for (snake, camel) in DISPLAY_LISTS {
                let key = if object.contains_key(snake) { snake } else { camel };
                let Some(list) = object.get_mut(key).and_then(Value::as_array_mut) else {
                    continue;
                };
                for benefit in list.iter_mut() {
                    if !summary_missing(benefit) {
                        continue;
                    }
                    if let (Some(summary), Some(fields)) =
                        (summarize_benefit(benefit), benefit.as_object_mut())
                    {
                        fields.insert("summary".into(), summary.into());
                        report.summaries_filled += 1;
                    }
                }
            }

            report.cards += 1;
            pb.inc(1);
        }

        pb.finish_with_message("Cards enriched");
        report.empty_cards = empty_cards(&self.document);
        report
    }

    /// Replace each card's `display_benefits` with a list rebuilt from its raw
    /// `benefits`. Cards without raw benefits keep their current list.
    pub fn reclassify(&mut self) -> ReclassifyReport {
        let mut report = ReclassifyReport::default();
        let Some(cards) = cards_of_mut(&mut self.document) else {
            return report;
        };

        let pb = ProgressBar::new(cards.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} cards ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏"),
        );
        pb.set_message("Reclassifying benefits");

        for card in cards.iter_mut() {
            pb.inc(1);
            let Some(object) = card.as_object_mut() else {
                continue;
            };
            let Some(raw) = object.get("benefits").and_then(Value::as_array) else {
                continue;
            };

            let display = reclassify_benefits(raw);
            report.kept += display.len();
            report.dropped += raw.len() - display.len();
            report.cards += 1;

            // The engine reads either spelling; keep a single one.
            object.remove("displayBenefits");
            object.insert("display_benefits".into(), Value::Array(display));
        }

        pb.finish_with_message("Benefits reclassified");
        report
    }

    /// Report what the catalog would show, without changing anything.
    pub fn check(&self) -> EnrichReport {
        let cards = cards_of(&self.document).map(Vec::as_slice).unwrap_or_default();
        for card in cards {
            let name = card.get("name").and_then(Value::as_str).unwrap_or("?");
            let shown = display_list(card).map_or(0, |list| {
                list.iter().filter(|b| is_renderable(b)).count()
            });
            let raw = card
                .get("benefits")
                .and_then(Value::as_array)
                .map_or(0, Vec::len);
            println!("  {}: {} raw, {} displayable", name, raw, shown);
        }
        EnrichReport {
            cards: cards.len(),
            summaries_filled: 0,
            empty_cards: empty_cards(&self.document),
        }
    }

    pub fn write(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.document)?;
        fs::write(path, json)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        Ok(())
    }
}

fn cards_of(document: &Value) -> Option<&Vec<Value>> {
    match document {
        Value::Array(cards) => Some(cards),
        Value::Object(map) => map.get("cards").and_then(Value::as_array),
        _ => None,
    }
}

fn cards_of_mut(document: &mut Value) -> Option<&mut Vec<Value>> {
    match document {
        Value::Array(cards) => Some(cards),
        Value::Object(map) => map.get_mut("cards").and_then(Value::as_array_mut),
        _ => None,
    }
}

fn raw_categories(benefits: Option<&Value>) -> HashSet<&str> {
    benefits
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|b| b.get("category").and_then(Value::as_str))
                .filter(|c| !c.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// The list the catalog renders: display benefits, else summarised ones.
fn display_list(card: &Value) -> Option<&Vec<Value>> {
    DISPLAY_LISTS.iter().find_map(|(snake, camel)| {
        card.get(*snake)
            .or_else(|| card.get(*camel))
            .and_then(Value::as_array)
    })
}

fn is_renderable(benefit: &Value) -> bool {
    is_displayable_summary(
        benefit
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default(),
    )
}

fn empty_cards(document: &Value) -> Vec<String> {
    cards_of(document)
        .map(|cards| {
            cards
                .iter()
                .filter(|card| {
                    display_list(card).is_none_or(|list| !list.iter().any(is_renderable))
                })
                .map(|card| {
                    card.get("name")
                        .and_then(Value::as_str)
                        .unwrap_or("?")
                        .to_string()
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "source": "crawler",
        "cards": [
            {
                "name": "모니모카드",
                "benefits": [{ "category": "커피" }],
                "display_benefits": [
                    { "category": "커피", "summary": "", "description": "스타벅스 50% 할인" }
                ],
                "extra": 1
            },
            {
                "name": "무명 카드",
                "benefits": [{ "category": "주유" }],
                "summarizedBenefits": [{ "category": "주유", "summary": "혜택" }]
            }
        ]
    }"#;

    #[test]
    fn enrich_fills_metadata_and_summaries() {
        let mut enricher = CatalogEnricher::from_json(DATASET).expect("valid dataset");
        let report = enricher.enrich();

        assert_eq!(report.cards, 2);
        assert_eq!(report.summaries_filled, 1);
        assert_eq!(report.empty_cards, vec!["무명 카드".to_string()]);

        let doc = enricher.document();
        let first = &doc["cards"][0];
        assert_eq!(first["primary_color"], "#0096d6");
        assert_eq!(first["display_benefits"][0]["summary"], "50% 할인");
        assert_eq!(first["extra"], 1);
        assert_eq!(doc["source"], "crawler");

        let second = &doc["cards"][1];
        assert_eq!(second["tagline"], "주유가 즐거워지는 카드");
        // Placeholder summaries are not blank, so they are left alone.
        assert_eq!(second["summarizedBenefits"][0]["summary"], "혜택");
    }

    #[test]
    fn reclassify_rebuilds_display_lists_from_raw_benefits() {
        let mut enricher = CatalogEnricher::from_json(
            r#"{ "cards": [
                {
                    "name": "삼성카드 taptap O",
                    "benefits": [
                        { "title": "커피", "description": "스타벅스 50% 할인", "category": "생활" },
                        { "title": "유의사항", "description": "전월 실적 30만원 이상" },
                        { "description": "스타벅스 앱 결제 50% 할인" },
                        { "description": "", "category": "" }
                    ],
                    "displayBenefits": [{ "category": "커피", "summary": "old" }]
                },
                { "name": "No Raw", "display_benefits": [{ "category": "교통", "summary": "5% 할인" }] }
            ] }"#,
        )
        .expect("valid dataset");

        let report = enricher.reclassify();
        assert_eq!(report.cards, 1);
        assert_eq!(report.kept, 2);
        assert_eq!(report.dropped, 2);

        let first = &enricher.document()["cards"][0];
        assert!(first.get("displayBenefits").is_none());
        assert_eq!(first["display_benefits"].as_array().map(Vec::len), Some(2));
        assert_eq!(first["display_benefits"][0]["category"], "커피");
        assert_eq!(first["display_benefits"][0]["summary"], "스타벅스 50% 할인");
        assert_eq!(first["display_benefits"][1]["summary"], "혜택 혜택");

        let second = &enricher.document()["cards"][1];
        assert_eq!(second["display_benefits"][0]["summary"], "5% 할인");

        assert!(enricher.check().empty_cards.is_empty());
    }

    #[test]
    fn check_reports_without_mutating() {
        let enricher = CatalogEnricher::from_json(DATASET).expect("valid dataset");
        let before = enricher.document().clone();
        let report = enricher.check();
        assert_eq!(report.cards, 2);
        assert_eq!(report.empty_cards.len(), 2);
        assert_eq!(enricher.document(), &before);
    }

    #[test]
    fn bare_array_documents_are_accepted() {
        let mut enricher =
            CatalogEnricher::from_json(r#"[{ "name": "커피 카드" }]"#).expect("array dataset");
        let report = enricher.enrich();
        assert_eq!(report.cards, 1);
        assert_eq!(enricher.document()[0]["primary_color"], "#6d4c41");
    }

    #[test]
    fn rejects_documents_without_cards() {
        assert!(CatalogEnricher::from_json(r#"{ "items": [] }"#).is_err());
        assert!(CatalogEnricher::from_json("not json").is_err());
    }
}
