//! Domain records and wire shapes for the dessert API.
//!
//! # Design
//! The wire format wraps every payload in a `meals` envelope and spreads
//! ingredients across twenty numbered slot pairs. The records here decode
//! that shape once and hand the rest of the crate plain values: summaries
//! straight off the wire, details with the slots already assembled into
//! ordered ingredient/measure pairs. These types mirror the mock-server's
//! schema but are defined independently; integration tests catch any drift
//! between the two crates. Fields are owned (`String`, `Vec`) so values can
//! cross the FFI boundary without lifetime concerns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of numbered ingredient/measure slot pairs in a detail record.
pub const INGREDIENT_SLOTS: usize = 20;

/// A single dessert in the category listing.
///
/// `id` mirrors the wire field `idMeal`, which the API may send as null or
/// omit entirely; absence stays distinguishable from an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DessertSummary {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub image_url: String,
}

/// One assembled ingredient/measure pair from a detail record.
///
/// The measure is the empty string when the wire slot was null, absent, or
/// blank; an ingredient is never empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientMeasure {
    pub ingredient: String,
    pub measure: String,
}

/// Full recipe entry for a selected dessert.
///
/// `instructions` is the free text the server delivered; the helper methods
/// below derive display forms from it on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DessertDetail {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub ingredients: Vec<IngredientMeasure>,
    pub instructions: String,
}

impl DessertDetail {
    /// One display line per ingredient pair, measure first, pairs in slot
    /// order. A pair without a measure is just the ingredient name.
    pub fn ingredients_joined(&self) -> String {
        self.ingredients
            .iter()
            .map(|pair| {
                if pair.measure.is_empty() {
                    pair.ingredient.clone()
                } else {
                    format!("{} {}", pair.measure, pair.ingredient)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Instructions with CRLF pairs and literal `\r\n` escape sequences
    /// normalized to plain line breaks. Some live records escape the
    /// control characters instead of sending them.
    pub fn instructions_with_breaks(&self) -> String {
        self.instructions.replace("\\r\\n", "\n").replace("\r\n", "\n")
    }

    /// The normalized instructions split into non-blank steps, in order.
    pub fn instruction_steps(&self) -> Vec<String> {
        self.instructions_with_breaks()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Sort summaries alphabetically by name, case-insensitively.
///
/// The fetch operations return server order untouched; presentation layers
/// opt into this ordering.
pub fn sort_by_name(desserts: &mut [DessertSummary]) {
    desserts.sort_by_cached_key(|dessert| dessert.name.to_lowercase());
}

/// Envelope of the list endpoint. A null or missing `meals` array fails
/// decoding; an empty array is a valid empty catalog.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    pub(crate) meals: Vec<DessertSummary>,
}

/// Envelope of the lookup endpoint. The API answers `{"meals": null}` for
/// an unknown id, so a null or missing array maps to the not-found outcome.
#[derive(Debug, Deserialize)]
pub(crate) struct LookupEnvelope {
    pub(crate) meals: Option<Vec<DetailRecord>>,
}

/// Wire shape of one lookup result before slot assembly.
///
/// The numbered ingredient/measure slots land in `slots`, together with the
/// extra fields this client ignores (category, area, tags, video links).
#[derive(Debug, Deserialize)]
pub(crate) struct DetailRecord {
    #[serde(rename = "idMeal")]
    pub(crate) id: String,
    #[serde(rename = "strMeal")]
    pub(crate) name: String,
    #[serde(rename = "strMealThumb")]
    pub(crate) image_url: String,
    #[serde(rename = "strInstructions")]
    pub(crate) instructions: String,
    #[serde(flatten)]
    pub(crate) slots: BTreeMap<String, Value>,
}

impl DetailRecord {
    pub(crate) fn into_detail(self) -> DessertDetail {
        let ingredients = collect_ingredients(&self.slots);
        DessertDetail {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            ingredients,
            instructions: self.instructions,
        }
    }
}

/// Assemble ingredient/measure pairs from the numbered wire slots.
///
/// A pair is included only when the ingredient slot holds a non-blank
/// string after trimming. The measure is paired positionally; a null,
/// missing, or non-string measure becomes the empty string, never a skip.
/// Slot order is preserved.
fn collect_ingredients(slots: &BTreeMap<String, Value>) -> Vec<IngredientMeasure> {
    let mut pairs = Vec::new();
    for slot in 1..=INGREDIENT_SLOTS {
        let Some(ingredient) = slots
            .get(&format!("strIngredient{slot}"))
            .and_then(Value::as_str)
        else {
            continue;
        };
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            continue;
        }
        let measure = slots
            .get(&format!("strMeasure{slot}"))
            .and_then(Value::as_str)
            .map_or(String::new(), |measure| measure.trim().to_string());
        pairs.push(IngredientMeasure {
            ingredient: ingredient.to_string(),
            measure,
        });
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: &str) -> DetailRecord {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn summary_decodes_wire_names() {
        let summary: DessertSummary = serde_json::from_str(
            r#"{"strMeal":"Bakewell tart","strMealThumb":"https://example.test/bakewell.jpg","idMeal":"52767"}"#,
        )
        .unwrap();
        assert_eq!(summary.id.as_deref(), Some("52767"));
        assert_eq!(summary.name, "Bakewell tart");
        assert_eq!(summary.image_url, "https://example.test/bakewell.jpg");
    }

    #[test]
    fn summary_id_absent_and_null_both_decode_to_none() {
        let missing: DessertSummary =
            serde_json::from_str(r#"{"strMeal":"Tart","strMealThumb":"t.jpg"}"#).unwrap();
        assert_eq!(missing.id, None);

        let null: DessertSummary =
            serde_json::from_str(r#"{"idMeal":null,"strMeal":"Tart","strMealThumb":"t.jpg"}"#)
                .unwrap();
        assert_eq!(null.id, None);
    }

    #[test]
    fn summary_empty_id_stays_distinguishable_from_absent() {
        let empty: DessertSummary =
            serde_json::from_str(r#"{"idMeal":"","strMeal":"Tart","strMealThumb":"t.jpg"}"#)
                .unwrap();
        assert_eq!(empty.id.as_deref(), Some(""));
    }

    #[test]
    fn ingredients_skip_blanks_and_pair_null_measures_with_empty() {
        let detail = record(
            r#"{
                "idMeal": "1",
                "strMeal": "Test",
                "strMealThumb": "t.jpg",
                "strInstructions": "Mix.",
                "strIngredient1": "Flour",
                "strMeasure1": "200g",
                "strIngredient2": "",
                "strMeasure2": "1 tsp",
                "strIngredient3": "Sugar",
                "strMeasure3": null
            }"#,
        )
        .into_detail();

        assert_eq!(
            detail.ingredients,
            vec![
                IngredientMeasure {
                    ingredient: "Flour".to_string(),
                    measure: "200g".to_string(),
                },
                IngredientMeasure {
                    ingredient: "Sugar".to_string(),
                    measure: String::new(),
                },
            ]
        );
    }

    #[test]
    fn ingredients_trim_whitespace_and_skip_whitespace_only_slots() {
        let detail = record(
            r#"{
                "idMeal": "1",
                "strMeal": "Test",
                "strMealThumb": "t.jpg",
                "strInstructions": "Mix.",
                "strIngredient1": "  Butter ",
                "strMeasure1": " 75g ",
                "strIngredient2": "   ",
                "strMeasure2": "50g"
            }"#,
        )
        .into_detail();

        assert_eq!(
            detail.ingredients,
            vec![IngredientMeasure {
                ingredient: "Butter".to_string(),
                measure: "75g".to_string(),
            }]
        );
    }

    #[test]
    fn ingredients_ignore_slots_beyond_twenty_and_null_slots() {
        let detail = record(
            r#"{
                "idMeal": "1",
                "strMeal": "Test",
                "strMealThumb": "t.jpg",
                "strInstructions": "Mix.",
                "strIngredient1": null,
                "strIngredient20": "Salt",
                "strIngredient21": "Pepper",
                "strMeasure21": "1 tsp"
            }"#,
        )
        .into_detail();

        assert_eq!(
            detail.ingredients,
            vec![IngredientMeasure {
                ingredient: "Salt".to_string(),
                measure: String::new(),
            }]
        );
    }

    #[test]
    fn ingredients_preserve_slot_order() {
        let detail = record(
            r#"{
                "idMeal": "1",
                "strMeal": "Test",
                "strMealThumb": "t.jpg",
                "strInstructions": "Mix.",
                "strIngredient2": "Second",
                "strMeasure2": "2",
                "strIngredient10": "Tenth",
                "strMeasure10": "10",
                "strIngredient1": "First",
                "strMeasure1": "1"
            }"#,
        )
        .into_detail();

        let names: Vec<&str> = detail
            .ingredients
            .iter()
            .map(|pair| pair.ingredient.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Second", "Tenth"]);
    }

    #[test]
    fn detail_tolerates_extra_wire_fields() {
        let detail = record(
            r#"{
                "idMeal": "1",
                "strMeal": "Test",
                "strMealThumb": "t.jpg",
                "strInstructions": "Mix.",
                "strCategory": "Dessert",
                "strArea": "British",
                "strTags": null,
                "strYoutube": "https://example.test/video",
                "strIngredient1": "Flour",
                "strMeasure1": "200g"
            }"#,
        )
        .into_detail();

        assert_eq!(detail.ingredients.len(), 1);
    }

    #[test]
    fn ingredients_joined_puts_measure_first() {
        let detail = DessertDetail {
            id: "1".to_string(),
            name: "Test".to_string(),
            image_url: "t.jpg".to_string(),
            ingredients: vec![
                IngredientMeasure {
                    ingredient: "Flour".to_string(),
                    measure: "200g".to_string(),
                },
                IngredientMeasure {
                    ingredient: "Salt".to_string(),
                    measure: String::new(),
                },
            ],
            instructions: String::new(),
        };
        assert_eq!(detail.ingredients_joined(), "200g Flour\nSalt");
    }

    #[test]
    fn instructions_with_breaks_normalizes_crlf_and_escapes() {
        let detail = DessertDetail {
            id: "1".to_string(),
            name: "Test".to_string(),
            image_url: "t.jpg".to_string(),
            ingredients: Vec::new(),
            instructions: "Preheat the oven.\r\nMix well.\\r\\nServe.".to_string(),
        };
        assert_eq!(
            detail.instructions_with_breaks(),
            "Preheat the oven.\nMix well.\nServe."
        );
    }

    #[test]
    fn instruction_steps_drop_blank_lines() {
        let detail = DessertDetail {
            id: "1".to_string(),
            name: "Test".to_string(),
            image_url: "t.jpg".to_string(),
            ingredients: Vec::new(),
            instructions: "Preheat the oven.\r\n\r\n  \r\nMix well.".to_string(),
        };
        assert_eq!(
            detail.instruction_steps(),
            vec!["Preheat the oven.".to_string(), "Mix well.".to_string()]
        );
    }

    #[test]
    fn sort_by_name_is_case_insensitive() {
        let mut desserts = vec![
            DessertSummary {
                id: Some("3".to_string()),
                name: "banana bread".to_string(),
                image_url: "b.jpg".to_string(),
            },
            DessertSummary {
                id: Some("1".to_string()),
                name: "Apple Crumble".to_string(),
                image_url: "a.jpg".to_string(),
            },
            DessertSummary {
                id: Some("2".to_string()),
                name: "Bakewell tart".to_string(),
                image_url: "t.jpg".to_string(),
            },
        ];
        sort_by_name(&mut desserts);
        let names: Vec<&str> = desserts.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Apple Crumble", "Bakewell tart", "banana bread"]);
    }
}
