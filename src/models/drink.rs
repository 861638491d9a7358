use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::Ingredient;

/// A recipe result normalized from the external API.
#[derive(Debug, Clone, PartialEq)]
pub struct Drink {
    pub id: i64,
    pub name: String,
    pub thumb: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
}

/// Response body of the search endpoint: `drinks` is null when nothing
/// matched.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub drinks: Option<Vec<RawDrink>>,
}

impl SearchResponse {
    pub fn into_drinks(self) -> Vec<Drink> {
        self.drinks
            .unwrap_or_default()
            .into_iter()
            .map(Drink::from)
            .collect()
    }
}

/// One record as served by the API. Every field is a string or null, and the
/// ingredient list is spread over numbered `strIngredient1`, `strIngredient2`,
/// ... columns.
#[derive(Debug, Deserialize)]
pub struct RawDrink {
    #[serde(rename = "idDrink")]
    id_drink: Option<String>,
    #[serde(rename = "strDrink")]
    name: Option<String>,
    #[serde(rename = "strDrinkThumb")]
    thumb: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl RawDrink {
    fn ingredient(&self, slot: usize) -> Option<&str> {
        self.rest
            .get(&format!("strIngredient{slot}"))
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Collect the numbered ingredient columns in ascending order, stopping at
    /// the first absent, null, or empty slot. Slots after a gap are never read.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..)
            .map_while(|slot| self.ingredient(slot))
            .map(Ingredient::new)
            .collect()
    }
}

impl From<RawDrink> for Drink {
    fn from(raw: RawDrink) -> Self {
        let ingredients = raw.ingredients();

        Self {
            // The API serves ids as decimal strings
            id: raw
                .id_drink
                .as_deref()
                .and_then(|id| id.parse().ok())
                .unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            thumb: raw.thumb.unwrap_or_default(),
            instructions: raw.instructions.unwrap_or_default(),
            ingredients,
        }
    }
}
