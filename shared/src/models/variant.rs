//! Variant Combination Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A generated SKU row: one option item name per option group, in group order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantCombination {
    pub id: String,
    pub combination: Vec<String>,
    /// Sum of the contributing items' surcharges, editable after generation
    pub price: Decimal,
    #[serde(default)]
    pub stock: i64,
    #[serde(default = "default_true")]
    pub is_displayed: bool,
    #[serde(default)]
    pub is_representative: bool,
}

fn default_true() -> bool {
    true
}

impl VariantCombination {
    /// Joined label used in logs and table headers ("빨강 / S")
    pub fn label(&self) -> String {
        self.combination.join(" / ")
    }
}

/// Field edit on a combination row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum CombinationChange {
    Price(Decimal),
    Stock(i64),
    Displayed(bool),
}
