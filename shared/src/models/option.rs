//! Option Model
//!
//! Option groups are the axes of product variation ("색상", "사이즈"), each
//! holding ordered option items ("빨강", "S"). Items may carry a surcharge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::util::{is_filled, new_row_id};

/// Option item (embedded in OptionGroup)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionItem {
    #[serde(default = "new_row_id")]
    pub id: String,
    /// Blank names are allowed while editing; they are skipped at generation
    #[serde(default)]
    pub name: String,
    /// Surcharge in won (null = 0)
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl OptionItem {
    /// Blank item appended by "새 옵션 항목 추가하기"
    pub fn empty() -> Self {
        Self {
            id: new_row_id(),
            name: String::new(),
            price: None,
        }
    }

    pub fn new(name: impl Into<String>, price: Option<Decimal>) -> Self {
        Self {
            id: new_row_id(),
            name: name.into(),
            price,
        }
    }

    pub fn is_filled(&self) -> bool {
        is_filled(&self.name)
    }

    /// Surcharge with a missing price treated as zero
    pub fn surcharge(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }
}

/// Option group entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroup {
    #[serde(default = "new_row_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<OptionItem>,
}

impl OptionGroup {
    /// Fresh group with one blank item ("새로운 옵션 추가")
    pub fn empty() -> Self {
        Self {
            id: new_row_id(),
            name: String::new(),
            items: vec![OptionItem::empty()],
        }
    }

    pub fn new(name: impl Into<String>, items: Vec<OptionItem>) -> Self {
        Self {
            id: new_row_id(),
            name: name.into(),
            items,
        }
    }

    /// Items whose name is non-empty after trimming, in input order
    pub fn filled_items(&self) -> impl Iterator<Item = &OptionItem> {
        self.items.iter().filter(|item| item.is_filled())
    }

    /// A group takes part in generation only with a name and a filled item
    pub fn is_filled(&self) -> bool {
        is_filled(&self.name) && self.filled_items().next().is_some()
    }
}
