//! Product registration form document

use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use shared::models::{OptionGroup, ProductNotice, VariantCombination};

/// In-memory state of the product registration form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductForm {
    pub name: String,
    pub category_id: Option<i64>,
    pub seller_product_code: String,
    pub is_display: bool,
    pub is_out_of_stock_forced: bool,
    /// 매입가 (won)
    pub purchase_price: i64,
    /// 판매가 (won)
    pub regular_price: i64,
    pub is_discount: bool,
    /// Amount taken off `regular_price` while `is_discount` is set
    #[serde(alias = "discountRate")]
    pub discount_amount: i64,
    /// 상세설명 (HTML)
    pub description: String,
    pub product_notice: ProductNotice,
    pub option_groups: Vec<OptionGroup>,
    /// Derived rows; rebuilt only by "옵션 목록으로 이동"
    pub option_combinations: Vec<VariantCombination>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category_id: None,
            seller_product_code: String::new(),
            is_display: true,
            is_out_of_stock_forced: false,
            purchase_price: 0,
            regular_price: 0,
            is_discount: false,
            discount_amount: 0,
            description: String::new(),
            product_notice: ProductNotice::default(),
            option_groups: vec![OptionGroup::empty()],
            option_combinations: Vec::new(),
        }
    }
}

impl ProductForm {
    /// Load a saved draft (JSON, camelCase keys). Missing keys take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let form = serde_json::from_str(&raw)?;
        Ok(form)
    }

    /// 할인 판매가: the discounted price, never below zero, or the regular
    /// price when no discount applies
    pub fn sale_price(&self) -> i64 {
        if self.is_discount {
            self.regular_price.saturating_sub(self.discount_amount).max(0)
        } else {
            self.regular_price
        }
    }
}

#[cfg(test)]
impl ProductForm {
    /// Form with every product-level field filled and one blank option group
    pub(crate) fn sample(name: &str, regular_price: i64) -> Self {
        Self {
            name: name.into(),
            category_id: Some(12),
            regular_price,
            description: "<p>상세설명</p>".into(),
            product_notice: ProductNotice {
                origin: "대한민국".into(),
                material: "린넨 100%".into(),
                color: "아이보리".into(),
                size: "FREE".into(),
                manufacturer: "오늘의공방".into(),
                washing_method: "손세탁".into(),
                manufacture_date: "2026-09".into(),
                as_info: "02-000-0000".into(),
                quality_assurance: "관련 법 및 소비자분쟁해결기준에 따름".into(),
            },
            ..Default::default()
        }
    }
}
