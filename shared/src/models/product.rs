//! Product Model
//!
//! Request payload for `POST /seller/products`. Field names follow the
//! seller API (camelCase).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option value inside an option group payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionPayload {
    pub name: String,
    /// Surcharge in won
    pub price: Decimal,
}

/// Option group payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroupPayload {
    pub name: String,
    pub options: Vec<OptionPayload>,
}

/// Sellable variant payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantPayload {
    pub option_names: Vec<String>,
    pub sale_price: Decimal,
    pub stock: i64,
    pub is_display: bool,
    pub is_representative: bool,
}

/// 상품정보제공고시 (product information notice)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductNotice {
    /// 제조국
    pub origin: String,
    /// 소재
    pub material: String,
    pub color: String,
    /// 치수
    pub size: String,
    /// 제조자
    pub manufacturer: String,
    pub washing_method: String,
    /// 제조년월
    pub manufacture_date: String,
    /// A/S 안내 및 연락처
    pub as_info: String,
    pub quality_assurance: String,
}

impl ProductNotice {
    /// `(json key, value)` for every field, in form order
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("origin", self.origin.as_str()),
            ("material", self.material.as_str()),
            ("color", self.color.as_str()),
            ("size", self.size.as_str()),
            ("manufacturer", self.manufacturer.as_str()),
            ("washingMethod", self.washing_method.as_str()),
            ("manufactureDate", self.manufacture_date.as_str()),
            ("asInfo", self.as_info.as_str()),
            ("qualityAssurance", self.quality_assurance.as_str()),
        ]
    }

    /// Copy with every value trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            origin: self.origin.trim().to_string(),
            material: self.material.trim().to_string(),
            color: self.color.trim().to_string(),
            size: self.size.trim().to_string(),
            manufacturer: self.manufacturer.trim().to_string(),
            washing_method: self.washing_method.trim().to_string(),
            manufacture_date: self.manufacture_date.trim().to_string(),
            as_info: self.as_info.trim().to_string(),
            quality_assurance: self.quality_assurance.trim().to_string(),
        }
    }
}

/// Create product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    /// 진열 여부
    pub is_display: bool,
    /// 강제 품절 처리
    pub is_out_of_stock_forced: bool,
    pub category_id: Option<i64>,
    pub name: String,
    /// 판매자 상품코드
    pub seller_product_code: String,
    /// 매입가
    pub purchase_price: i64,
    /// 판매가 (할인 전)
    pub regular_price: i64,
    /// 할인 판매가 (최종가)
    pub sale_price: i64,
    pub is_discount: bool,
    /// 상품 상세 (HTML)
    pub description: String,
    pub product_notice: ProductNotice,
    pub option_groups: Vec<OptionGroupPayload>,
    pub variants: Vec<VariantPayload>,
}

impl AddProductRequest {
    /// The variant flagged as representative, if any
    pub fn representative(&self) -> Option<&VariantPayload> {
        self.variants.iter().find(|v| v.is_representative)
    }
}
