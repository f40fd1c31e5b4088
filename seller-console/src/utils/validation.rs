//! Input validation helpers
//!
//! Field limits and messages of the product registration form.

use shared::error::ErrorCode;

use crate::form::{FormError, FormResult, ProductForm};

// ── Limits ──────────────────────────────────────────────────────────

/// Product name, counted in characters (Hangul counts as one)
pub const MAX_PRODUCT_NAME_LEN: usize = 100;

/// Lowest accepted regular price in won
pub const MIN_REGULAR_PRICE: i64 = 100;

// ── Helpers ─────────────────────────────────────────────────────────

/// Validate that a required string has content after trimming.
pub fn validate_required(value: &str, field: &'static str, message: &str) -> FormResult<()> {
    if value.trim().is_empty() {
        return Err(FormError::field(field, ErrorCode::RequiredField, message));
    }
    Ok(())
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &'static str,
    max_len: usize,
    required_message: &str,
    too_long_message: &str,
) -> FormResult<()> {
    validate_required(value, field, required_message)?;
    if value.chars().count() > max_len {
        return Err(FormError::field(
            field,
            ErrorCode::ValueOutOfRange,
            too_long_message,
        ));
    }
    Ok(())
}

/// Validate that a number is at least `min`.
pub fn validate_min(value: i64, field: &'static str, min: i64, message: &str) -> FormResult<()> {
    if value < min {
        return Err(FormError::field(field, ErrorCode::ValueOutOfRange, message));
    }
    Ok(())
}

// ── Product fields ──────────────────────────────────────────────────

/// Field path and required message of each 상품정보제공고시 entry
fn notice_rule(key: &str) -> (&'static str, &'static str) {
    match key {
        "origin" => ("productNotice.origin", "제조국을 입력해 주세요."),
        "material" => ("productNotice.material", "소재를 입력해 주세요."),
        "color" => ("productNotice.color", "색상을 입력해 주세요."),
        "size" => ("productNotice.size", "치수를 입력해 주세요."),
        "manufacturer" => ("productNotice.manufacturer", "제조자를 입력해 주세요."),
        "washingMethod" => ("productNotice.washingMethod", "세탁 방법을 입력해 주세요."),
        "manufactureDate" => ("productNotice.manufactureDate", "제조년월을 입력해 주세요."),
        "asInfo" => ("productNotice.asInfo", "A/S안내 및 연락처를 입력해 주세요."),
        _ => ("productNotice.qualityAssurance", "품질 보증 기준을 입력해 주세요."),
    }
}

/// Product-level checks run before the option checks on submit, in form
/// order: category, name, prices, description, product notice.
pub fn validate_product_fields(form: &ProductForm) -> FormResult<()> {
    if form.category_id.is_none() {
        return Err(FormError::field(
            "categoryId",
            ErrorCode::RequiredField,
            "카테고리를 선택해 주세요",
        ));
    }
    validate_required_text(
        &form.name,
        "name",
        MAX_PRODUCT_NAME_LEN,
        "상품명을 입력해 주세요",
        "상품명은 최대 100자까지 입력 가능합니다",
    )?;
    validate_min(
        form.purchase_price,
        "purchasePrice",
        0,
        "매입가는 0원 이상이어야 합니다",
    )?;
    validate_min(
        form.regular_price,
        "regularPrice",
        MIN_REGULAR_PRICE,
        "판매가는 100원 이상이어야 합니다",
    )?;
    if form.is_discount {
        validate_min(
            form.discount_amount,
            "discountRate",
            0,
            "할인 금액은 0원 이상이어야 합니다",
        )?;
    }
    validate_required(&form.description, "description", "상세설명을 입력해 주세요.")?;
    for (key, value) in form.product_notice.entries() {
        let (field, message) = notice_rule(key);
        validate_required(value, field, message)?;
    }
    Ok(())
}
