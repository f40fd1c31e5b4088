//! Form → `POST /seller/products` payload

use shared::models::{
    AddProductRequest, OptionGroupPayload, OptionPayload, VariantCombination, VariantPayload,
};

use super::model::ProductForm;

/// Map the form 1:1 onto the request body.
///
/// Only filled groups and items are sent; a missing item price is sent as 0.
/// `salePrice` is derived from the discount settings.
pub fn build_add_product_request(form: &ProductForm) -> AddProductRequest {
    let option_groups = form
        .option_groups
        .iter()
        .filter(|group| group.is_filled())
        .map(|group| OptionGroupPayload {
            name: group.name.trim().to_string(),
            options: group
                .filled_items()
                .map(|item| OptionPayload {
                    name: item.name.trim().to_string(),
                    price: item.surcharge(),
                })
                .collect(),
        })
        .collect();

    AddProductRequest {
        is_display: form.is_display,
        is_out_of_stock_forced: form.is_out_of_stock_forced,
        category_id: form.category_id,
        name: form.name.trim().to_string(),
        seller_product_code: form.seller_product_code.trim().to_string(),
        purchase_price: form.purchase_price,
        regular_price: form.regular_price,
        sale_price: form.sale_price(),
        is_discount: form.is_discount,
        description: form.description.clone(),
        product_notice: form.product_notice.trimmed(),
        option_groups,
        variants: form.option_combinations.iter().map(variant_payload).collect(),
    }
}

fn variant_payload(row: &VariantCombination) -> VariantPayload {
    VariantPayload {
        option_names: row.combination.clone(),
        sale_price: row.price,
        stock: row.stock,
        is_display: row.is_displayed,
        is_representative: row.is_representative,
    }
}
