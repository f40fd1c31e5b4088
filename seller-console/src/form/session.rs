//! Registration session - user actions on the product form
//!
//! Each action is one atomic [`FormStore::update`]: it either commits and
//! notifies subscribers, or fails with a message for the seller and leaves
//! the form untouched.

use std::convert::Infallible;
use std::sync::Arc;

use shared::models::{AddProductRequest, CombinationChange};

use super::combination_table;
use super::error::{FormError, FormResult};
use super::model::ProductForm;
use super::option_editor::{self, ItemChange};
use super::payload::build_add_product_request;
use super::store::{FormField, FormStore};
use crate::confirm::{ConfirmRequest, ConfirmService};
use crate::options::{
    self, validate_combinations_against_groups, validate_filled_group_names,
    validate_representative,
};
use crate::utils::validation::validate_product_fields;

pub struct RegistrationSession {
    store: FormStore,
    confirm: Arc<dyn ConfirmService>,
}

impl RegistrationSession {
    pub fn new(store: FormStore, confirm: Arc<dyn ConfirmService>) -> Self {
        Self { store, confirm }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// Write that cannot fail
    fn apply<R>(&self, field: FormField, f: impl FnOnce(&mut ProductForm) -> R) -> R {
        match self
            .store
            .update::<_, Infallible>(field, |form| Ok(f(form)))
        {
            Ok(out) => out,
            Err(never) => match never {},
        }
    }

    // ========== Option groups ==========

    pub fn add_option_group(&self) -> String {
        self.apply(FormField::OptionGroups, |form| {
            option_editor::add_group(&mut form.option_groups)
        })
    }

    pub fn remove_option_group(&self, group_id: &str) -> FormResult<()> {
        self.store.update(FormField::OptionGroups, |form| {
            option_editor::remove_group(&mut form.option_groups, group_id).map(|_| ())
        })
    }

    pub fn rename_option_group(&self, group_id: &str, name: &str) -> FormResult<()> {
        self.store.update(FormField::OptionGroups, |form| {
            option_editor::rename_group(&mut form.option_groups, group_id, name)
        })
    }

    pub fn add_option_item(&self, group_id: &str) -> FormResult<String> {
        self.store.update(FormField::OptionGroups, |form| {
            option_editor::add_item(&mut form.option_groups, group_id)
        })
    }

    pub fn remove_option_item(&self, group_id: &str, item_id: &str) -> FormResult<()> {
        self.store.update(FormField::OptionGroups, |form| {
            option_editor::remove_item(&mut form.option_groups, group_id, item_id).map(|_| ())
        })
    }

    pub fn update_option_item(&self, group_id: &str, item_id: &str, change: ItemChange) -> FormResult<()> {
        self.store.update(FormField::OptionGroups, |form| {
            option_editor::update_item(&mut form.option_groups, group_id, item_id, change)
        })
    }

    // ========== Combinations ==========

    /// "옵션 목록으로 이동": validate the groups and replace the stored
    /// combinations with a freshly generated list. Returns the row count.
    pub fn move_to_combinations(&self) -> FormResult<usize> {
        self.store.update(FormField::OptionCombinations, |form| {
            let rows = options::build_combinations(&form.option_groups)?;
            let count = rows.len();
            if !form.option_combinations.is_empty() {
                tracing::info!(
                    discarded = form.option_combinations.len(),
                    generated = count,
                    "Replacing option combinations"
                );
            }
            form.option_combinations = rows;
            Ok(count)
        })
    }

    pub fn update_combination(&self, id: &str, change: CombinationChange) -> FormResult<()> {
        self.store.update(FormField::OptionCombinations, |form| {
            combination_table::update_combination(&mut form.option_combinations, id, change)
        })
    }

    pub fn set_representative(&self, id: &str) -> FormResult<()> {
        self.store.update(FormField::OptionCombinations, |form| {
            combination_table::set_representative(&mut form.option_combinations, id)
        })
    }

    /// Delete a row after the seller confirms. `Ok(false)` when declined.
    pub async fn remove_combination(&self, id: &str) -> FormResult<bool> {
        if !self.store.read(|form| form.option_combinations.iter().any(|c| c.id == id)) {
            return Err(FormError::CombinationNotFound(id.to_string()));
        }
        if !self.confirm.confirm(&ConfirmRequest::remove_combination()).await {
            tracing::debug!(id, "Combination removal declined");
            return Ok(false);
        }
        // The row may have vanished while the dialog was open
        self.store.update(FormField::OptionCombinations, |form| {
            combination_table::remove_combination(&mut form.option_combinations, id).map(|_| true)
        })
    }

    // ========== Product fields ==========

    /// Edit product-level fields (name, prices, flags)
    pub fn update_product<R>(&self, f: impl FnOnce(&mut ProductForm) -> R) -> R {
        self.apply(FormField::Product, f)
    }

    // ========== Submit ==========

    /// Validate the whole form and build the create-product request.
    pub fn submit(&self) -> FormResult<AddProductRequest> {
        let form = self.store.snapshot();
        validate_product_fields(&form)?;
        // groups may have been renamed into a collision after generating
        validate_filled_group_names(&form.option_groups)?;
        validate_combinations_against_groups(&form.option_combinations, &form.option_groups)?;
        validate_representative(&form.option_combinations)?;

        let request = build_add_product_request(&form);
        tracing::info!(
            name = %request.name,
            groups = request.option_groups.len(),
            variants = request.variants.len(),
            "Product form ready to submit"
        );
        Ok(request)
    }
}
