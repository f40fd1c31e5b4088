//! Option group editing
//!
//! Edits only touch `option_groups`. Generated combinations stay as they are
//! until the seller regenerates them.

use rust_decimal::Decimal;
use shared::models::{OptionGroup, OptionItem};

use super::error::{FormError, FormResult};

/// Edit applied to a single option item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemChange {
    Name(String),
    Price(Option<Decimal>),
}

fn group_mut<'a>(groups: &'a mut [OptionGroup], group_id: &str) -> FormResult<&'a mut OptionGroup> {
    groups
        .iter_mut()
        .find(|g| g.id == group_id)
        .ok_or_else(|| FormError::GroupNotFound(group_id.to_string()))
}

/// Append a blank group and return its id
pub fn add_group(groups: &mut Vec<OptionGroup>) -> String {
    let group = OptionGroup::empty();
    let id = group.id.clone();
    groups.push(group);
    id
}

/// Remove a group; the form always keeps at least one
pub fn remove_group(groups: &mut Vec<OptionGroup>, group_id: &str) -> FormResult<OptionGroup> {
    let index = groups
        .iter()
        .position(|g| g.id == group_id)
        .ok_or_else(|| FormError::GroupNotFound(group_id.to_string()))?;
    if groups.len() <= 1 {
        return Err(FormError::LastGroup);
    }
    Ok(groups.remove(index))
}

pub fn rename_group(groups: &mut [OptionGroup], group_id: &str, name: impl Into<String>) -> FormResult<()> {
    group_mut(groups, group_id)?.name = name.into();
    Ok(())
}

/// Append a blank item to a group and return its id
pub fn add_item(groups: &mut [OptionGroup], group_id: &str) -> FormResult<String> {
    let item = OptionItem::empty();
    let id = item.id.clone();
    group_mut(groups, group_id)?.items.push(item);
    Ok(id)
}

/// Remove an item; a group always keeps at least one
pub fn remove_item(groups: &mut [OptionGroup], group_id: &str, item_id: &str) -> FormResult<OptionItem> {
    let group = group_mut(groups, group_id)?;
    let index = group
        .items
        .iter()
        .position(|i| i.id == item_id)
        .ok_or_else(|| FormError::ItemNotFound {
            group: group_id.to_string(),
            item: item_id.to_string(),
        })?;
    if group.items.len() <= 1 {
        return Err(FormError::LastItem);
    }
    Ok(group.items.remove(index))
}

pub fn update_item(
    groups: &mut [OptionGroup],
    group_id: &str,
    item_id: &str,
    change: ItemChange,
) -> FormResult<()> {
    let group = group_mut(groups, group_id)?;
    let item = group
        .items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or_else(|| FormError::ItemNotFound {
            group: group_id.to_string(),
            item: item_id.to_string(),
        })?;
    match change {
        ItemChange::Name(name) => item.name = name,
        ItemChange::Price(price) => item.price = price,
    }
    Ok(())
}
