//! Option group validation
//!
//! Checks run group by group, in form order, and stop at the first failure:
//! group name, group name uniqueness, filled items, item name uniqueness.

use std::collections::HashSet;

use shared::models::{OptionGroup, OptionItem};

use super::error::OptionError;

/// An option group that passed validation
///
/// Names are trimmed and `items` only holds filled items, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidGroup {
    pub id: String,
    pub name: String,
    pub items: Vec<OptionItem>,
}

/// Validate option groups before generating combinations.
///
/// Performs no mutation; returns the filtered groups or the first error.
pub fn validate_option_groups(groups: &[OptionGroup]) -> Result<Vec<ValidGroup>, OptionError> {
    if groups.is_empty() {
        return Err(OptionError::EmptyInput);
    }

    let mut valid = Vec::with_capacity(groups.len());
    for (index, group) in groups.iter().enumerate() {
        let name = group.name.trim();
        if name.is_empty() {
            return Err(OptionError::MissingGroupName { index: index + 1 });
        }

        let duplicated = groups
            .iter()
            .any(|other| other.id != group.id && other.name.trim() == name);
        if duplicated {
            return Err(OptionError::DuplicateGroupName {
                name: name.to_string(),
            });
        }

        let items: Vec<OptionItem> = group
            .filled_items()
            .map(|item| OptionItem {
                name: item.name.trim().to_string(),
                ..item.clone()
            })
            .collect();
        if items.is_empty() {
            return Err(OptionError::EmptyGroupItems {
                group: name.to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                return Err(OptionError::DuplicateItemName {
                    group: name.to_string(),
                    item: item.name.clone(),
                });
            }
        }

        valid.push(ValidGroup {
            id: group.id.clone(),
            name: name.to_string(),
            items,
        });
    }

    Ok(valid)
}

/// Naming checks over the groups that will be sent.
///
/// Blank groups are dropped from the request, so only filled groups are
/// checked. Renaming after generation can still collide with another group.
pub fn validate_filled_group_names(groups: &[OptionGroup]) -> Result<(), OptionError> {
    let filled: Vec<OptionGroup> = groups.iter().filter(|g| g.is_filled()).cloned().collect();
    if filled.is_empty() {
        return Ok(());
    }
    validate_option_groups(&filled).map(|_| ())
}
