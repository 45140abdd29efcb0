//! Catalog sanity checks, run on the raw item list before indexing.

use std::collections::HashSet;

use gearkit_core::CatalogItem;

use crate::error::{CatalogError, Result};

/// Every problem found, one line each. Empty when the items are usable.
pub fn problems(items: &[CatalogItem]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for (i, item) in items.iter().enumerate() {
        let label = if item.id.trim().is_empty() {
            problems.push(format!("item #{i} has an empty id"));
            format!("#{i}")
        } else {
            item.id.clone()
        };

        if !item.id.is_empty() && !seen.insert(item.id.as_str()) {
            problems.push(format!("duplicate id {label}"));
        }
        if !item.price.is_finite() || !item.original_price.is_finite() {
            problems.push(format!("{label}: price is not a finite number"));
            continue;
        }
        if item.price < 0.0 || item.original_price < 0.0 {
            problems.push(format!("{label}: negative price"));
        }
        if item.price > item.original_price {
            problems.push(format!(
                "{label}: price {} exceeds original price {}",
                item.price, item.original_price
            ));
        }
        if !(0.0..=5.0).contains(&item.rating) {
            problems.push(format!("{label}: rating {} outside 0-5", item.rating));
        }
        if !item.category.is_recognized() {
            tracing::warn!(item = %label, category = %item.category, "unrecognized category");
        }
    }

    problems
}

pub fn validate(items: &[CatalogItem]) -> Result<()> {
    let problems = problems(items);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Invalid(problems))
    }
}
