//! Frozen hand-off payload for the external checkout flow.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bundle::Bundle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLine {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub image: String,
    /// Display label, e.g. "Base Layer".
    pub category: String,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSnapshot {
    pub order_ref: Uuid,
    pub items: Vec<CheckoutLine>,
    pub total: f64,
    pub original_price: f64,
    pub savings: f64,
}

impl CheckoutSnapshot {
    /// Freeze `bundle` in item order under a fresh order reference.
    pub fn from_bundle(bundle: &Bundle) -> Self {
        let items = bundle
            .items()
            .iter()
            .map(|b| CheckoutLine {
                id: b.item.id.clone(),
                name: b.item.name.clone(),
                brand: b.item.brand.clone(),
                price: b.item.price,
                image: b.item.image.clone(),
                category: b.item.category.label(),
                rationale: b.rationale.clone(),
            })
            .collect();

        Self {
            order_ref: Uuid::new_v4(),
            items,
            total: bundle.total_price(),
            original_price: bundle.original_price(),
            savings: bundle.savings(),
        }
    }

    /// The "no items found" state.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
