use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

/// One cart line: the product as it was when first added, and how many.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Derived cart figures, always the fold of the current line items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub total: Decimal,
    pub item_count: u64,
}

impl CartTotals {
    pub fn of(items: &[CartItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            total: acc.total + item.line_total(),
            item_count: acc.item_count + u64::from(item.quantity),
        })
    }
}

/// Line items plus their totals. Only the store builds one, so the totals
/// cannot drift from the items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    total: Decimal,
    item_count: u64,
}

impl Cart {
    pub(crate) fn from_items(items: Vec<CartItem>) -> Self {
        let CartTotals { total, item_count } = CartTotals::of(&items);
        Self {
            items,
            total,
            item_count,
        }
    }

    pub(crate) fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }
}

/// Restore the one-line-per-product invariant on items read back from
/// storage: zero quantities are dropped and repeated ids are merged into the
/// first occurrence.
pub(crate) fn normalize_items(items: Vec<CartItem>) -> Vec<CartItem> {
    let mut merged: Vec<CartItem> = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity == 0 {
            continue;
        }
        match merged.iter_mut().find(|m| m.product.id == item.product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => merged.push(item),
        }
    }
    merged
}
