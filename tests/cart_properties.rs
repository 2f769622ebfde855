mod common;

use std::{collections::HashMap, sync::Arc};

use proptest::prelude::*;
use rust_decimal::Decimal;
use storefront::{
    models::Product,
    storage::MemoryStorage,
    store::{CartItem, Store},
};

use common::product;

const CATALOG_SIZE: usize = 4;

// ============================================================================
// Strategies
// ============================================================================

#[derive(Debug, Clone)]
enum CartOp {
    Add(usize),
    Remove(usize),
    SetQuantity(usize, i64),
    Clear,
    Reprice(usize, i64),
}

fn arb_op() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        4 => (0..CATALOG_SIZE).prop_map(CartOp::Add),
        1 => (0..CATALOG_SIZE).prop_map(CartOp::Remove),
        2 => (0..CATALOG_SIZE, -3i64..8).prop_map(|(i, q)| CartOp::SetQuantity(i, q)),
        1 => Just(CartOp::Clear),
        1 => (0..CATALOG_SIZE, 0i64..100_000).prop_map(|(i, c)| CartOp::Reprice(i, c)),
    ]
}

fn arb_prices() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..100_000, CATALOG_SIZE)
}

// ============================================================================
// Helpers
// ============================================================================

fn catalog(prices: &[i64]) -> Vec<Product> {
    prices
        .iter()
        .enumerate()
        .map(|(i, cents)| product(&format!("p{i}"), Decimal::new(*cents, 2)))
        .collect()
}

fn id(index: usize) -> String {
    format!("p{index}")
}

fn apply(store: &mut Store, op: &CartOp) {
    match op {
        CartOp::Add(i) => {
            if let Some(p) = store.product(&id(*i)).cloned() {
                store.add_to_cart(&p);
            }
        }
        CartOp::Remove(i) => store.remove_from_cart(&id(*i)),
        CartOp::SetQuantity(i, q) => store.set_quantity(&id(*i), *q),
        CartOp::Clear => store.clear_cart(),
        CartOp::Reprice(i, cents) => {
            if let Some(mut p) = store.product(&id(*i)).cloned() {
                p.price = Decimal::new(*cents, 2);
                store.update_product(p);
            }
        }
    }
}

fn independent_fold(items: &[CartItem]) -> (Decimal, u64) {
    let mut total = Decimal::ZERO;
    let mut count = 0u64;
    for item in items {
        total += item.product.price * Decimal::from(item.quantity);
        count += u64::from(item.quantity);
    }
    (total, count)
}

fn fresh_store(prices: &[i64]) -> (Store, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = Store::hydrate(catalog(prices), storage.clone());
    (store, storage)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn totals_match_an_independent_fold_after_every_op(
        prices in arb_prices(),
        ops in prop::collection::vec(arb_op(), 0..60),
    ) {
        let (mut store, _) = fresh_store(&prices);
        for op in &ops {
            apply(&mut store, op);
            let (total, count) = independent_fold(store.cart().items());
            prop_assert_eq!(store.cart().total(), total);
            prop_assert_eq!(store.cart().item_count(), count);
            prop_assert!(store.cart().items().iter().all(|item| item.quantity > 0));
        }
    }

    #[test]
    fn one_line_per_product_with_quantity_equal_to_adds(
        adds in prop::collection::vec(0..CATALOG_SIZE, 0..50),
    ) {
        let (mut store, _) = fresh_store(&[100, 200, 300, 400]);
        let mut expected: HashMap<String, u32> = HashMap::new();
        for i in &adds {
            apply(&mut store, &CartOp::Add(*i));
            *expected.entry(id(*i)).or_default() += 1;
        }

        let items = store.cart().items();
        prop_assert_eq!(items.len(), expected.len());
        for item in items {
            prop_assert_eq!(Some(&item.quantity), expected.get(&item.product.id));
        }
    }

    #[test]
    fn set_quantity_zero_is_remove(
        prices in arb_prices(),
        ops in prop::collection::vec(arb_op(), 0..30),
        target in 0..CATALOG_SIZE,
    ) {
        let (mut by_zero, _) = fresh_store(&prices);
        let (mut by_remove, _) = fresh_store(&prices);
        for op in &ops {
            apply(&mut by_zero, op);
            apply(&mut by_remove, op);
        }

        by_zero.set_quantity(&id(target), 0);
        by_remove.remove_from_cart(&id(target));

        prop_assert_eq!(by_zero.cart(), by_remove.cart());
    }

    #[test]
    fn clear_always_empties(
        prices in arb_prices(),
        ops in prop::collection::vec(arb_op(), 0..30),
    ) {
        let (mut store, _) = fresh_store(&prices);
        for op in &ops {
            apply(&mut store, op);
        }

        store.clear_cart();

        prop_assert!(store.cart().items().is_empty());
        prop_assert_eq!(store.cart().total(), Decimal::ZERO);
        prop_assert_eq!(store.cart().item_count(), 0);
    }

    #[test]
    fn persisted_cart_rehydrates_equal(
        prices in arb_prices(),
        ops in prop::collection::vec(arb_op(), 1..40),
    ) {
        let (mut store, storage) = fresh_store(&prices);
        for op in &ops {
            apply(&mut store, op);
        }

        let restored = Store::hydrate(Vec::new(), storage);

        prop_assert_eq!(restored.cart(), store.cart());
    }
}
