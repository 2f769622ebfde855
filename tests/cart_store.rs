mod common;

use std::sync::Arc;

use rust_decimal::Decimal;
use storefront::{
    storage::{CART_KEY, KeyValueStore, MemoryStorage},
    store::{CartItem, Store, StoreEvent},
};
use tokio::sync::broadcast::error::TryRecvError;

use common::{FailingStorage, memory_store, product};

#[test]
fn adds_merge_per_product_and_keep_first_add_order() {
    let (mut store, _) = memory_store(vec![]);
    let p1 = product("p1", Decimal::from(10));
    let p2 = product("p2", Decimal::from(5));

    store.add_to_cart(&p1);
    store.add_to_cart(&p1);
    store.add_to_cart(&p2);

    let cart = store.cart();
    let lines: Vec<(&str, u32)> = cart
        .items()
        .iter()
        .map(|item| (item.product.id.as_str(), item.quantity))
        .collect();
    assert_eq!(lines, vec![("p1", 2), ("p2", 1)]);
    assert_eq!(cart.total(), Decimal::from(25));
    assert_eq!(cart.item_count(), 3);
}

#[test]
fn totals_use_the_price_captured_when_added() {
    let p1 = product("p1", Decimal::from(10));
    let (mut store, _) = memory_store(vec![p1.clone()]);

    store.add_to_cart(&p1);
    store.add_to_cart(&p1);

    let mut repriced = p1.clone();
    repriced.price = Decimal::from(99);
    assert!(store.update_product(repriced));
    store.set_quantity("p1", 5);

    assert_eq!(store.product("p1").unwrap().price, Decimal::from(99));
    assert_eq!(store.cart().items()[0].quantity, 5);
    assert_eq!(store.cart().total(), Decimal::from(50));
}

#[test]
fn set_quantity_to_zero_matches_remove() {
    let p1 = product("p1", Decimal::new(1999, 2));
    let p2 = product("p2", Decimal::new(550, 2));

    let (mut by_zero, _) = memory_store(vec![]);
    let (mut by_remove, _) = memory_store(vec![]);
    for store in [&mut by_zero, &mut by_remove] {
        store.add_to_cart(&p1);
        store.add_to_cart(&p2);
        store.add_to_cart(&p2);
    }

    by_zero.set_quantity("p2", 0);
    by_remove.remove_from_cart("p2");

    assert_eq!(by_zero.cart(), by_remove.cart());
    assert_eq!(by_zero.cart().total(), Decimal::new(1999, 2));
}

#[test]
fn negative_quantity_removes_the_line() {
    let (mut store, _) = memory_store(vec![]);
    store.add_to_cart(&product("p1", Decimal::ONE));

    store.set_quantity("p1", -3);

    assert!(store.cart().is_empty());
}

#[test]
fn unknown_ids_are_no_ops() {
    let p1 = product("p1", Decimal::from(3));
    let (mut store, _) = memory_store(vec![p1.clone()]);
    store.add_to_cart(&p1);
    let before = store.cart().clone();

    store.remove_from_cart("missing");
    store.set_quantity("missing", 4);
    assert!(!store.update_product(product("missing", Decimal::ONE)));
    assert!(!store.delete_product("missing"));

    assert_eq!(store.cart(), &before);
    assert_eq!(store.products().len(), 1);
}

#[test]
fn clear_cart_resets_totals() {
    let (mut store, storage) = memory_store(vec![]);
    store.add_to_cart(&product("p1", Decimal::from(7)));
    store.add_to_cart(&product("p2", Decimal::from(8)));

    store.clear_cart();

    assert!(store.cart().items().is_empty());
    assert_eq!(store.cart().total(), Decimal::ZERO);
    assert_eq!(store.cart().item_count(), 0);
    assert_eq!(storage.get(CART_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn every_cart_mutation_is_persisted_in_the_documented_shape() {
    let (mut store, storage) = memory_store(vec![]);
    store.add_to_cart(&product("p1", Decimal::from(10)));
    store.add_to_cart(&product("p1", Decimal::from(10)));

    let raw = storage.get(CART_KEY).unwrap().expect("cart persisted");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["quantity"], 2);
    assert_eq!(json[0]["product"]["id"], "p1");
    assert_eq!(json[0]["product"]["price"].as_f64(), Some(10.0));
    assert_eq!(json[0]["product"]["stockQuantity"], 10);
    assert_eq!(json[0]["product"]["inStock"], true);
}

#[test]
fn deleted_product_stays_in_cart_as_snapshot() {
    let p1 = product("p1", Decimal::from(12));
    let (mut store, _) = memory_store(vec![p1.clone()]);
    store.add_to_cart(&p1);

    assert!(store.delete_product("p1"));

    assert!(store.product("p1").is_none());
    assert_eq!(store.cart().item("p1").map(|item| item.quantity), Some(1));
    assert_eq!(store.cart().total(), Decimal::from(12));
}

#[test]
fn catalog_writes_derive_stock_flag_and_gallery() {
    let (mut store, _) = memory_store(vec![]);
    let mut sold_out = product("p1", Decimal::ONE);
    sold_out.stock_quantity = 0;
    sold_out.in_stock = true;

    store.add_product(sold_out.clone());
    let stored = store.product("p1").unwrap();
    assert!(!stored.in_stock);
    assert_eq!(stored.images, vec![sold_out.image.clone()]);

    sold_out.stock_quantity = 4;
    store.update_product(sold_out);
    assert!(store.product("p1").unwrap().in_stock);
}

#[test]
fn out_of_stock_products_can_still_be_added() {
    let mut sold_out = product("p1", Decimal::from(2));
    sold_out.stock_quantity = 0;
    let (mut store, _) = memory_store(vec![sold_out.clone()]);

    store.add_to_cart(&sold_out);

    assert_eq!(store.cart().item_count(), 1);
}

#[test]
fn failed_writes_keep_the_in_memory_cart() {
    let mut store = Store::hydrate(vec![], Arc::new(FailingStorage));

    store.add_to_cart(&product("p1", Decimal::from(4)));
    store.add_to_cart(&product("p1", Decimal::from(4)));

    assert_eq!(store.cart().item_count(), 2);
    assert_eq!(store.cart().total(), Decimal::from(8));
}

#[test]
fn malformed_persisted_cart_hydrates_empty() {
    let storage = Arc::new(MemoryStorage::with_entry(CART_KEY, "{not json"));
    let store = Store::hydrate(vec![], storage);

    assert!(store.cart().is_empty());
    assert_eq!(store.cart().total(), Decimal::ZERO);
}

#[test]
fn hydration_restores_one_line_per_product() {
    let p1 = product("p1", Decimal::from(3));
    let p2 = product("p2", Decimal::from(4));
    let persisted = vec![
        CartItem { product: p1.clone(), quantity: 1 },
        CartItem { product: p2.clone(), quantity: 0 },
        CartItem { product: p1.clone(), quantity: 2 },
    ];
    let raw = serde_json::to_string(&persisted).unwrap();
    let storage = Arc::new(MemoryStorage::with_entry(CART_KEY, &raw));

    let store = Store::hydrate(vec![], storage);

    assert_eq!(store.cart().items().len(), 1);
    assert_eq!(store.cart().item_count(), 3);
    assert_eq!(store.cart().total(), Decimal::from(9));
}

#[test]
fn subscribers_see_each_mutation() {
    let p1 = product("p1", Decimal::from(10));
    let (mut store, _) = memory_store(vec![]);
    let mut events = store.subscribe();

    store.add_to_cart(&p1);
    store.add_product(product("p2", Decimal::ONE));
    store.delete_product("missing");

    assert_eq!(
        events.try_recv().unwrap(),
        StoreEvent::CartChanged {
            total: Decimal::from(10),
            item_count: 1
        }
    );
    assert_eq!(
        events.try_recv().unwrap(),
        StoreEvent::ProductAdded("p2".into())
    );
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
}
