#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use storefront::{
    models::Product,
    storage::{KeyValueStore, MemoryStorage, StorageError},
    store::Store,
};

pub fn product(id: &str, price: Decimal) -> Product {
    Product {
        id: id.to_string(),
        title: format!("Product {id}"),
        description: format!("Description of {id}"),
        price,
        original_price: None,
        image: format!("https://img.example/{id}.jpg"),
        images: Vec::new(),
        category: "Test".to_string(),
        tags: vec!["test".to_string()],
        in_stock: true,
        stock_quantity: 10,
        rating: Decimal::new(45, 1),
        reviews: 0,
        featured: false,
        created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

pub fn memory_store(products: Vec<Product>) -> (Store, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = Store::hydrate(products, storage.clone());
    (store, storage)
}

/// Reads nothing and refuses every write.
#[derive(Debug, Default)]
pub struct FailingStorage;

impl KeyValueStore for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }
}
