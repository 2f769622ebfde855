use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    models::{Customer, Order, Product},
    orders::OrderBook,
    preferences::Preferences,
    seed,
    storage::KeyValueStore,
    store::{SharedStore, Store},
};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub orders: Arc<RwLock<OrderBook>>,
    pub customers: Arc<Vec<Customer>>,
    pub preferences: Preferences,
}

impl AppState {
    /// State seeded with the demo catalog, orders and customers.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let products = seed::products();
        let orders = seed::orders(&products);
        Self::with_data(storage, products, orders, seed::customers())
    }

    pub fn with_data(
        storage: Arc<dyn KeyValueStore>,
        products: Vec<Product>,
        orders: Vec<Order>,
        customers: Vec<Customer>,
    ) -> Self {
        Self {
            store: Store::hydrate(products, Arc::clone(&storage)).into_shared(),
            orders: Arc::new(RwLock::new(OrderBook::new(orders))),
            customers: Arc::new(customers),
            preferences: Preferences::new(storage),
        }
    }
}
