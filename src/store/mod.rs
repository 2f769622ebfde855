//! The catalog and cart store.
//!
//! Holds the product catalog, the cart and the connected-device list. Every
//! write is a single synchronous transition: the cart totals are refolded,
//! the cart is written to storage and a [`StoreEvent`] is broadcast before the
//! call returns. Storage failures are logged and never undo the in-memory
//! change.

mod cart;
mod events;

use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

use crate::{
    models::{Device, Product},
    storage::{CART_KEY, KeyValueStore, StorageError},
};

pub use cart::{Cart, CartItem, CartTotals};
pub use events::StoreEvent;

const EVENT_CAPACITY: usize = 256;

/// The store as shared through the application state.
pub type SharedStore = Arc<RwLock<Store>>;

#[derive(Debug)]
pub struct Store {
    products: Vec<Product>,
    cart: Cart,
    devices: Vec<Device>,
    storage: Arc<dyn KeyValueStore>,
    events: broadcast::Sender<StoreEvent>,
}

impl Store {
    /// Build the store from the seed catalog and whatever cart the storage
    /// holds. A missing or unreadable cart starts empty.
    pub fn hydrate(products: Vec<Product>, storage: Arc<dyn KeyValueStore>) -> Self {
        let items = match storage.get(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => cart::normalize_items(items),
                Err(err) => {
                    tracing::warn!(error = %err, "persisted cart is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "persisted cart could not be read, starting empty");
                Vec::new()
            }
        };

        let cart = Cart::from_items(items);
        tracing::debug!(
            products = products.len(),
            cart_items = cart.items().len(),
            "store hydrated"
        );

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            products: products.into_iter().map(Product::with_derived_fields).collect(),
            cart,
            devices: Vec::new(),
            storage,
            events,
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Add one unit of `product`. The line item keeps the product as passed
    /// here; later catalog edits do not reach it.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.update_cart(|items| {
            match items.iter_mut().find(|item| item.product.id == product.id) {
                Some(item) => item.quantity = item.quantity.saturating_add(1),
                None => items.push(CartItem {
                    product: product.clone(),
                    quantity: 1,
                }),
            }
        });
    }

    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.update_cart(|items| items.retain(|item| item.product.id != product_id));
    }

    /// Replace the quantity of an existing line. Zero or less removes it; an
    /// id that is not in the cart is left alone.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.update_cart(|items| {
            if let Some(item) = items.iter_mut().find(|item| item.product.id == product_id) {
                item.quantity = quantity;
            }
        });
    }

    pub fn clear_cart(&mut self) {
        self.update_cart(Vec::clear);
    }

    /// Append to the catalog. Id uniqueness is the caller's job.
    pub fn add_product(&mut self, product: Product) {
        let product = product.with_derived_fields();
        let id = product.id.clone();
        self.products.push(product);
        self.emit(StoreEvent::ProductAdded(id));
    }

    /// Replace the catalog entry with the same id. Returns whether one matched.
    pub fn update_product(&mut self, product: Product) -> bool {
        let product = product.with_derived_fields();
        let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) else {
            return false;
        };
        let id = product.id.clone();
        *slot = product;
        self.emit(StoreEvent::ProductUpdated(id));
        true
    }

    /// Drop a catalog entry. Cart lines holding the product keep their
    /// snapshot.
    pub fn delete_product(&mut self, product_id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != product_id);
        let removed = self.products.len() != before;
        if removed {
            self.emit(StoreEvent::ProductDeleted(product_id.to_string()));
        }
        removed
    }

    pub fn add_device(&mut self, device: Device) {
        let id = device.id.clone();
        self.devices.push(device);
        self.emit(StoreEvent::DeviceAdded(id));
    }

    pub fn update_device(&mut self, device: Device) -> bool {
        let Some(slot) = self.devices.iter_mut().find(|d| d.id == device.id) else {
            return false;
        };
        let id = device.id.clone();
        *slot = device;
        self.emit(StoreEvent::DeviceUpdated(id));
        true
    }

    pub fn remove_device(&mut self, device_id: &str) -> bool {
        let before = self.devices.len();
        self.devices.retain(|d| d.id != device_id);
        let removed = self.devices.len() != before;
        if removed {
            self.emit(StoreEvent::DeviceRemoved(device_id.to_string()));
        }
        removed
    }

    fn update_cart(&mut self, apply: impl FnOnce(&mut Vec<CartItem>)) {
        let mut items = std::mem::take(&mut self.cart).into_items();
        apply(&mut items);
        self.cart = Cart::from_items(items);
        self.persist_cart();
        self.emit(StoreEvent::CartChanged {
            total: self.cart.total(),
            item_count: self.cart.item_count(),
        });
    }

    fn persist_cart(&self) {
        let result = serde_json::to_string(self.cart.items())
            .map_err(StorageError::from)
            .and_then(|raw| self.storage.set(CART_KEY, &raw));
        if let Err(err) = result {
            tracing::warn!(error = %err, "cart persistence failed");
        }
    }

    fn emit(&self, event: StoreEvent) {
        // Fails only when nobody is subscribed.
        let _ = self.events.send(event);
    }
}
