use rust_decimal::Decimal;

/// Emitted by [`super::Store`] after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    CartChanged { total: Decimal, item_count: u64 },
    ProductAdded(String),
    ProductUpdated(String),
    ProductDeleted(String),
    DeviceAdded(String),
    DeviceUpdated(String),
    DeviceRemoved(String),
}

impl StoreEvent {
    pub fn name(&self) -> &'static str {
        match self {
            StoreEvent::CartChanged { .. } => "cart_changed",
            StoreEvent::ProductAdded(_) => "product_added",
            StoreEvent::ProductUpdated(_) => "product_updated",
            StoreEvent::ProductDeleted(_) => "product_deleted",
            StoreEvent::DeviceAdded(_) => "device_added",
            StoreEvent::DeviceUpdated(_) => "device_updated",
            StoreEvent::DeviceRemoved(_) => "device_removed",
        }
    }
}
