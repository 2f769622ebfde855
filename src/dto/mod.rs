pub mod analytics;
pub mod cart;
pub mod devices;
pub mod orders;
pub mod preferences;
pub mod products;
