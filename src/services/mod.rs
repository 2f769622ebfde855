pub mod admin_service;
pub mod analytics_service;
pub mod cart_service;
pub mod device_service;
pub mod order_service;
pub mod preference_service;
pub mod product_service;
