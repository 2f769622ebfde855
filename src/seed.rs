//! Fixed demo dataset the store and order book start from.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    models::{Address, Customer, Order, OrderStatus, Product},
    store::CartItem,
};

const PEXELS: &str = "https://images.pexels.com/photos";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn photo(path: &str, width: u32) -> String {
    format!("{PEXELS}/{path}?auto=compress&cs=tinysrgb&w={width}")
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    title: &str,
    description: &str,
    (price, original_price): (i64, Option<i64>),
    photos: &[&str],
    category: &str,
    tags: &[&str],
    (stock_quantity, rating, reviews): (u32, i64, u32),
    featured: bool,
    created_at: NaiveDate,
) -> Product {
    let image = photos.first().map(|p| photo(p, 500)).unwrap_or_default();
    Product {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        price: cents(price),
        original_price: original_price.map(cents),
        image,
        images: photos.iter().map(|p| photo(p, 800)).collect(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        in_stock: stock_quantity > 0,
        stock_quantity,
        rating: Decimal::new(rating, 1),
        reviews,
        featured,
        created_at,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Premium Wireless Headphones",
            "High-quality wireless headphones with noise cancellation and premium sound quality. Perfect for music lovers and professionals.",
            (29999, Some(39999)),
            &[
                "3394650/pexels-photo-3394650.jpeg",
                "1649771/pexels-photo-1649771.jpeg",
            ],
            "Electronics",
            &["wireless", "audio", "premium", "noise-cancelling"],
            (25, 48, 124),
            true,
            date(2024, 1, 15),
        ),
        product(
            "2",
            "Smart Fitness Watch",
            "Advanced fitness tracking watch with heart rate monitoring, GPS, and smartphone connectivity.",
            (19999, None),
            &["267394/pexels-photo-267394.jpeg"],
            "Wearables",
            &["fitness", "smart", "health", "gps"],
            (15, 46, 89),
            true,
            date(2024, 1, 20),
        ),
        product(
            "3",
            "Professional Camera",
            "High-resolution digital camera for professional photography with advanced features and interchangeable lenses.",
            (129999, Some(149999)),
            &["90946/pexels-photo-90946.jpeg"],
            "Cameras",
            &["photography", "professional", "high-resolution"],
            (8, 49, 56),
            false,
            date(2024, 1, 10),
        ),
        product(
            "4",
            "Gaming Mechanical Keyboard",
            "RGB mechanical gaming keyboard with customizable keys and ultra-responsive switches.",
            (14999, None),
            &["2115256/pexels-photo-2115256.jpeg"],
            "Gaming",
            &["gaming", "mechanical", "rgb", "keyboard"],
            (32, 47, 203),
            false,
            date(2024, 1, 25),
        ),
        product(
            "5",
            "Laptop Backpack",
            "Durable and stylish laptop backpack with multiple compartments and water-resistant material.",
            (7999, None),
            &["2905238/pexels-photo-2905238.jpeg"],
            "Accessories",
            &["laptop", "backpack", "travel", "durable"],
            (18, 44, 67),
            false,
            date(2024, 2, 1),
        ),
        product(
            "6",
            "Wireless Charging Pad",
            "Fast wireless charging pad compatible with all Qi-enabled devices. Sleek design with LED indicator.",
            (3999, Some(5999)),
            &["4158/apple-iphone-smartphone-desk.jpg"],
            "Electronics",
            &["wireless", "charging", "qi", "fast-charge"],
            (45, 43, 156),
            true,
            date(2024, 2, 5),
        ),
    ]
}

fn line(products: &[Product], id: &str, quantity: u32) -> Option<CartItem> {
    products
        .iter()
        .find(|p| p.id == id)
        .map(|product| CartItem {
            product: product.clone(),
            quantity,
        })
}

fn address(street: &str, city: &str, state: &str, zip_code: &str) -> Address {
    Address {
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip_code.to_string(),
        country: "USA".to_string(),
    }
}

pub fn orders(products: &[Product]) -> Vec<Order> {
    vec![
        Order {
            id: "ORDER-001".into(),
            customer_name: "John Doe".into(),
            customer_email: "john@example.com".into(),
            items: [line(products, "1", 1), line(products, "2", 1)]
                .into_iter()
                .flatten()
                .collect(),
            total: cents(49998),
            status: OrderStatus::Delivered,
            created_at: date(2024, 1, 15),
            shipping_address: address("123 Main St", "New York", "NY", "10001"),
        },
        Order {
            id: "ORDER-002".into(),
            customer_name: "Jane Smith".into(),
            customer_email: "jane@example.com".into(),
            items: line(products, "3", 1).into_iter().collect(),
            total: cents(129999),
            status: OrderStatus::Shipped,
            created_at: date(2024, 1, 20),
            shipping_address: address("456 Oak Ave", "Los Angeles", "CA", "90210"),
        },
        Order {
            id: "ORDER-003".into(),
            customer_name: "Mike Johnson".into(),
            customer_email: "mike@example.com".into(),
            items: [line(products, "4", 2), line(products, "5", 1)]
                .into_iter()
                .flatten()
                .collect(),
            total: cents(37997),
            status: OrderStatus::Processing,
            created_at: date(2024, 1, 25),
            shipping_address: address("789 Pine Rd", "Chicago", "IL", "60601"),
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "CUST-001".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            total_orders: 3,
            total_spent: cents(129994),
            join_date: date(2023, 12, 1),
        },
        Customer {
            id: "CUST-002".into(),
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            total_orders: 5,
            total_spent: cents(219995),
            join_date: date(2023, 11, 15),
        },
        Customer {
            id: "CUST-003".into(),
            name: "Mike Johnson".into(),
            email: "mike@example.com".into(),
            total_orders: 2,
            total_spent: cents(67994),
            join_date: date(2024, 1, 10),
        },
    ]
}
