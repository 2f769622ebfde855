use chrono::NaiveDate;

use crate::{
    models::{Address, Order, OrderStatus},
    store::Cart,
};

/// In-memory order book. Orders are never persisted.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    next_number: u32,
}

impl OrderBook {
    pub fn new(seed: Vec<Order>) -> Self {
        let next_number = seed
            .iter()
            .filter_map(|order| order_number(&order.id))
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            orders: seed,
            next_number,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Turn a cart snapshot into a pending order.
    pub fn place(
        &mut self,
        customer_name: String,
        customer_email: String,
        shipping_address: Address,
        cart: &Cart,
        created_at: NaiveDate,
    ) -> Order {
        let order = Order {
            id: format!("ORDER-{:03}", self.next_number),
            customer_name,
            customer_email,
            items: cart.items().to_vec(),
            total: cart.total(),
            status: OrderStatus::Pending,
            created_at,
            shipping_address,
        };
        self.next_number += 1;
        self.orders.push(order.clone());
        order
    }

    pub fn set_status(&mut self, id: &str, status: OrderStatus) -> Option<&Order> {
        let order = self.orders.iter_mut().find(|order| order.id == id)?;
        order.status = status;
        Some(order)
    }
}

fn order_number(id: &str) -> Option<u32> {
    id.strip_prefix("ORDER-")?.parse().ok()
}

