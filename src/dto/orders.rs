use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Address, Order};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub shipping_address: Address,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct OrderList {
    #[schema(value_type = Vec<Order>)]
    pub items: Vec<Order>,
}
