use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Customer;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NamedValue {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CustomerGrowth {
    pub month: String,
    pub customers: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    pub total_orders: u64,
    pub total_customers: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_order_value: Decimal,
    pub revenue_data: Vec<NamedValue>,
    pub order_status_data: Vec<NamedValue>,
    pub customer_growth_data: Vec<CustomerGrowth>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CustomerList {
    #[schema(value_type = Vec<Customer>)]
    pub items: Vec<Customer>,
}
