use std::collections::{BTreeMap, HashSet};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    dto::analytics::{AnalyticsData, CustomerGrowth, CustomerList, NamedValue},
    error::AppResult,
    models::{Customer, Order, OrderStatus},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn analytics(state: &AppState) -> AppResult<ApiResponse<AnalyticsData>> {
    let orders = state.orders.read().await;
    let data = compute(orders.orders(), &state.customers);
    Ok(ApiResponse::success("Analytics", data, Some(Meta::empty())))
}

pub async fn list_customers(state: &AppState) -> AppResult<ApiResponse<CustomerList>> {
    let items = state.customers.as_ref().clone();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Customers", CustomerList { items }, Some(meta)))
}

/// Dashboard figures. Cancelled orders count toward the status breakdown
/// only.
pub fn compute(orders: &[Order], customers: &[Customer]) -> AnalyticsData {
    let counted: Vec<&Order> = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .collect();

    let total_revenue: Decimal = counted.iter().map(|o| o.total).sum();
    let total_orders = u64::try_from(counted.len()).unwrap_or(u64::MAX);
    let average_order_value = if total_orders == 0 {
        Decimal::ZERO
    } else {
        (total_revenue / Decimal::from(total_orders))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    let emails: HashSet<String> = orders
        .iter()
        .map(|o| o.customer_email.to_lowercase())
        .collect();
    let total_customers = u64::try_from(emails.len()).unwrap_or(u64::MAX);

    let mut by_month: BTreeMap<String, Decimal> = BTreeMap::new();
    for order in &counted {
        *by_month
            .entry(order.created_at.format("%Y-%m").to_string())
            .or_default() += order.total;
    }
    let revenue_data = by_month
        .into_iter()
        .map(|(name, value)| NamedValue { name, value })
        .collect();

    let order_status_data = OrderStatus::ALL
        .into_iter()
        .filter_map(|status| {
            let count = orders.iter().filter(|o| o.status == status).count();
            (count > 0).then(|| NamedValue {
                name: status.to_string(),
                value: Decimal::from(count),
            })
        })
        .collect();

    AnalyticsData {
        total_revenue,
        total_orders,
        total_customers,
        average_order_value,
        revenue_data,
        order_status_data,
        customer_growth_data: customer_growth(customers),
    }
}

/// Running customer count per join month.
fn customer_growth(customers: &[Customer]) -> Vec<CustomerGrowth> {
    let mut joined: BTreeMap<String, u64> = BTreeMap::new();
    for customer in customers {
        *joined
            .entry(customer.join_date.format("%Y-%m").to_string())
            .or_default() += 1;
    }

    let mut running = 0;
    joined
        .into_iter()
        .map(|(month, count)| {
            running += count;
            CustomerGrowth {
                month,
                customers: running,
            }
        })
        .collect()
}
