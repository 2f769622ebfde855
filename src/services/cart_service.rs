use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    dto::cart::{AddToCartRequest, CartSummary, SetQuantityRequest},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    state::AppState,
    store::Cart,
};

pub async fn view_cart(state: &AppState) -> AppResult<ApiResponse<Cart>> {
    let store = state.store.read().await;
    let cart = store.cart().clone();
    let meta = Meta::total(cart.items().len());
    Ok(ApiResponse::success("OK", cart, Some(meta)))
}

pub async fn cart_summary(state: &AppState) -> AppResult<ApiResponse<CartSummary>> {
    let store = state.store.read().await;
    Ok(ApiResponse::success(
        "Cart summary",
        summarize(store.cart()),
        Some(Meta::empty()),
    ))
}

/// Subtotal, shipping and tax for a cart. Shipping is free above 100 and
/// tax is 8% rounded to cents.
pub fn summarize(cart: &Cart) -> CartSummary {
    let subtotal = cart.total();
    let free_shipping_above = Decimal::from(100);
    let flat_shipping = Decimal::new(999, 2);
    let tax_rate = Decimal::new(8, 2);

    let free_shipping = subtotal > free_shipping_above;
    let shipping = if cart.is_empty() || free_shipping {
        Decimal::ZERO
    } else {
        flat_shipping
    };
    let tax = (subtotal * tax_rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    CartSummary {
        item_count: cart.item_count(),
        subtotal,
        shipping,
        tax,
        total: subtotal + shipping + tax,
        free_shipping,
    }
}

pub async fn add_to_cart(state: &AppState, payload: AddToCartRequest) -> AppResult<ApiResponse<Cart>> {
    let quantity = payload.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let mut store = state.store.write().await;
    let product = store
        .product(&payload.product_id)
        .cloned()
        .ok_or(AppError::NotFound)?;

    if !product.in_stock {
        return Err(AppError::BadRequest("product is out of stock".to_string()));
    }
    if quantity > product.stock_quantity {
        return Err(AppError::BadRequest(format!(
            "only {} in stock",
            product.stock_quantity
        )));
    }

    for _ in 0..quantity {
        store.add_to_cart(&product);
    }
    tracing::info!(product_id = %product.id, quantity, "added to cart");

    Ok(ApiResponse::success(
        "Added to cart",
        store.cart().clone(),
        Some(Meta::empty()),
    ))
}

/// Set a line's quantity, capped at the stock the line was added with.
pub async fn set_quantity(
    state: &AppState,
    product_id: &str,
    payload: SetQuantityRequest,
) -> AppResult<ApiResponse<Cart>> {
    let mut store = state.store.write().await;
    let stock = store
        .cart()
        .item(product_id)
        .map(|item| item.product.stock_quantity)
        .ok_or(AppError::NotFound)?;

    let quantity = payload.quantity.min(i64::from(stock.max(1)));
    store.set_quantity(product_id, quantity);
    tracing::info!(product_id, quantity, "cart quantity set");

    Ok(ApiResponse::success(
        "Updated",
        store.cart().clone(),
        Some(Meta::empty()),
    ))
}

pub async fn remove_from_cart(state: &AppState, product_id: &str) -> AppResult<ApiResponse<Cart>> {
    let mut store = state.store.write().await;
    if store.cart().item(product_id).is_none() {
        return Err(AppError::NotFound);
    }
    store.remove_from_cart(product_id);
    tracing::info!(product_id, "removed from cart");

    Ok(ApiResponse::success(
        "Removed from cart",
        store.cart().clone(),
        Some(Meta::empty()),
    ))
}

pub async fn clear_cart(state: &AppState) -> AppResult<ApiResponse<Cart>> {
    let mut store = state.store.write().await;
    store.clear_cart();
    tracing::info!("cart cleared");

    Ok(ApiResponse::success(
        "Cart cleared",
        store.cart().clone(),
        Some(Meta::empty()),
    ))
}
