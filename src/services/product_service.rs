use std::collections::HashSet;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    dto::products::{CategoryList, CreateProductRequest, ProductList, UpdateProductRequest},
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::{AdminProductQuery, ProductQuery, ProductSortBy},
    state::AppState,
};

const STOREFRONT_PAGE_SIZE: i64 = 8;
const ADMIN_PAGE_SIZE: i64 = 20;
const FEATURED_LIMIT: usize = 3;
const PLACEHOLDER_IMAGE: &str =
    "https://images.pexels.com/photos/607812/pexels-photo-607812.jpeg?auto=compress&cs=tinysrgb&w=400";

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let store = state.store.read().await;
    let items = filter_products(store.products(), &query);
    let (items, meta) = query.pagination().apply(items, STOREFRONT_PAGE_SIZE);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

/// Storefront search, filters and ordering over a catalog snapshot.
pub fn filter_products(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let search = query.q.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != "all");

    let mut items: Vec<Product> = products
        .iter()
        .filter(|p| search.is_none_or(|needle| p.matches_search(needle)))
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| query.min_price.is_none_or(|min| p.price >= min))
        .filter(|p| query.max_price.is_none_or(|max| p.price <= max))
        .cloned()
        .collect();

    match query.sort_by.unwrap_or_default() {
        ProductSortBy::Featured => items.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then_with(|| b.rating.cmp(&a.rating))
        }),
        ProductSortBy::PriceAsc => items.sort_by(|a, b| a.price.cmp(&b.price)),
        ProductSortBy::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
        ProductSortBy::Rating => items.sort_by(|a, b| b.rating.cmp(&a.rating)),
        ProductSortBy::Newest => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    items
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<ApiResponse<Product>> {
    let store = state.store.read().await;
    let product = store.product(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let store = state.store.read().await;
    let mut seen = HashSet::new();
    let items: Vec<String> = store
        .products()
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}

pub async fn list_featured(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let store = state.store.read().await;
    let items: Vec<Product> = store
        .products()
        .iter()
        .filter(|p| p.featured)
        .take(FEATURED_LIMIT)
        .cloned()
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Featured products", ProductList { items }, Some(meta)))
}

pub async fn admin_list_products(
    state: &AppState,
    query: AdminProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let store = state.store.read().await;
    let needle = query.q.as_deref().unwrap_or_default().to_lowercase();
    let items: Vec<Product> = store
        .products()
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    let (items, meta) = query.pagination().apply(items, ADMIN_PAGE_SIZE);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let image = Some(payload.image)
        .filter(|i| !i.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let product = Product {
        id: format!("product-{}", Uuid::new_v4()),
        title: payload.title.trim().to_string(),
        description: payload.description,
        price: payload.price,
        original_price: discount(payload.original_price),
        image,
        images: payload.images,
        category: payload.category,
        tags: clean_tags(payload.tags),
        in_stock: payload.stock_quantity > 0,
        stock_quantity: payload.stock_quantity,
        rating: payload.rating.unwrap_or(Decimal::new(45, 1)),
        reviews: payload.reviews.unwrap_or(0),
        featured: payload.featured,
        created_at: payload.created_at.unwrap_or_else(|| Utc::now().date_naive()),
    }
    .with_derived_fields();
    product.validate().map_err(AppError::BadRequest)?;

    let mut store = state.store.write().await;
    store.add_product(product.clone());
    tracing::info!(product_id = %product.id, "product created");

    Ok(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: &str,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let mut store = state.store.write().await;
    let mut product = store.product(id).cloned().ok_or(AppError::NotFound)?;

    if let Some(title) = payload.title {
        product.title = title.trim().to_string();
    }
    if let Some(description) = payload.description {
        product.description = description;
    }
    if let Some(price) = payload.price {
        product.price = price;
    }
    if let Some(original_price) = payload.original_price {
        product.original_price = discount(Some(original_price));
    }
    if let Some(image) = payload.image {
        for entry in product.images.iter_mut().filter(|entry| **entry == product.image) {
            *entry = image.clone();
        }
        product.image = image;
    }
    if let Some(images) = payload.images {
        product.images = images;
    }
    if let Some(category) = payload.category {
        product.category = category;
    }
    if let Some(tags) = payload.tags {
        product.tags = clean_tags(tags);
    }
    if let Some(stock_quantity) = payload.stock_quantity {
        product.stock_quantity = stock_quantity;
    }
    if let Some(rating) = payload.rating {
        product.rating = rating;
    }
    if let Some(reviews) = payload.reviews {
        product.reviews = reviews;
    }
    if let Some(featured) = payload.featured {
        product.featured = featured;
    }

    let product = product.with_derived_fields();
    product.validate().map_err(AppError::BadRequest)?;

    store.update_product(product.clone());
    tracing::info!(product_id = %product.id, "product updated");

    Ok(ApiResponse::success(
        "Updated",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut store = state.store.write().await;
    if !store.delete_product(id) {
        return Err(AppError::NotFound);
    }
    tracing::info!(product_id = id, "product deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// A zero or negative original price clears the discount.
fn discount(original_price: Option<Decimal>) -> Option<Decimal> {
    original_price.filter(|price| *price > Decimal::ZERO)
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
