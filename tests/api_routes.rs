use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use storefront::{routes, state::AppState, storage::MemoryStorage};
use tower::ServiceExt;

fn app() -> Router {
    routes::app(AppState::new(Arc::new(MemoryStorage::new())))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_reports_catalog_size() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["products"], 6);
}

#[tokio::test]
async fn product_listing_is_paginated() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/products?category=Electronics&sort_by=price_desc&per_page=1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["id"], "1");
    assert_eq!(body["meta"]["total"], 2);
    assert_eq!(body["meta"]["per_page"], 1);
}

#[tokio::test]
async fn unknown_product_is_404() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/products/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn cart_round_trip_over_http() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "product_id": "1", "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["itemCount"], 2);
    assert_eq!(body["data"]["total"].as_f64(), Some(599.98));

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/cart/1",
        Some(json!({ "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"][0]["quantity"], 1);

    let (_, body) = send(&app, Method::GET, "/api/cart/summary", None).await;
    assert_eq!(body["data"]["freeShipping"], true);
    assert_eq!(body["data"]["tax"].as_f64(), Some(24.0));

    let (status, _) = send(&app, Method::DELETE, "/api/cart/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, "/api/cart/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn over_stock_add_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "product_id": "3", "quantity": 9 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["error"].as_str().is_some_and(|e| e.contains("stock")));
}

#[tokio::test]
async fn checkout_then_admin_sees_the_order() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "product_id": "2" })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders/checkout",
        Some(json!({
            "customer_name": "Grace Hopper",
            "customer_email": "grace@example.com",
            "shipping_address": {
                "street": "1 Harbor St",
                "city": "Arlington",
                "state": "VA",
                "zipCode": "22201",
                "country": "USA"
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "ORDER-004");
    assert_eq!(body["data"]["status"], "pending");

    let (status, body) = send(&app, Method::GET, "/api/admin/orders/ORDER-004", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["customerEmail"], "grace@example.com");

    let (_, body) = send(&app, Method::GET, "/api/cart", None).await;
    assert_eq!(body["data"]["itemCount"], 0);
}

#[tokio::test]
async fn theme_can_be_set_and_read_back() {
    let app = app();

    let (_, body) = send(&app, Method::GET, "/api/preferences/theme", None).await;
    assert_eq!(body["data"]["theme"], "light");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/preferences/theme",
        Some(json!({ "theme": "dark" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/preferences/theme", None).await;
    assert_eq!(body["data"]["theme"], "dark");

    let (_, body) = send(&app, Method::POST, "/api/preferences/theme/toggle", None).await;
    assert_eq!(body["data"]["theme"], "light");
}

#[tokio::test]
async fn unknown_route_falls_back_to_404() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/nowhere", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/api/nowhere");
}
