use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        analytics::{AnalyticsData, CustomerGrowth, CustomerList, NamedValue},
        cart::{AddToCartRequest, CartSummary, SetQuantityRequest},
        devices::DeviceList,
        orders::{CheckoutRequest, OrderList, UpdateOrderStatusRequest},
        preferences::ThemeData,
        products::{CategoryList, CreateProductRequest, ProductList, UpdateProductRequest},
    },
    models::{Address, Customer, Device, DeviceType, Order, OrderStatus, Product, Theme},
    response::{ApiResponse, Meta},
    routes::{admin, cart, devices, health, orders, params, preferences, products},
    store::{Cart, CartItem},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::list_categories,
        products::list_featured,
        products::get_product,
        cart::cart_view,
        cart::cart_summary,
        cart::add_to_cart,
        cart::set_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        orders::checkout,
        admin::list_products,
        admin::create_product,
        admin::update_product,
        admin::delete_product,
        admin::list_all_orders,
        admin::get_order_admin,
        admin::update_order_status,
        admin::list_customers,
        admin::analytics,
        devices::list_devices,
        devices::add_device,
        devices::update_device,
        devices::remove_device,
        preferences::get_theme,
        preferences::set_theme,
        preferences::toggle_theme
    ),
    components(
        schemas(
            Product,
            Cart,
            CartItem,
            Order,
            OrderStatus,
            Address,
            Customer,
            Device,
            DeviceType,
            Theme,
            AddToCartRequest,
            SetQuantityRequest,
            CartSummary,
            CheckoutRequest,
            UpdateOrderStatusRequest,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            CategoryList,
            OrderList,
            DeviceList,
            CustomerList,
            AnalyticsData,
            NamedValue,
            CustomerGrowth,
            ThemeData,
            params::Pagination,
            params::ProductQuery,
            params::ProductSortBy,
            params::AdminProductQuery,
            params::OrderListQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<Cart>,
            ApiResponse<Order>,
            ApiResponse<OrderList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Storefront catalog endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Checkout endpoint"),
        (name = "Admin", description = "Product, order, customer and analytics administration"),
        (name = "Devices", description = "Connected device registry"),
        (name = "Preferences", description = "Persisted user preferences"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
