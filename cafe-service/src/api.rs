use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use shared::*;
use std::sync::Arc;

use crate::error::ApiError;
use crate::gateway::OrderGateway;
use crate::store::{CatalogReader, OrderStore};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogReader>,
    pub orders: Arc<dyn OrderStore>,
}

#[derive(Debug, Serialize)]
pub struct InventoryStatus {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub low_stock: bool,
}

impl From<InventoryItem> for InventoryStatus {
    fn from(item: InventoryItem) -> Self {
        let low_stock = item.is_low_stock();
        Self { item, low_stock }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/menu", get(list_menu))
        .route("/api/inventory", get(list_inventory))
        .route("/api/employees", get(list_employees))
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}

pub async fn list_menu(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let menu = state.catalog.list_menu().await.map_err(|e| {
        tracing::error!("Failed to load menu: {}", e);
        ApiError::from(e)
    })?;
    Ok(Json(menu))
}

pub async fn list_inventory(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryStatus>>, ApiError> {
    let inventory = state.catalog.list_inventory().await.map_err(|e| {
        tracing::error!("Failed to load inventory: {}", e);
        ApiError::from(e)
    })?;
    Ok(Json(inventory.into_iter().map(InventoryStatus::from).collect()))
}

pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.catalog.list_employees().await.map_err(|e| {
        tracing::error!("Failed to load employees: {}", e);
        ApiError::from(e)
    })?;
    Ok(Json(employees))
}

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<OrderSummary>>, ApiError> {
    let gateway = OrderGateway::new(state.orders);
    Ok(Json(gateway.list_orders().await?))
}

pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<Json<PlaceOrderResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::InvalidOrder(rejection.body_text()))?;

    let gateway = OrderGateway::new(state.orders);
    let response = gateway.place(request).await?;
    Ok(Json(response))
}

pub async fn health_check() -> &'static str {
    "OK"
}
