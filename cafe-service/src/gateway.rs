use bigdecimal::BigDecimal;
use num_traits::Zero;
use shared::*;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::store::OrderStore;

/// Validates order payloads at the boundary and drives the store's placement.
///
/// Failed placements are reported once and never retried here: resubmitting is
/// a new action by the user, not something the gateway does on its own.
#[derive(Clone)]
pub struct OrderGateway {
    store: Arc<dyn OrderStore>,
}

impl OrderGateway {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub async fn place(&self, request: PlaceOrderRequest) -> Result<PlaceOrderResponse, ApiError> {
        let request = validate(request)?;

        let recomputed = request.lines_total();
        if recomputed != request.total_amount {
            warn!(
                "Client total {} differs from line total {}",
                request.total_amount, recomputed
            );
        }

        let line_count = request.items.len();
        match self.store.place_order(request).await {
            Ok(order_id) => {
                info!("Placed order {} with {} lines", order_id, line_count);
                Ok(PlaceOrderResponse::placed(order_id))
            }
            Err(e) => {
                error!("Failed to place order: {}", e);
                Err(e.into())
            }
        }
    }

    /// Submits a session's cart. The cart is cleared only once the order is
    /// committed; on any failure it is left as it was so the user can retry.
    pub async fn submit_cart(
        &self,
        cart: &mut Cart,
        customer_id: Option<i32>,
        employee_id: Option<i32>,
    ) -> Result<PlaceOrderResponse, ApiError> {
        let payload = cart.to_order_payload(customer_id, employee_id)?;
        let response = self.place(payload).await?;
        cart.clear();
        Ok(response)
    }

    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>, ApiError> {
        self.store.list_orders().await.map_err(|e| {
            error!("Failed to list orders: {}", e);
            e.into()
        })
    }
}

/// Checks the payload and returns it in the form the store writes: missing
/// people references as `None`, every amount in whole cents.
fn validate(mut request: PlaceOrderRequest) -> Result<PlaceOrderRequest, ApiError> {
    if request.items.is_empty() {
        return Err(ApiError::EmptyCart);
    }

    // Clients send 0 for "no customer" or "no employee".
    request.customer_id = request.customer_id.filter(|id| *id > 0);
    request.employee_id = request.employee_id.filter(|id| *id > 0);

    let zero = BigDecimal::zero();
    if request.total_amount < zero {
        return Err(ApiError::InvalidOrder("total_amount must not be negative".to_string()));
    }
    request.total_amount = to_cents(&request.total_amount).ok_or_else(|| {
        ApiError::InvalidOrder("total_amount must be a whole number of cents".to_string())
    })?;

    for line in &mut request.items {
        if line.quantity < 1 {
            return Err(ApiError::InvalidOrder(format!(
                "quantity for menu item {} must be at least 1",
                line.menu_item_id
            )));
        }
        if line.price < zero {
            return Err(ApiError::InvalidOrder(format!(
                "price for menu item {} must not be negative",
                line.menu_item_id
            )));
        }
        line.price = to_cents(&line.price).ok_or_else(|| {
            ApiError::InvalidOrder(format!(
                "price for menu item {} must be a whole number of cents",
                line.menu_item_id
            ))
        })?;
    }

    Ok(request)
}

/// Rounds `amount` to cents when it is within float noise of a cent value
/// (`0.30000000000000004` from a JSON number). Real sub-cent amounts give `None`.
fn to_cents(amount: &BigDecimal) -> Option<BigDecimal> {
    let cents = amount.round(2);
    let drift = (amount - &cents).abs() * BigDecimal::from(1_000_000);
    (drift < BigDecimal::from(1)).then_some(cents)
}
