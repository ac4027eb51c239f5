use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod cart;

pub use cart::{Cart, CartError, CartLine};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub menu_item_id: i32,
    pub item_name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub inventory_id: i32,
    pub item_name: String,
    pub current_stock: i32,
    pub reorder_level: i32,
    pub unit: String,
    pub supplier_name: String,
}

impl InventoryItem {
    /// Derived on every read, never stored.
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.reorder_level
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Completed" => Ok(OrderStatus::Completed),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineInput {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub price: BigDecimal,
}

impl OrderLineInput {
    pub fn subtotal(&self) -> BigDecimal {
        &self.price * &BigDecimal::from(self.quantity)
    }
}

/// Body of `POST /api/orders`, and the exact shape the order store consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub customer_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub total_amount: BigDecimal,
    pub items: Vec<OrderLineInput>,
}

impl PlaceOrderRequest {
    /// Sum of quantity x price over the lines, independent of `total_amount`.
    pub fn lines_total(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + line.subtotal())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    pub message: String,
    #[serde(rename = "orderId")]
    pub order_id: i32,
}

impl PlaceOrderResponse {
    pub fn placed(order_id: i32) -> Self {
        Self {
            message: "Order placed successfully".to_string(),
            order_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: i32,
    pub order_time: DateTime<Utc>,
    pub total_amount: BigDecimal,
    pub order_status: OrderStatus,
    /// `"<name> (x<qty>)"` per line, joined with `", "` in insertion order.
    pub items: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
