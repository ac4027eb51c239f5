use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{Duration, Utc};
use shared::*;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::StoreError;
use crate::store::{CatalogReader, OrderStore};

/// In-process stand-in for `PgStore`.
pub struct MemoryStore {
    menu: Vec<MenuItem>,
    inventory: Vec<InventoryItem>,
    orders: Mutex<Vec<OrderSummary>>,
    placed: Mutex<Vec<PlaceOrderRequest>>,
    fail_with: Option<String>,
    exhausted: bool,
    attempts: AtomicUsize,
}

impl MemoryStore {
    pub fn with_menu() -> Self {
        let item = |menu_item_id: i32, item_name: &str, price: &str| MenuItem {
            menu_item_id,
            item_name: item_name.to_string(),
            price: BigDecimal::from_str(price).unwrap(),
            description: None,
        };
        let stock = |inventory_id: i32, item_name: &str, current_stock: i32, reorder_level: i32| InventoryItem {
            inventory_id,
            item_name: item_name.to_string(),
            current_stock,
            reorder_level,
            unit: "kg".to_string(),
            supplier_name: "Roastery Supply".to_string(),
        };

        Self {
            menu: vec![item(1, "Latte", "4.50"), item(2, "Muffin", "3.00")],
            inventory: vec![stock(1, "Coffee Beans", 12, 5), stock(2, "Blueberries", 2, 2)],
            orders: Mutex::new(Vec::new()),
            placed: Mutex::new(Vec::new()),
            fail_with: None,
            exhausted: false,
            attempts: AtomicUsize::new(0),
        }
    }

    /// Every placement and read fails with `cause`.
    pub fn failing(cause: &str) -> Self {
        Self {
            fail_with: Some(cause.to_string()),
            ..Self::with_menu()
        }
    }

    /// Placements time out waiting for a connection; reads still work.
    pub fn exhausted() -> Self {
        Self {
            exhausted: true,
            ..Self::with_menu()
        }
    }

    pub fn menu(&self) -> Vec<MenuItem> {
        self.menu.clone()
    }

    pub fn placement_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// The request as it reached the store on the latest committed placement.
    pub fn last_placed(&self) -> Option<PlaceOrderRequest> {
        self.placed.lock().unwrap().last().cloned()
    }

    fn read_check(&self) -> Result<(), StoreError> {
        match &self.fail_with {
            Some(cause) => Err(StoreError::CatalogUnavailable(cause.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogReader for MemoryStore {
    async fn list_menu(&self) -> Result<Vec<MenuItem>, StoreError> {
        self.read_check()?;
        Ok(self.menu.clone())
    }

    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, StoreError> {
        self.read_check()?;
        Ok(self.inventory.clone())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        self.read_check()?;
        Ok(vec![Employee {
            employee_id: 1,
            first_name: "Ava".to_string(),
            last_name: "Barista".to_string(),
            role: "Barista".to_string(),
        }])
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn place_order(&self, request: PlaceOrderRequest) -> Result<i32, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(cause) = &self.fail_with {
            return Err(StoreError::OrderPlacementFailed(cause.clone()));
        }
        if self.exhausted {
            return Err(StoreError::write_pool(bb8::RunError::TimedOut));
        }

        let mut items = Vec::with_capacity(request.items.len());
        for line in &request.items {
            let item = self
                .menu
                .iter()
                .find(|item| item.menu_item_id == line.menu_item_id)
                .ok_or_else(|| {
                    StoreError::OrderPlacementFailed(format!(
                        "menu item {} does not exist",
                        line.menu_item_id
                    ))
                })?;
            items.push(format!("{} (x{})", item.item_name, line.quantity));
        }

        let mut orders = self.orders.lock().unwrap();
        let order_id = orders.len() as i32 + 1;
        orders.push(OrderSummary {
            order_id,
            order_time: Utc::now() + Duration::milliseconds(order_id as i64),
            total_amount: request.total_amount.clone(),
            order_status: OrderStatus::Pending,
            items: items.join(", "),
        });
        self.placed.lock().unwrap().push(request);
        Ok(order_id)
    }

    async fn list_orders(&self) -> Result<Vec<OrderSummary>, StoreError> {
        self.read_check()?;
        let orders = self.orders.lock().unwrap();
        Ok(orders.iter().rev().cloned().collect())
    }
}
