use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use shared::*;

use crate::schema::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = menu)]
pub struct DbMenuItem {
    pub menu_item_id: i32,
    pub item_name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = inventory)]
pub struct DbInventoryItem {
    pub inventory_id: i32,
    pub item_name: String,
    pub current_stock: i32,
    pub reorder_level: i32,
    pub unit: String,
    pub supplier_name: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
pub struct DbEmployee {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub customer_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub total_amount: BigDecimal,
    pub order_status: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = order_details)]
pub struct NewOrderDetail {
    pub order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub price_at_purchase: BigDecimal,
}

/// One order line joined with its order header and menu name, as loaded by
/// the listing query.
#[derive(Debug, Clone, Queryable)]
pub struct OrderLineRow {
    pub order_id: i32,
    pub order_time: DateTime<Utc>,
    pub total_amount: BigDecimal,
    pub order_status: String,
    pub item_name: String,
    pub quantity: i32,
}

impl NewOrder {
    pub fn pending(request: &PlaceOrderRequest) -> Self {
        Self {
            customer_id: request.customer_id,
            employee_id: request.employee_id,
            total_amount: request.total_amount.clone(),
            order_status: OrderStatus::Pending.to_string(),
        }
    }
}

impl NewOrderDetail {
    pub fn for_order(order_id: i32, line: &OrderLineInput) -> Self {
        Self {
            order_id,
            menu_item_id: line.menu_item_id,
            quantity: line.quantity,
            price_at_purchase: line.price.clone(),
        }
    }
}

impl From<DbMenuItem> for MenuItem {
    fn from(row: DbMenuItem) -> Self {
        Self {
            menu_item_id: row.menu_item_id,
            item_name: row.item_name,
            price: row.price,
            description: row.description,
        }
    }
}

impl From<DbInventoryItem> for InventoryItem {
    fn from(row: DbInventoryItem) -> Self {
        Self {
            inventory_id: row.inventory_id,
            item_name: row.item_name,
            current_stock: row.current_stock,
            reorder_level: row.reorder_level,
            unit: row.unit,
            supplier_name: row.supplier_name,
        }
    }
}

impl From<DbEmployee> for Employee {
    fn from(row: DbEmployee) -> Self {
        Self {
            employee_id: row.employee_id,
            first_name: row.first_name,
            last_name: row.last_name,
            role: row.role,
        }
    }
}
