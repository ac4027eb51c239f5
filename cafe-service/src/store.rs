use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{pooled_connection::bb8::Pool, AsyncConnection, AsyncPgConnection, RunQueryDsl};
use shared::*;
use tracing::{error, info};

use crate::error::StoreError;
use crate::models::*;
use crate::schema::*;

pub type DbPool = Pool<AsyncPgConnection>;

const ITEM_SEPARATOR: &str = ", ";

#[async_trait]
pub trait CatalogReader: Send + Sync {
    async fn list_menu(&self) -> Result<Vec<MenuItem>, StoreError>;
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, StoreError>;
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Writes the order header and all of its lines in one transaction and
    /// returns the new order id. Either everything is committed or nothing is.
    async fn place_order(&self, request: PlaceOrderRequest) -> Result<i32, StoreError>;

    /// Current orders, most recent first.
    async fn list_orders(&self) -> Result<Vec<OrderSummary>, StoreError>;
}

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogReader for PgStore {
    async fn list_menu(&self) -> Result<Vec<MenuItem>, StoreError> {
        let mut conn = self.pool.get().await.map_err(StoreError::read_pool)?;

        let rows: Vec<DbMenuItem> = menu::table
            .select(DbMenuItem::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| StoreError::CatalogUnavailable(e.to_string()))?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let mut conn = self.pool.get().await.map_err(StoreError::read_pool)?;

        let rows: Vec<DbInventoryItem> = inventory::table
            .select(DbInventoryItem::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| StoreError::CatalogUnavailable(e.to_string()))?;

        Ok(rows.into_iter().map(InventoryItem::from).collect())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let mut conn = self.pool.get().await.map_err(StoreError::read_pool)?;

        let rows: Vec<DbEmployee> = employees::table
            .select(DbEmployee::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| StoreError::CatalogUnavailable(e.to_string()))?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }
}

#[async_trait]
impl OrderStore for PgStore {
    async fn place_order(&self, request: PlaceOrderRequest) -> Result<i32, StoreError> {
        // The pooled connection goes back to the pool when `conn` drops, on
        // every path out of this function.
        let mut conn = self.pool.get().await.map_err(StoreError::write_pool)?;

        let new_order = NewOrder::pending(&request);
        let items = request.items;

        let order_id = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                Box::pin(async move {
                    let order_id = diesel::insert_into(orders::table)
                        .values(&new_order)
                        .returning(orders::order_id)
                        .get_result::<i32>(conn)
                        .await?;

                    let details: Vec<NewOrderDetail> = items
                        .iter()
                        .map(|line| NewOrderDetail::for_order(order_id, line))
                        .collect();

                    diesel::insert_into(order_details::table)
                        .values(&details)
                        .execute(conn)
                        .await?;

                    Ok(order_id)
                })
            })
            .await
            .map_err(|e| {
                error!("Order placement rolled back: {}", e);
                StoreError::OrderPlacementFailed(e.to_string())
            })?;

        info!("Committed order {}", order_id);
        Ok(order_id)
    }

    async fn list_orders(&self) -> Result<Vec<OrderSummary>, StoreError> {
        let mut conn = self.pool.get().await.map_err(StoreError::read_pool)?;

        let rows = orders::table
            .inner_join(order_details::table.inner_join(menu::table))
            .select((
                orders::order_id,
                orders::order_time,
                orders::total_amount,
                orders::order_status,
                menu::item_name,
                order_details::quantity,
            ))
            .order((
                orders::order_time.desc(),
                orders::order_id.desc(),
                order_details::order_detail_id.asc(),
            ))
            .load::<OrderLineRow>(&mut conn)
            .await
            .map_err(|e| StoreError::CatalogUnavailable(e.to_string()))?;

        summarize(rows)
    }
}

/// Folds joined line rows into one summary per order. Rows must arrive grouped
/// by order, in the order the summaries should be returned.
pub fn summarize(rows: Vec<OrderLineRow>) -> Result<Vec<OrderSummary>, StoreError> {
    let mut summaries: Vec<OrderSummary> = Vec::new();

    for row in rows {
        let entry = format!("{} (x{})", row.item_name, row.quantity);

        if let Some(current) = summaries
            .last_mut()
            .filter(|current| current.order_id == row.order_id)
        {
            current.items.push_str(ITEM_SEPARATOR);
            current.items.push_str(&entry);
            continue;
        }

        let order_status = row
            .order_status
            .parse::<OrderStatus>()
            .map_err(StoreError::Corrupted)?;

        summaries.push(OrderSummary {
            order_id: row.order_id,
            order_time: row.order_time,
            total_amount: row.total_amount,
            order_status,
            items: entry,
        });
    }

    Ok(summaries)
}
