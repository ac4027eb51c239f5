use bigdecimal::BigDecimal;
use num_traits::Zero;
use thiserror::Error;

use crate::{MenuItem, OrderLineInput, PlaceOrderRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Menu item {0} is not on the menu")]
    UnknownMenuItem(i32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub menu_item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    /// Price copied from the menu when the line was first added.
    pub unit_price: BigDecimal,
}

impl CartLine {
    pub fn subtotal(&self) -> BigDecimal {
        &self.unit_price * &BigDecimal::from(self.quantity)
    }
}

/// Items picked for one order that has not been submitted yet.
///
/// A cart belongs to a single client session and is passed around by `&mut`;
/// it is never shared between sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `menu_item_id`, looked up in the `menu` snapshot the
    /// client currently holds. Selecting an item already in the cart bumps its
    /// quantity and keeps the price captured on the first add.
    pub fn add_line(&mut self, menu: &[MenuItem], menu_item_id: i32) -> Result<&CartLine, CartError> {
        if let Some(index) = self.position(menu_item_id) {
            self.lines[index].quantity += 1;
            return Ok(&self.lines[index]);
        }

        let item = menu
            .iter()
            .find(|item| item.menu_item_id == menu_item_id)
            .ok_or(CartError::UnknownMenuItem(menu_item_id))?;

        self.lines.push(CartLine {
            menu_item_id,
            item_name: item.item_name.clone(),
            quantity: 1,
            unit_price: item.price.clone(),
        });
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Takes one unit of `menu_item_id` out of the cart, dropping the line when
    /// it reaches zero. Returns false if the item was not in the cart.
    pub fn remove_line(&mut self, menu_item_id: i32) -> bool {
        let Some(index) = self.position(menu_item_id) else {
            return false;
        };

        self.lines[index].quantity -= 1;
        if self.lines[index].quantity < 1 {
            self.lines.remove(index);
        }
        true
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn compute_total(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + line.subtotal())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Builds the placement request for the current lines. An empty cart is
    /// rejected here so it never turns into a store round-trip.
    pub fn to_order_payload(
        &self,
        customer_id: Option<i32>,
        employee_id: Option<i32>,
    ) -> Result<PlaceOrderRequest, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }

        Ok(PlaceOrderRequest {
            customer_id,
            employee_id,
            total_amount: self.compute_total(),
            items: self
                .lines
                .iter()
                .map(|line| OrderLineInput {
                    menu_item_id: line.menu_item_id,
                    quantity: line.quantity,
                    price: line.unit_price.clone(),
                })
                .collect(),
        })
    }

    fn position(&self, menu_item_id: i32) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.menu_item_id == menu_item_id)
    }
}
