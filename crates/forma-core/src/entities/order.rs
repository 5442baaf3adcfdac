use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::OrderStatus;
use crate::ids::RecordId;

/// One line of an order: a product and how many of it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: Option<RecordId>,
    #[serde(deserialize_with = "integral_quantity")]
    #[schemars(range(min = 1, max = 4_294_967_295_u32))]
    pub quantity: u32,
}

/// Accept any JSON number the schema calls an integer, including `2.0`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn integral_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(serde::de::Error::custom(format!(
            "quantity {value} is not a whole number in range"
        )))
    }
}

/// Input shape of an order, before defaults and timestamps are applied.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[schemars(extend("exclusiveMinimum" = 0))]
    pub order_price: f64,
    #[serde(default)]
    pub customer: Option<RecordId>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    pub address: String,
    #[serde(default)]
    pub status: OrderStatus,
}

impl NewOrder {
    #[must_use]
    pub fn into_record(self, now: DateTime<Utc>) -> Order {
        Order {
            order_price: self.order_price,
            customer: self.customer,
            order_items: self.order_items,
            address: self.address,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A normalized order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_price: f64,
    pub customer: Option<RecordId>,
    pub order_items: Vec<OrderItem>,
    pub address: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
