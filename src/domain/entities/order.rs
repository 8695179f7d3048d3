use chrono::{DateTime, Utc};

use super::product_type::{PurchaseType, SamsungItemType};

/// A completed purchase or subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Vendor order identifier. For Samsung this is the purchase ID.
    pub order_id: String,
    pub product_id: String,
    pub purchase_time: DateTime<Utc>,

    pub details: OrderDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderDetails {
    Google {
        /// Application package from which the purchase originated.
        package_name: String,
        /// Whether the order was queried or purchased as an in-app product or
        /// as a subscription. Not part of the purchase data itself.
        product_type: PurchaseType,
        purchase_state: PurchaseState,
        developer_payload: Option<String>,
        /// Uniquely identifies the purchase for a given product and user pair.
        /// Used to consume or verify it.
        purchase_token: String,
    },
    Samsung {
        product_name: String,
        description: String,
        price: String,
        payment_id: String,
        image_url: String,
        download_url: String,
        item_type: Option<SamsungItemType>,
        /// Only present on freshly completed purchases.
        verify_url: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseState {
    Purchased,
    Canceled,
    Refunded,
    Unknown(i32),
}

impl From<i32> for PurchaseState {
    fn from(state: i32) -> Self {
        match state {
            0 => PurchaseState::Purchased,
            1 => PurchaseState::Canceled,
            2 => PurchaseState::Refunded,
            other => PurchaseState::Unknown(other),
        }
    }
}

impl Order {
    pub fn purchase_token(&self) -> Option<&str> {
        match &self.details {
            OrderDetails::Google { purchase_token, .. } => Some(purchase_token),
            OrderDetails::Samsung { .. } => None,
        }
    }
}
