use super::product_type::{PurchaseType, SamsungItemType, SubscriptionPeriod};

/// A catalog item available for purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchasable {
    pub product_id: String,
    pub title: String,
    pub description: String,
    /// Formatted price including the currency sign, excluding tax.
    pub price: String,

    pub details: PurchasableDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PurchasableDetails {
    Google {
        product_type: PurchaseType,
    },
    Samsung {
        image_url: String,
        download_url: String,
        item_type: SamsungItemType,
        /// Only set for subscriptions.
        subscription: Option<SubscriptionPeriod>,
    },
}
