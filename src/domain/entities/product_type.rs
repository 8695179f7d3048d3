use crate::constants::{GOOGLE_PURCHASE_TYPE_INAPP, GOOGLE_PURCHASE_TYPE_SUBSCRIPTION};

/// Google Play product type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseType {
    InApp,
    Subscription,
}

impl PurchaseType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            PurchaseType::InApp => GOOGLE_PURCHASE_TYPE_INAPP,
            PurchaseType::Subscription => GOOGLE_PURCHASE_TYPE_SUBSCRIPTION,
        }
    }
}

/// Samsung item type, sent to and received from the IAP service as a two
/// character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamsungItemType {
    Consumable,
    NonConsumable,
    Subscription,
    All,
}

impl SamsungItemType {
    pub fn code(&self) -> &'static str {
        match self {
            SamsungItemType::Consumable => "00",
            SamsungItemType::NonConsumable => "01",
            SamsungItemType::Subscription => "02",
            SamsungItemType::All => "10",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "00" => Some(SamsungItemType::Consumable),
            "01" => Some(SamsungItemType::NonConsumable),
            "02" => Some(SamsungItemType::Subscription),
            "10" => Some(SamsungItemType::All),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationUnit {
    Year,
    Month,
    Week,
    Day,
    Unknown(String),
}

impl From<&str> for DurationUnit {
    fn from(unit: &str) -> Self {
        match unit.to_ascii_uppercase().as_str() {
            "YEAR" => DurationUnit::Year,
            "MONTH" => DurationUnit::Month,
            "WEEK" => DurationUnit::Week,
            "DAY" => DurationUnit::Day,
            _ => DurationUnit::Unknown(unit.to_string()),
        }
    }
}

/// Billing period of a Samsung subscription, e.g. 3 x MONTH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionPeriod {
    pub unit: DurationUnit,
    pub multiplier: i32,
}
