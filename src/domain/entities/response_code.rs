/// Google Play billing response codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoogleResponseCode {
    Ok,
    /// User pressed back or canceled a dialog.
    UserCanceled,
    /// Billing API version is not supported for the type requested.
    BillingUnavailable,
    /// Requested product is not available for purchase.
    ItemUnavailable,
    /// Invalid arguments provided to the API. Also returned when the
    /// application is not correctly signed or set up for in-app billing.
    DeveloperError,
    /// Fatal error during the API action.
    Error,
    /// Failure to purchase since item is already owned.
    ItemAlreadyOwned,
    /// Failure to consume since item is not owned.
    ItemNotOwned,
    Unknown(i32),
}

impl GoogleResponseCode {
    pub fn code(&self) -> i32 {
        match self {
            GoogleResponseCode::Ok => 0,
            GoogleResponseCode::UserCanceled => 1,
            GoogleResponseCode::BillingUnavailable => 3,
            GoogleResponseCode::ItemUnavailable => 4,
            GoogleResponseCode::DeveloperError => 5,
            GoogleResponseCode::Error => 6,
            GoogleResponseCode::ItemAlreadyOwned => 7,
            GoogleResponseCode::ItemNotOwned => 8,
            GoogleResponseCode::Unknown(code) => *code,
        }
    }

    pub fn is_ok(&self) -> bool {
        *self == GoogleResponseCode::Ok
    }
}

impl From<i32> for GoogleResponseCode {
    fn from(code: i32) -> Self {
        match code {
            0 => GoogleResponseCode::Ok,
            1 => GoogleResponseCode::UserCanceled,
            3 => GoogleResponseCode::BillingUnavailable,
            4 => GoogleResponseCode::ItemUnavailable,
            5 => GoogleResponseCode::DeveloperError,
            6 => GoogleResponseCode::Error,
            7 => GoogleResponseCode::ItemAlreadyOwned,
            8 => GoogleResponseCode::ItemNotOwned,
            other => GoogleResponseCode::Unknown(other),
        }
    }
}

/// Samsung IAP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamsungStatus {
    None,
    /// Failed to initialize the Samsung IAP application.
    Init,
    /// The Samsung IAP application must be upgraded.
    UpgradeRequired,
    Common,
    AlreadyPurchased,
    Configuration,
    InvalidProduct,
    /// Product may have been purchased, confirmation required.
    MayHaveBeenPurchased,
    InvalidItemGroup,
    NetworkUnavailable,
    Io,
    TimeoutSocket,
    TimeoutConnect,
    Unknown(i32),
}

impl SamsungStatus {
    pub fn code(&self) -> i32 {
        match self {
            SamsungStatus::None => 0,
            SamsungStatus::Init => -1000,
            SamsungStatus::UpgradeRequired => -1001,
            SamsungStatus::Common => -1002,
            SamsungStatus::AlreadyPurchased => -1003,
            SamsungStatus::Configuration => -1004,
            SamsungStatus::InvalidProduct => -1005,
            SamsungStatus::MayHaveBeenPurchased => -1006,
            SamsungStatus::InvalidItemGroup => -1007,
            SamsungStatus::NetworkUnavailable => -1008,
            SamsungStatus::Io => -1009,
            SamsungStatus::TimeoutSocket => -1010,
            SamsungStatus::TimeoutConnect => -1011,
            SamsungStatus::Unknown(code) => *code,
        }
    }

    pub fn is_ok(&self) -> bool {
        *self == SamsungStatus::None
    }
}

impl From<i32> for SamsungStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => SamsungStatus::None,
            -1000 => SamsungStatus::Init,
            -1001 => SamsungStatus::UpgradeRequired,
            -1002 => SamsungStatus::Common,
            -1003 => SamsungStatus::AlreadyPurchased,
            -1004 => SamsungStatus::Configuration,
            -1005 => SamsungStatus::InvalidProduct,
            -1006 => SamsungStatus::MayHaveBeenPurchased,
            -1007 => SamsungStatus::InvalidItemGroup,
            -1008 => SamsungStatus::NetworkUnavailable,
            -1009 => SamsungStatus::Io,
            -1010 => SamsungStatus::TimeoutSocket,
            -1011 => SamsungStatus::TimeoutConnect,
            other => SamsungStatus::Unknown(other),
        }
    }
}

/// Vendor-neutral reading of a response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingOutcome {
    Ok,
    Canceled,
    Unavailable,
    DeveloperError,
    AlreadyOwned,
    NotOwned,
    NetworkError,
    Failed,
}

/// Response code as reported by whichever vendor handled the request. The raw
/// code is never altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorResponse {
    Google(GoogleResponseCode),
    Samsung(SamsungStatus),
}

impl VendorResponse {
    pub fn code(&self) -> i32 {
        match self {
            VendorResponse::Google(c) => c.code(),
            VendorResponse::Samsung(s) => s.code(),
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            VendorResponse::Google(c) => c.is_ok(),
            VendorResponse::Samsung(s) => s.is_ok(),
        }
    }

    pub fn outcome(&self) -> BillingOutcome {
        match self {
            VendorResponse::Google(c) => match c {
                GoogleResponseCode::Ok => BillingOutcome::Ok,
                GoogleResponseCode::UserCanceled => BillingOutcome::Canceled,
                GoogleResponseCode::BillingUnavailable | GoogleResponseCode::ItemUnavailable => {
                    BillingOutcome::Unavailable
                }
                GoogleResponseCode::DeveloperError => BillingOutcome::DeveloperError,
                GoogleResponseCode::ItemAlreadyOwned => BillingOutcome::AlreadyOwned,
                GoogleResponseCode::ItemNotOwned => BillingOutcome::NotOwned,
                GoogleResponseCode::Error | GoogleResponseCode::Unknown(_) => {
                    BillingOutcome::Failed
                }
            },
            VendorResponse::Samsung(s) => match s {
                SamsungStatus::None => BillingOutcome::Ok,
                SamsungStatus::Init | SamsungStatus::UpgradeRequired => {
                    BillingOutcome::Unavailable
                }
                SamsungStatus::AlreadyPurchased => BillingOutcome::AlreadyOwned,
                SamsungStatus::Configuration
                | SamsungStatus::InvalidProduct
                | SamsungStatus::InvalidItemGroup => BillingOutcome::DeveloperError,
                SamsungStatus::NetworkUnavailable
                | SamsungStatus::Io
                | SamsungStatus::TimeoutSocket
                | SamsungStatus::TimeoutConnect => BillingOutcome::NetworkError,
                SamsungStatus::Common
                | SamsungStatus::MayHaveBeenPurchased
                | SamsungStatus::Unknown(_) => BillingOutcome::Failed,
            },
        }
    }
}

impl From<GoogleResponseCode> for VendorResponse {
    fn from(code: GoogleResponseCode) -> Self {
        VendorResponse::Google(code)
    }
}

impl From<SamsungStatus> for VendorResponse {
    fn from(status: SamsungStatus) -> Self {
        VendorResponse::Samsung(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_are_preserved() {
        assert_eq!(GoogleResponseCode::from(2), GoogleResponseCode::Unknown(2));
        assert_eq!(GoogleResponseCode::from(2).code(), 2);
        assert_eq!(SamsungStatus::from(-42).code(), -42);
    }

    #[test]
    fn both_vendors_map_already_owned_to_the_same_outcome() {
        let google = VendorResponse::from(GoogleResponseCode::from(7));
        let samsung = VendorResponse::from(SamsungStatus::from(-1003));

        assert_eq!(google.outcome(), BillingOutcome::AlreadyOwned);
        assert_eq!(samsung.outcome(), BillingOutcome::AlreadyOwned);
        assert!(!google.is_ok());
        assert!(VendorResponse::from(SamsungStatus::None).is_ok());
    }
}
