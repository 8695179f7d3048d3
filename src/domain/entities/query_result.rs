use super::response_code::VendorResponse;

/// Items returned by a vendor query, together with the vendor's response
/// code.
///
/// A non-OK response can still carry items: purchase history is paginated,
/// and pages fetched before the failing one are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    pub response: VendorResponse,
    pub items: Vec<T>,
}

impl<T> QueryResult<T> {
    pub fn new(response: impl Into<VendorResponse>, items: Vec<T>) -> Self {
        Self {
            response: response.into(),
            items,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.response.is_ok()
    }
}

/// Outcome of a purchase flow, decoded from the host's activity result.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseResult<T> {
    pub response: VendorResponse,
    pub order: Option<T>,
}
