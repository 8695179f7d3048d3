#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Valid,
    Invalid { reason: String },
    /// The order lacks the identifiers needed to verify it.
    Skipped,
}

impl VerificationOutcome {
    pub fn is_valid(&self) -> bool {
        *self == VerificationOutcome::Valid
    }
}

/// Result of a background verification, delivered over the report channel
/// registered on the adapter.
#[derive(Debug)]
pub struct VerificationReport {
    pub order_id: String,
    pub result: Result<VerificationOutcome, crate::errors::BillingError>,
}
