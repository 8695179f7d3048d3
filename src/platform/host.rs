use std::sync::Arc;

use async_trait::async_trait;

use super::{
    intent::{Intent, PendingIntent},
    remote::RemoteError,
};

/// The activity hosting the billing adapters.
///
/// Purchase flows are launched through it, and their outcome comes back
/// through the host's activity-result callback, which the caller forwards to
/// the adapter's `on_activity_result`.
pub trait HostActivity: Send + Sync {
    fn package_name(&self) -> &str;

    fn start_intent_sender_for_result(
        &self,
        intent: &PendingIntent,
        request_code: i32,
    ) -> Result<(), String>;

    fn start_activity_for_result(&self, intent: Intent, request_code: i32) -> Result<(), String>;

    fn start_activity(&self, intent: Intent) -> Result<(), String>;

    fn is_package_installed(&self, package_name: &str) -> bool;

    /// Hash code of the first signing certificate of the given package, or
    /// `None` if the package is not installed.
    fn package_signature_hash(&self, package_name: &str) -> Option<i32>;
}

/// Binds to a remote service of type `S`.
#[async_trait]
pub trait ServiceConnector<S: ?Sized + Send + Sync>: Send + Sync {
    async fn bind(&self, intent: &Intent) -> Result<Arc<S>, RemoteError>;

    async fn unbind(&self);
}
