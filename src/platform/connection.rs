use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::errors::BillingError;

use super::{host::ServiceConnector, intent::Intent};

/// Binding to a single vendor service.
///
/// The bound proxy is published through a watch channel, so the connected
/// flag and the proxy can never disagree.
pub(crate) struct ServiceConnection<S: ?Sized + Send + Sync> {
    service_name: &'static str,
    intent: Intent,
    connector: Arc<dyn ServiceConnector<S>>,
    state: watch::Sender<Option<Arc<S>>>,
}

impl<S: ?Sized + Send + Sync> ServiceConnection<S> {
    pub(crate) fn new(
        service_name: &'static str,
        intent: Intent,
        connector: Arc<dyn ServiceConnector<S>>,
    ) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            service_name,
            intent,
            connector,
            state,
        }
    }

    pub(crate) async fn connect(&self) -> Result<(), BillingError> {
        if self.is_connected() {
            return Ok(());
        }
        let service = self
            .connector
            .bind(&self.intent)
            .await
            .map_err(|e| BillingError::Bind {
                service: self.service_name.to_string(),
                details: e.to_string(),
            })?;
        self.state.send_replace(Some(service));
        debug!(service = self.service_name, "billing service connected");
        Ok(())
    }

    pub(crate) async fn disconnect(&self) {
        if self.state.send_replace(None).is_some() {
            self.connector.unbind().await;
            debug!(service = self.service_name, "billing service unbound");
        }
    }

    /// The platform dropped the binding (e.g. the vendor process died).
    pub(crate) fn on_service_disconnected(&self) {
        if self.state.send_replace(None).is_some() {
            debug!(service = self.service_name, "billing service disconnected");
        }
    }

    pub(crate) fn service(&self) -> Result<Arc<S>, BillingError> {
        self.state.borrow().clone().ok_or(BillingError::NotConnected)
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.state.borrow().is_some()
    }

    pub(crate) fn watch(&self) -> ConnectionWatcher<S> {
        ConnectionWatcher {
            receiver: self.state.subscribe(),
        }
    }
}

/// Observes connect/disconnect transitions of an adapter.
pub struct ConnectionWatcher<S: ?Sized + Send + Sync> {
    receiver: watch::Receiver<Option<Arc<S>>>,
}

impl<S: ?Sized + Send + Sync> ConnectionWatcher<S> {
    pub fn is_connected(&self) -> bool {
        self.receiver.borrow().is_some()
    }

    /// Waits for the next transition and returns the new connected state, or
    /// `None` once the adapter has been dropped.
    pub async fn changed(&mut self) -> Option<bool> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().is_some())
    }
}
