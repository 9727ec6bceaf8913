use async_trait::async_trait;
use thiserror::Error;

use crate::payload::NotificationRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    NotDetermined,
    Denied,
    Authorized,
    Provisional,
    Ephemeral,
}

impl AuthorizationStatus {
    pub fn allows_delivery(self) -> bool {
        matches!(
            self,
            AuthorizationStatus::Authorized
                | AuthorizationStatus::Provisional
                | AuthorizationStatus::Ephemeral
        )
    }
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Notifications are not authorized")]
    NotAuthorized,

    #[error("Notification center rejected request {identifier}: {reason}")]
    Rejected { identifier: String, reason: String },
}

/// The system service that owns pending notifications. Requests are keyed by
/// identifier; adding one replaces whatever was pending under the same key.
#[async_trait]
pub trait NotificationCenter: Send + Sync + 'static {
    async fn request_authorization(&self) -> bool;

    async fn authorization_status(&self) -> AuthorizationStatus;

    async fn add(&self, request: NotificationRequest) -> Result<(), NotificationError>;

    async fn remove_pending(&self, identifier: &str);

    async fn pending(&self, identifier: &str) -> Option<NotificationRequest>;
}

#[cfg(any(test, feature = "test-util"))]
pub mod in_memory {
    use std::{collections::HashMap, time::Duration};

    use async_trait::async_trait;
    use tokio::{sync::RwLock, time};

    use super::{AuthorizationStatus, NotificationCenter, NotificationError};
    use crate::payload::NotificationRequest;

    /// Keeps pending requests in a map. Authorization and failures are
    /// switched by hand.
    pub struct InMemoryNotificationCenter {
        status: RwLock<AuthorizationStatus>,
        grant_on_request: bool,
        fail_adds: RwLock<bool>,
        add_delay: RwLock<Duration>,
        pending: RwLock<HashMap<String, NotificationRequest>>,
        added: RwLock<Vec<NotificationRequest>>,
    }

    impl InMemoryNotificationCenter {
        pub fn new(status: AuthorizationStatus, grant_on_request: bool) -> Self {
            Self {
                status: RwLock::new(status),
                grant_on_request,
                fail_adds: RwLock::new(false),
                add_delay: RwLock::new(Duration::ZERO),
                pending: RwLock::new(HashMap::new()),
                added: RwLock::new(Vec::new()),
            }
        }

        pub fn authorized() -> Self {
            Self::new(AuthorizationStatus::Authorized, true)
        }

        pub async fn set_status(&self, status: AuthorizationStatus) {
            *self.status.write().await = status;
        }

        pub async fn set_fail_adds(&self, fail: bool) {
            *self.fail_adds.write().await = fail;
        }

        /// Makes every `add` wait before it lands, like a slow confirmation.
        pub async fn set_add_delay(&self, delay: Duration) {
            *self.add_delay.write().await = delay;
        }

        pub async fn pending_count(&self) -> usize {
            self.pending.read().await.len()
        }

        /// Every request ever added, in order.
        pub async fn added(&self) -> Vec<NotificationRequest> {
            self.added.read().await.clone()
        }
    }

    #[async_trait]
    impl NotificationCenter for InMemoryNotificationCenter {
        async fn request_authorization(&self) -> bool {
            let status = if self.grant_on_request {
                AuthorizationStatus::Authorized
            } else {
                AuthorizationStatus::Denied
            };
            *self.status.write().await = status;

            self.grant_on_request
        }

        async fn authorization_status(&self) -> AuthorizationStatus {
            *self.status.read().await
        }

        async fn add(&self, request: NotificationRequest) -> Result<(), NotificationError> {
            let delay = *self.add_delay.read().await;
            if !delay.is_zero() {
                time::sleep(delay).await;
            }

            if *self.fail_adds.read().await {
                return Err(NotificationError::Rejected {
                    identifier: request.identifier,
                    reason: "configured to fail".to_owned(),
                });
            }

            self.added.write().await.push(request.clone());
            self.pending
                .write()
                .await
                .insert(request.identifier.clone(), request);

            Ok(())
        }

        async fn remove_pending(&self, identifier: &str) {
            self.pending.write().await.remove(identifier);
        }

        async fn pending(&self, identifier: &str) -> Option<NotificationRequest> {
            self.pending.read().await.get(identifier).cloned()
        }
    }
}
