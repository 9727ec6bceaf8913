use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
    time::{self, Instant},
};
use tokio_util::sync::CancellationToken;

use crate::{
    center::{AuthorizationStatus, NotificationCenter, NotificationError},
    payload::{NotificationPayload, NotificationRequest},
    trigger::next_trigger,
};

const CANCEL_TIMEOUT: Duration = Duration::from_secs(5);

/// Where a fired notification ends up.
#[async_trait]
pub trait NotificationDelivery: Send + Sync + 'static {
    async fn deliver(&self, payload: &NotificationPayload);
}

struct ScheduledTask {
    task_handle: JoinHandle<()>,
    cancellation_token: CancellationToken,
    request: NotificationRequest,
}

impl ScheduledTask {
    async fn cancel(self, timeout: Duration) {
        self.cancellation_token.cancel();
        let _ = time::timeout(timeout, self.task_handle).await;
    }
}

/// In-process notification center: one tokio task per pending request that
/// sleeps until the trigger and hands the payload to a [`NotificationDelivery`].
///
/// Repeating requests re-arm for the next matching wall-clock time and keep
/// their content, like a calendar trigger does.
pub struct LocalNotificationCenter {
    grants_authorization: bool,
    status: RwLock<AuthorizationStatus>,
    tasks: Mutex<HashMap<String, ScheduledTask>>,
    delivery: Arc<dyn NotificationDelivery>,
}

impl LocalNotificationCenter {
    /// A center that has never asked for permission.
    pub fn new(delivery: Arc<dyn NotificationDelivery>, grants_authorization: bool) -> Self {
        Self::with_status(
            delivery,
            grants_authorization,
            AuthorizationStatus::NotDetermined,
        )
    }

    /// A center whose permission prompt was answered on an earlier run.
    pub fn answered(delivery: Arc<dyn NotificationDelivery>, grants_authorization: bool) -> Self {
        Self::with_status(
            delivery,
            grants_authorization,
            answer_status(grants_authorization),
        )
    }

    fn with_status(
        delivery: Arc<dyn NotificationDelivery>,
        grants_authorization: bool,
        status: AuthorizationStatus,
    ) -> Self {
        Self {
            grants_authorization,
            status: RwLock::new(status),
            tasks: Mutex::new(HashMap::new()),
            delivery,
        }
    }

    fn spawn_task(&self, request: NotificationRequest) -> ScheduledTask {
        let cancellation_token = CancellationToken::new();
        let task_cancellation_token = cancellation_token.child_token();
        let delivery = Arc::clone(&self.delivery);
        let task_request = request.clone();

        let task_handle = tokio::spawn(async move {
            run_request(task_request, delivery, task_cancellation_token).await;
        });

        ScheduledTask {
            task_handle,
            cancellation_token,
            request,
        }
    }
}

#[async_trait]
impl NotificationCenter for LocalNotificationCenter {
    async fn request_authorization(&self) -> bool {
        let status = answer_status(self.grants_authorization);
        *self.status.write().await = status;
        log::info!("Notification authorization requested, status = {status:?}");

        self.grants_authorization
    }

    async fn authorization_status(&self) -> AuthorizationStatus {
        *self.status.read().await
    }

    async fn add(&self, request: NotificationRequest) -> Result<(), NotificationError> {
        if !self.authorization_status().await.allows_delivery() {
            return Err(NotificationError::NotAuthorized);
        }

        let mut tasks = self.tasks.lock().await;
        if let Some(previous) = tasks.remove(&request.identifier) {
            previous.cancel(CANCEL_TIMEOUT).await;
        }

        log::info!(
            "Arming notification {} for {}",
            request.identifier,
            request.payload.trigger_at
        );
        let task = self.spawn_task(request);
        tasks.insert(task.request.identifier.clone(), task);

        Ok(())
    }

    async fn remove_pending(&self, identifier: &str) {
        let task = self.tasks.lock().await.remove(identifier);
        if let Some(task) = task {
            log::info!("Removing pending notification {identifier}");
            task.cancel(CANCEL_TIMEOUT).await;
        }
    }

    async fn pending(&self, identifier: &str) -> Option<NotificationRequest> {
        let tasks = self.tasks.lock().await;
        tasks
            .get(identifier)
            .filter(|task| !task.task_handle.is_finished())
            .map(|task| task.request.clone())
    }
}

fn answer_status(granted: bool) -> AuthorizationStatus {
    if granted {
        AuthorizationStatus::Authorized
    } else {
        AuthorizationStatus::Denied
    }
}

async fn run_request(
    request: NotificationRequest,
    delivery: Arc<dyn NotificationDelivery>,
    cancellation_token: CancellationToken,
) {
    let mut payload = request.payload;
    let first_delay = (payload.trigger_at - chrono::Utc::now())
        .to_std()
        .unwrap_or(Duration::ZERO);
    let mut deadline = Instant::now() + first_delay;

    loop {
        tokio::select! {
            _ = cancellation_token.cancelled() => {
                log::debug!("Notification {} was cancelled", request.identifier);
                return;
            },
            _ = time::sleep_until(deadline) => {
                delivery.deliver(&payload).await;
            }
        }

        if !request.spec.repeats {
            return;
        }

        let next = next_trigger(&request.spec, payload.trigger_at);
        let Ok(gap) = (next - payload.trigger_at).to_std() else {
            log::warn!("Notification {} has no next firing", request.identifier);
            return;
        };
        if gap.is_zero() {
            log::warn!("Notification {} has no next firing", request.identifier);
            return;
        }

        payload.trigger_at = next;
        deadline += gap;
    }
}

#[cfg(test)]
mod tests;
