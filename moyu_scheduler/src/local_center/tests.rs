use std::sync::Mutex as StdMutex;

use chrono::Utc;
use chrono_tz::Tz;
use moyu_models::{language::Language, reminder::ReminderSpec};
use moyu_quotes::{DailyQuoteProvider, QuoteCorpus};

use super::*;
use crate::payload::build_payload;

type Delivered = Arc<StdMutex<Vec<NotificationPayload>>>;

struct TestDelivery {
    delivered: Delivered,
}

#[async_trait]
impl NotificationDelivery for TestDelivery {
    async fn deliver(&self, payload: &NotificationPayload) {
        self.delivered.lock().unwrap().push(payload.clone());
    }
}

struct TestContext {
    delivered: Delivered,
    center: LocalNotificationCenter,
}

impl TestContext {
    async fn authorized() -> Self {
        let ctx = Self::new(true);
        assert!(ctx.center.request_authorization().await);
        ctx
    }

    fn new(grants_authorization: bool) -> Self {
        let delivered = Arc::new(StdMutex::new(Vec::new()));
        let delivery = TestDelivery {
            delivered: Arc::clone(&delivered),
        };
        let center = LocalNotificationCenter::new(Arc::new(delivery), grants_authorization);

        Self { delivered, center }
    }

    fn delivered_count(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }
}

fn request(hour: u32, minute: u32, repeats: bool) -> NotificationRequest {
    let mut spec = ReminderSpec::daily_at(hour, minute, Tz::UTC).unwrap();
    spec.repeats = repeats;
    let quotes = DailyQuoteProvider::new(QuoteCorpus::builtin(), Tz::UTC);
    let trigger_at = next_trigger(&spec, Utc::now());

    NotificationRequest {
        identifier: "test".to_owned(),
        spec,
        payload: build_payload(trigger_at, Language::English, &quotes),
    }
}

fn delay_until(request: &NotificationRequest) -> Duration {
    (request.payload.trigger_at - Utc::now()).to_std().unwrap()
}

async fn wait(duration: Duration) {
    tokio::time::sleep(duration + Duration::from_secs(1)).await;
}

#[tokio::test(start_paused = true)]
async fn unauthorized_center_rejects_requests() {
    let ctx = TestContext::new(false);

    assert!(!ctx.center.request_authorization().await);
    let result = ctx.center.add(request(8, 0, true)).await;

    assert!(matches!(result, Err(NotificationError::NotAuthorized)));
    assert!(ctx.center.pending("test").await.is_none());
}

#[tokio::test(start_paused = true)]
async fn fresh_center_has_not_asked_yet() {
    let ctx = TestContext::new(true);

    assert_eq!(
        ctx.center.authorization_status().await,
        AuthorizationStatus::NotDetermined
    );
}

#[tokio::test(start_paused = true)]
async fn answered_center_remembers_the_outcome() {
    let delivery = Arc::new(TestDelivery {
        delivered: Arc::new(StdMutex::new(Vec::new())),
    });
    let granted = LocalNotificationCenter::answered(delivery.clone(), true);
    let denied = LocalNotificationCenter::answered(delivery, false);

    assert_eq!(
        granted.authorization_status().await,
        AuthorizationStatus::Authorized
    );
    assert!(granted.add(request(8, 0, true)).await.is_ok());
    assert_eq!(
        denied.authorization_status().await,
        AuthorizationStatus::Denied
    );
    assert!(matches!(
        denied.add(request(8, 0, true)).await,
        Err(NotificationError::NotAuthorized)
    ));
}

#[tokio::test(start_paused = true)]
async fn one_off_request_fires_once() {
    let ctx = TestContext::authorized().await;
    let req = request(12, 0, false);
    let delay = delay_until(&req);

    ctx.center.add(req.clone()).await.unwrap();
    assert_eq!(ctx.center.pending("test").await, Some(req.clone()));

    wait(delay).await;

    assert_eq!(ctx.delivered.lock().unwrap()[..], [req.payload]);
    assert!(ctx.center.pending("test").await.is_none());
}

#[tokio::test(start_paused = true)]
async fn repeating_request_fires_every_day() {
    let ctx = TestContext::authorized().await;
    let req = request(6, 30, true);
    let delay = delay_until(&req);

    ctx.center.add(req.clone()).await.unwrap();
    wait(delay).await;
    assert_eq!(ctx.delivered_count(), 1);

    wait(Duration::from_secs(24 * 60 * 60)).await;

    let delivered = ctx.delivered.lock().unwrap();
    assert_eq!(delivered.len(), 2);
    assert_eq!(
        delivered[1].trigger_at - delivered[0].trigger_at,
        chrono::TimeDelta::days(1)
    );
    assert_eq!(delivered[1].body, delivered[0].body);
}

#[tokio::test(start_paused = true)]
async fn removed_request_never_fires() {
    let ctx = TestContext::authorized().await;
    let req = request(18, 45, true);
    let delay = delay_until(&req);

    ctx.center.add(req).await.unwrap();
    ctx.center.remove_pending("test").await;
    wait(delay).await;

    assert_eq!(ctx.delivered_count(), 0);
    assert!(ctx.center.pending("test").await.is_none());
}

#[tokio::test(start_paused = true)]
async fn adding_under_same_identifier_replaces() {
    let ctx = TestContext::authorized().await;
    let first = request(3, 0, false);
    let second = request(4, 0, false);
    let longest = delay_until(&first).max(delay_until(&second));

    ctx.center.add(first).await.unwrap();
    ctx.center.add(second.clone()).await.unwrap();
    wait(longest).await;

    assert_eq!(ctx.delivered.lock().unwrap()[..], [second.payload]);
}
