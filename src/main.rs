mod app;
mod appsettings;
mod delivery;

use std::sync::Arc;

use app::{App, AppParts};
use appsettings::AppSettings;
use delivery::LogDelivery;
use moyu_lifespan::CountdownCalculator;
use moyu_models::language::Language;
use moyu_quotes::{DailyQuoteProvider, QuoteCorpus};
use moyu_scheduler::LocalNotificationCenter;
use moyu_storage::{InMemorySettingsStore, SettingsStore};

async fn seed_store(settings: &AppSettings) -> anyhow::Result<Arc<dyn SettingsStore>> {
    let store = InMemorySettingsStore::new();
    for (key, value) in settings.profile.store_entries() {
        store.set(key, value).await?;
    }

    Ok(Arc::new(store))
}

fn notification_center(settings: &AppSettings) -> LocalNotificationCenter {
    let authorized = settings.notifications.authorized;
    if settings.profile.onboarding_complete.unwrap_or(false) {
        LocalNotificationCenter::answered(Arc::new(LogDelivery), authorized)
    } else {
        LocalNotificationCenter::new(Arc::new(LogDelivery), authorized)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()))
        .init();

    let settings = AppSettings::load()?;
    let timezone = settings.timezone()?;
    log::info!("Starting in timezone {timezone}");

    let quotes = Arc::new(
        DailyQuoteProvider::new(QuoteCorpus::builtin(), timezone)
            .with_anchor(settings.quotes.anchor_date),
    );
    let center = Arc::new(notification_center(&settings));
    let parts = AppParts {
        store: seed_store(&settings).await?,
        center,
        quotes,
        countdown: CountdownCalculator::new(settings.lifespan.table(), timezone),
        timezone,
        birth_date_min: settings.birth_date_min,
    };

    let default_language = Language::resolve_preferred(settings.preferred_languages.as_slice());
    let mut app = App::load(parts, default_language).await?;

    if !app.settings().onboarding_complete {
        app.request_notification_authorization().await?;
        app.complete_onboarding().await?;
    }
    app.configure_notifications_on_launch().await?;

    let countdown = app.countdown();
    if countdown.is_bonus() {
        log::info!(
            "{} bonus days past {}",
            countdown.absolute_days(),
            countdown.end_date
        );
    } else {
        log::info!(
            "{} days left until {}",
            countdown.absolute_days(),
            countdown.end_date
        );
    }
    log::info!("Quote of the day: {}", app.daily_quote_text());

    match app.pending_reminder().await {
        Some(request) => log::info!(
            "Next reminder at {}: {}",
            request.payload.trigger_at,
            request.payload.body
        ),
        None => log::info!("No daily reminder pending"),
    }

    tokio::signal::ctrl_c().await?;
    log::info!("Shutting down");

    Ok(())
}
