use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Opaque string key/value store the user settings live in.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> anyhow::Result<()>;
}

#[derive(Default)]
pub struct InMemorySettingsStore {
    store: RwLock<HashMap<String, String>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = values
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self {
            store: RwLock::new(store),
        }
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let store = self.store.read().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> anyhow::Result<()> {
        let mut store = self.store.write().await;
        store.insert(key.to_owned(), value);
        Ok(())
    }
}
