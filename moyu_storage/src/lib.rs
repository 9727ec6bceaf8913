mod codec;
mod settings_store;

pub use codec::{SettingsDecodeError, keys, load_user_settings, save_user_settings};
pub use settings_store::{InMemorySettingsStore, SettingsStore};
