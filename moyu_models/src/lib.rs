pub mod language;
pub mod quote;
pub mod reminder;
pub mod settings;
pub mod sex;
