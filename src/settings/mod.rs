//! Shop settings
//!
//! The invoice configuration is read from a JSON settings file owned by
//! the shop back-office. This module only reads it.

mod errors;
mod loader;

pub use errors::{SettingsError, SettingsResult};
pub use loader::ShopSettings;
