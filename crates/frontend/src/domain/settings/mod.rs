//! Settings page: update archive import, trusted keys and user profile.

mod callbacks;

use crate::shared::actions;
use crate::shared::callbacks::{CallbackId, CallbackRegistry};

pub const IMPORT_PANEL: &str = "#import-log";
pub const IMPORT_TABLE: &str = "#import-log > table";
pub const KEY_TABLE: &str = ".pgp-table > tbody";

pub fn callbacks() -> CallbackRegistry {
    CallbackRegistry::new()
        .with(CallbackId::ImportLog, callbacks::import_log)
        .with(CallbackId::ImportKey, callbacks::import_key)
        .with(CallbackId::UpdateUser, callbacks::update_user)
}

pub fn boot() {
    actions::install_delete("tr");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_settings_forms() {
        let registry = callbacks();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains(CallbackId::ImportKey));
        assert!(registry.contains(CallbackId::UpdateUser));
    }
}
