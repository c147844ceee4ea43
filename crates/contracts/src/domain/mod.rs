pub mod inventory;
pub mod purchase;
pub mod settings;
