pub mod accent;
pub mod actions;
pub mod api_utils;
pub mod callbacks;
pub mod dom;
pub mod filter;
pub mod form;
pub mod modal;
