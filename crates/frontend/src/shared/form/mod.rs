//! Asynchronous form submission.
//!
//! Every `<form>` of the page is intercepted, posted in the background and
//! its answer rendered next to the submit button. Named callbacks declared
//! with `data-form-callback` / `data-form-error-callback` take over from
//! there (see [`crate::shared::callbacks`]).

pub mod body;
pub mod controller;
pub mod feedback;
pub mod response;
pub mod state;

pub use controller::FormController;
pub use response::{decode_response, ResponseBody, SubmitError};
pub use state::SubmitState;

pub const CALLBACK_ATTR: &str = "data-form-callback";
pub const ERROR_CALLBACK_ATTR: &str = "data-form-error-callback";
