//! Payloads exchanged between the server-rendered pages and the wasm client.
//!
//! The server answers every asynchronous form post and delete link with one
//! of the envelopes in [`forms`]; page callbacks read the extra fields
//! described in [`domain`].

pub mod domain;
pub mod forms;
