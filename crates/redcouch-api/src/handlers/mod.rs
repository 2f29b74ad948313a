//! HTTP request handlers.
//!
//! `dispatch` carries the canned-response fallback shared by every handler
//! variant; `api` carries the standalone server routes and the smoke-test
//! responder. Handlers stay thin: response shaping lives in
//! [`crate::dispatch`], persistence behind
//! [`redcouch_core::GreetingStore`].

pub mod api;
pub mod dispatch;

pub use api::{api_echo, api_hello, api_ping, smoke};
pub use dispatch::dispatch_request;
