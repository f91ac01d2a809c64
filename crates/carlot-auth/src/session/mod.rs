//! Session token lifecycle.

pub mod service;

pub use service::SessionService;
