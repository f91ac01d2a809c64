//! Request and response bodies for both bindings.

pub mod request;
pub mod response;
