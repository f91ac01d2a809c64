//! Core type definitions used across the Carlot workspace.

pub mod id;

pub use id::*;
