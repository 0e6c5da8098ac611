//! Domain layer for the static credential validator plugin.

pub mod client;
pub mod service;

pub use service::Service;
