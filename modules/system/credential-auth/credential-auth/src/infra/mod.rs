//! Adapters from module configuration to the collaborator traits.

pub mod config_store;

pub use config_store::{ConfigLeaseSource, StaticSystemCeiling};
