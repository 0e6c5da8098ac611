//! Domain layer for credential auth.

pub mod error;
pub mod lease;
pub mod local_client;
pub mod policies;
pub mod service;


pub use error::DomainError;
pub use local_client::CredentialAuthLocalClient;
pub use service::Service;
