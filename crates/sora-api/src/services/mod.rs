//! Business logic services.

pub mod gateway;
pub mod sora;

pub use gateway::GenerationGateway;
pub use sora::SoraClient;
