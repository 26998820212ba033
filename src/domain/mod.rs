//! Domain layer - Core business logic and rules
//!
//! This layer contains:
//! - Value Objects: Immutable objects without identity
//! - Ports: Interfaces to externally-owned capabilities
//! - Domain Services: Operations that don't fit in a single aggregate

pub mod call;
pub mod phone;
pub mod shared;

// Re-export commonly used types
pub use shared::RecipientId;
