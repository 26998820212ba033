//! Dialout - outbound call initiation for a messaging client
//!
//! Normalizes user-entered phone handles into canonical E.164 recipient
//! identifiers and hands call startup to the application's call UI adapter,
//! which may be absent or reconfigured at runtime.

pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use domain::call::{CallUiAdapter, CallUiProvider, CallUiRegistry, OutboundCallInitiator};
pub use domain::phone::{PhoneNumber, PhoneParseError};
pub use domain::shared::RecipientId;
