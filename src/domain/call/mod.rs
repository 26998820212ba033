//! Call bounded context - outbound call initiation

pub mod adapter;
pub mod initiator;

pub use adapter::{CallUiAdapter, CallUiProvider, CallUiRegistry};
pub use initiator::OutboundCallInitiator;
