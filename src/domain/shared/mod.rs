//! Shared kernel - Common types used across all bounded contexts

pub mod value_objects;

pub use value_objects::RecipientId;
