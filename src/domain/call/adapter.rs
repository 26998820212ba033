//! Call UI port and capability provider
//!
//! The call UI is owned by the application shell, not by this crate. It is
//! modeled as a port trait here and implemented in the infrastructure
//! layer. The active implementation can change after startup due to user
//! settings, so consumers go through a [`CallUiProvider`] and fetch the
//! current adapter on every call instead of caching it.

use crate::domain::shared::value_objects::RecipientId;
use std::sync::{Arc, RwLock};

/// Port for the externally-owned call UI
#[cfg_attr(test, mockall::automock)]
pub trait CallUiAdapter: Send + Sync {
    /// Begin an outgoing call to `recipient` and bring up the call screen.
    ///
    /// Fire and forget: call setup runs inside the adapter and its progress
    /// is reported through the call UI itself, never back to the caller.
    fn start_and_show_outgoing_call(&self, recipient: &RecipientId);
}

/// Supplies the currently active call UI adapter
///
/// `None` means no call UI has been configured. Consumers must call
/// [`current`](CallUiProvider::current) once per operation rather than
/// holding on to the result.
pub trait CallUiProvider: Send + Sync {
    fn current(&self) -> Option<Arc<dyn CallUiAdapter>>;
}

/// Process-wide holder for the active call UI adapter
///
/// The adapter can be swapped or removed at any time; readers see whichever
/// value is visible at read time, with no stronger consistency guarantee.
pub struct CallUiRegistry {
    current: RwLock<Option<Arc<dyn CallUiAdapter>>>,
}

impl CallUiRegistry {
    /// Create a registry with no adapter installed
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Make `adapter` the active call UI, replacing any previous one
    pub fn install(&self, adapter: Arc<dyn CallUiAdapter>) {
        *self.current.write().unwrap() = Some(adapter);
    }

    /// Remove the active call UI, if any
    pub fn clear(&self) {
        *self.current.write().unwrap() = None;
    }
}

impl Default for CallUiRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CallUiProvider for CallUiRegistry {
    fn current(&self) -> Option<Arc<dyn CallUiAdapter>> {
        self.current.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullCallUi;

    impl CallUiAdapter for NullCallUi {
        fn start_and_show_outgoing_call(&self, _recipient: &RecipientId) {}
    }

    #[test]
    fn test_registry_starts_empty() {
        let registry = CallUiRegistry::new();
        assert!(registry.current().is_none());
    }

    #[test]
    fn test_install_and_clear() {
        let registry = CallUiRegistry::new();
        registry.install(Arc::new(NullCallUi));
        assert!(registry.current().is_some());

        registry.clear();
        assert!(registry.current().is_none());
    }

    #[test]
    fn test_install_replaces_previous_adapter() {
        let registry = CallUiRegistry::new();

        let first: Arc<dyn CallUiAdapter> = Arc::new(NullCallUi);
        let second: Arc<dyn CallUiAdapter> = Arc::new(NullCallUi);

        registry.install(first.clone());
        registry.install(second.clone());

        let current = registry.current().unwrap();
        assert!(Arc::ptr_eq(&current, &second));
        assert!(!Arc::ptr_eq(&current, &first));
    }
}
