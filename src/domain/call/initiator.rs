//! Outbound call initiation
//!
//! Stateless pass-through from a user-entered phone handle (or an already
//! normalized recipient identifier) to the active call UI adapter. Two
//! decision points, both terminal: does the handle parse, and is an adapter
//! installed.

use crate::domain::call::adapter::CallUiProvider;
use crate::domain::phone::PhoneNumber;
use crate::domain::shared::value_objects::RecipientId;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Creates an outbound call via the active call UI
pub struct OutboundCallInitiator {
    default_country_code: String,
    call_ui: Arc<dyn CallUiProvider>,
}

impl OutboundCallInitiator {
    /// `call_ui` is consulted afresh on every initiation; the active
    /// adapter can change after startup due to user settings.
    pub fn new(
        default_country_code: impl Into<String>,
        call_ui: Arc<dyn CallUiProvider>,
    ) -> Self {
        Self {
            default_country_code: default_country_code.into(),
            call_ui,
        }
    }

    /// Initiate a call from a user-formatted phone number, e.g. from a
    /// system contacts entry.
    ///
    /// Returns `false` when no recipient can be derived from the handle;
    /// otherwise behaves like [`initiate`](Self::initiate) with the derived
    /// recipient.
    pub fn initiate_from_handle(&self, handle: &str) -> bool {
        info!("Initiating outbound call for handle: {}", handle);

        let recipient =
            match PhoneNumber::from_user_text(handle, &self.default_country_code) {
                Ok(number) => number.recipient_id(),
                Err(err) => {
                    warn!("Unable to derive recipient from handle {:?}: {}", handle, err);
                    return false;
                }
            };

        self.initiate(&recipient)
    }

    /// Initiate a call to an already-normalized recipient identifier.
    ///
    /// Returns `true` once the call UI has been instructed to start and
    /// show the call; whether the call eventually connects is not reported
    /// through this return value.
    pub fn initiate(&self, recipient: &RecipientId) -> bool {
        // Fetched per call, never cached: the adapter can be reconfigured
        // at runtime.
        let Some(call_ui) = self.call_ui.current() else {
            debug_assert!(false, "no call UI adapter installed");
            error!(
                "Cannot initiate call to {}: no call UI adapter installed",
                recipient
            );
            return false;
        };

        call_ui.start_and_show_outgoing_call(recipient);
        true
    }
}
