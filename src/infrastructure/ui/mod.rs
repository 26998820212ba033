//! Call UI adapter implementations

use crate::domain::call::adapter::CallUiAdapter;
use crate::domain::shared::value_objects::RecipientId;
use tokio::sync::mpsc;
use tracing::warn;

/// Call UI backed by an unbounded channel
///
/// The application shell owns the receiving end and renders an outgoing
/// call screen for every recipient that arrives. Sending never blocks, so
/// the adapter stays usable from synchronous call sites.
pub struct ChannelCallUi {
    tx: mpsc::UnboundedSender<RecipientId>,
}

impl ChannelCallUi {
    /// Create the adapter together with the receiving end of its channel
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<RecipientId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl CallUiAdapter for ChannelCallUi {
    fn start_and_show_outgoing_call(&self, recipient: &RecipientId) {
        if self.tx.send(recipient.clone()).is_err() {
            warn!(
                "Call UI receiver dropped; outgoing call to {} not shown",
                recipient
            );
        }
    }
}
