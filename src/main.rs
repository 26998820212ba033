use dialout::config::Config;
use dialout::infrastructure::ui::ChannelCallUi;
use dialout::{CallUiRegistry, OutboundCallInitiator, RecipientId};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Starting Dialout");

    // Load configuration
    let config = Config::load()?;
    info!("Configuration loaded: {:?}", config);

    // The registry is consulted on every initiation, so the active call UI
    // can be swapped after startup.
    let registry = Arc::new(CallUiRegistry::new());

    let (call_ui, mut outgoing) = ChannelCallUi::channel();
    registry.install(Arc::new(call_ui));

    // Application shell: render each outgoing call request
    let ui_loop = tokio::spawn(async move {
        while let Some(recipient) = outgoing.recv().await {
            info!("Call UI: showing outgoing call to {}", recipient);
        }
    });

    let initiator = OutboundCallInitiator::new(
        config.telephony.default_country_code.clone(),
        registry.clone(),
    );

    demo_outbound_calls(&initiator);

    // Dropping the adapter closes the channel and ends the UI loop
    registry.clear();
    ui_loop.await?;

    info!("Dialout finished");

    Ok(())
}

/// Demonstrate the initiation paths
fn demo_outbound_calls(initiator: &OutboundCallInitiator) {
    info!("=== Outbound Call Demo ===");

    let started = initiator.initiate_from_handle("(555) 123-4567");
    info!("Handle '(555) 123-4567' initiated: {}", started);

    let started = initiator.initiate_from_handle("not a number");
    info!("Handle 'not a number' initiated: {}", started);

    let started = initiator.initiate(&RecipientId::new("+15559998888"));
    info!("Recipient '+15559998888' initiated: {}", started);

    info!("=== Outbound Call Demo Complete ===");
}
