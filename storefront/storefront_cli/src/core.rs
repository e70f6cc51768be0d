use std::sync::Arc;
use std::thread::sleep;

use anyhow::anyhow;
use crossbeam_channel::Sender;
use crux_core::Request;
use storefront_app::effects::delay::DelayOperation;
use storefront_app::{Effect, Event, Storefront};
use tracing::{debug, trace};

pub type Core = Arc<crux_core::Core<Storefront>>;

pub fn new() -> Core {
    Arc::new(crux_core::Core::new())
}

pub fn update(core: &Core, event: Event, tx: &Arc<Sender<Effect>>) -> anyhow::Result<()> {
    trace!("event: {:?}", event);

    for effect in core.process_event(event) {
        process_effect(core, effect, tx)?;
    }
    Ok(())
}

/// Block the calling thread for the requested time, then hand the outcome back to the core.
pub fn resolve_delay(
    core: &Core,
    mut request: Request<DelayOperation>,
    tx: &Arc<Sender<Effect>>,
) -> anyhow::Result<()> {
    debug!("Waiting. millis: {}", request.operation.millis);
    sleep(request.operation.duration());

    for effect in core.resolve(&mut request, ())? {
        process_effect(core, effect, tx)?;
    }
    Ok(())
}

pub fn process_effect(_core: &Core, effect: Effect, tx: &Arc<Sender<Effect>>) -> anyhow::Result<()> {
    trace!("effect: {:?}", effect);

    tx.send(effect)
        .map_err(|e| anyhow!("{:?}", e))?;

    Ok(())
}
