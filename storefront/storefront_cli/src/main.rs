use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use crossbeam_channel::unbounded;
use i18n::Language;
use storefront_app::{Effect, Event, StorefrontViewModel};
use tracing::{debug, trace, warn};

use crate::core::Core;
use crate::opts::{Opts, StorefrontCommand};

mod core;
mod opts;
mod output;

/// What the run loop does with delay requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delays {
    /// Sleep, then resolve, so the deferred events happen before the loop returns.
    Wait,
    /// Leave them unresolved, the process exits before they would elapse.
    Skip,
}

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(argfile::parse_fromfile, argfile::PREFIX)?;

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.trace.clone(), opts.verbose.clone())?;

    let language: Language = opts.language.into();

    let core = core::new();
    run_loop(&core, Event::SetLanguage { language }, Delays::Skip)?;

    match opts.command {
        StorefrontCommand::Search {
            query,
            manufacturers,
            availability,
        } => {
            run_loop(&core, Event::LoadCatalog { source: opts.catalog }, Delays::Skip)?;
            for event in StorefrontCommand::search_events(&query, &manufacturers, &availability) {
                run_loop(&core, event, Delays::Skip)?;
            }

            println!("{}", output::search(&core.view()));
        }
        StorefrontCommand::Manufacturers => {
            run_loop(&core, Event::LoadCatalog { source: opts.catalog }, Delays::Skip)?;

            println!("{}", output::manufacturers(language, &core.view()));
        }
        StorefrontCommand::Translate {
            key,
        } => {
            if !i18n::translations().contains(language, &key) {
                warn!("No translation. language: {}, key: {}", language, key);
            }
            println!("{}", i18n::tr(language, &key));
        }
        StorefrontCommand::Bom {
            name,
            email,
            file,
        } => {
            for event in StorefrontCommand::bom_events(&name, &email, &file) {
                run_loop(&core, event, Delays::Skip)?;
            }

            let view = core.view();
            if let Some(toast) = view.toast {
                println!("{}", toast);
            }
        }
        StorefrontCommand::Chat {
            human,
            messages,
        } => {
            run_loop(&core, Event::OpenChat, Delays::Skip)?;
            for text in messages {
                run_loop(&core, Event::SendChatMessage { text }, Delays::Wait)?;
            }
            if human {
                run_loop(&core, Event::RequestHuman, Delays::Skip)?;
            }

            println!("{}", output::chat(&core.view()));

            run_loop(&core, Event::EndChatSession, Delays::Skip)?;
        }
    }

    Ok(())
}

fn run_loop(core: &Core, event: Event, delays: Delays) -> Result<(), anyhow::Error> {
    let (tx, rx) = unbounded::<Effect>();
    let tx = Arc::new(tx);

    core::update(core, event, &tx)?;

    // all effects are produced synchronously, an empty channel means the event has been fully processed.
    while let Ok(effect) = rx.try_recv() {
        trace!("run_loop. effect: {:?}", effect);
        match effect {
            _render @ Effect::Render(_) => {
                let view: StorefrontViewModel = core.view();

                if let Some((_timestamp, error)) = view.error {
                    bail!(error)
                }
            }
            Effect::Delay(request) => match delays {
                Delays::Wait => core::resolve_delay(core, request, &tx)?,
                Delays::Skip => {
                    debug!("Skipping delay. millis: {}", request.operation.millis)
                }
            },
        }
    }
    Ok(())
}
