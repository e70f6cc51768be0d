use std::collections::BTreeSet;
use std::path::PathBuf;

use catalog::availability::Availability;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::args::{AvailabilityArg, LanguageArg};
use storefront_app::{BomSubmission, Event, Source};

#[derive(Parser, Debug)]
#[command(name = "storefront_cli")]
#[command(bin_name = "storefront_cli")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    #[command(subcommand)]
    pub(crate) command: StorefrontCommand,

    /// Catalog, a CSV file, or 'builtin'
    #[arg(long, global = true, value_name = "CSV|builtin", default_value = "builtin")]
    pub(crate) catalog: Source,

    /// Language
    #[arg(long, global = true, value_enum, default_value = "en")]
    pub(crate) language: LanguageArg,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub(crate) trace: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbose: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum StorefrontCommand {
    /// Search the catalog
    Search {
        /// Text to find in the MPN, manufacturer or description
        #[arg(long, default_value = "")]
        query: String,

        /// Only parts from this manufacturer, may be repeated
        #[arg(long = "manufacturer", value_name = "MANUFACTURER")]
        manufacturers: Vec<String>,

        /// Only parts with this availability, may be repeated
        #[arg(long = "availability", value_enum, value_name = "AVAILABILITY")]
        availability: Vec<AvailabilityArg>,
    },
    /// List the manufacturers in the catalog
    Manufacturers,
    /// Print the localized text for a key
    Translate {
        /// Translation key, e.g. 'in-stock'
        #[arg(long)]
        key: String,
    },
    /// Submit a bill of materials
    Bom {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// BOM file, e.g. 'bom.csv'
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Chat with the sourcing assistant
    Chat {
        /// Ask for a human sales engineer after the messages are answered
        #[arg(long)]
        human: bool,

        /// Messages to send, in order
        #[arg(required = true, value_name = "MESSAGE")]
        messages: Vec<String>,
    },
}

impl StorefrontCommand {
    /// The events that set up the search, in the order they must be applied.
    pub(crate) fn search_events(
        query: &str,
        manufacturers: &[String],
        availability: &[AvailabilityArg],
    ) -> Vec<Event> {
        let mut events = vec![Event::SetQuery {
            query: query.to_string(),
        }];

        // a repeated value must not toggle the selection off again
        let manufacturers: BTreeSet<&String> = manufacturers.iter().collect();
        events.extend(
            manufacturers
                .into_iter()
                .map(|manufacturer| Event::ToggleManufacturer {
                    manufacturer: manufacturer.clone(),
                }),
        );

        let availability: BTreeSet<Availability> = availability
            .iter()
            .map(|arg| (*arg).into())
            .collect();
        events.extend(
            availability
                .into_iter()
                .map(|availability| Event::ToggleAvailability {
                    availability,
                }),
        );

        events.push(Event::Navigate {
            view: storefront_app::ActiveView::Search,
        });

        events
    }

    pub(crate) fn bom_events(name: &str, email: &str, file: &Option<PathBuf>) -> Vec<Event> {
        vec![Event::OpenBomModal, Event::SubmitBom {
            submission: BomSubmission {
                name: name.to_string(),
                email: email.to_string(),
                file: file.clone(),
            },
        }]
    }
}
