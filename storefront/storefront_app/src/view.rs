use catalog::availability::Availability;
use catalog::part::{Part, PartId, PartStatus};
use catalog::pricing::PriceDisplay;
use i18n::fluent_argument_helpers::{build_fluent_args, Arg};
use i18n::Language;
use strum::IntoEnumIterator;

use crate::chat::{ChatMessage, ChatSession};
use crate::Model;

#[derive(serde::Serialize, serde::Deserialize, Default, PartialEq, Debug, Clone)]
pub struct StorefrontViewModel {
    pub active_view: ActiveView,
    pub theme: Theme,
    pub language: Language,
    pub query: String,
    pub search: SearchView,
    pub bom_modal: Option<BomModalView>,
    pub toast: Option<String>,
    pub chat: ChatView,
    pub error: Option<(chrono::DateTime<chrono::Utc>, String)>,
}

#[derive(serde::Serialize, serde::Deserialize, Default, PartialEq, Eq, Debug, Clone, Copy)]
#[derive(strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ActiveView {
    #[default]
    Home,
    Search,
}

#[derive(serde::Serialize, serde::Deserialize, Default, PartialEq, Eq, Debug, Clone, Copy)]
#[derive(strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Default, PartialEq, Debug, Clone)]
pub struct SearchView {
    /// e.g. 'DATA_QUERY: stm32' or 'ALL'
    pub title: String,
    /// e.g. '3 RECORDS FOUND'
    pub records_found: String,
    pub hit_count: usize,
    pub parts: Vec<PartItem>,
    pub manufacturers: Vec<ManufacturerFacetItem>,
    pub availability: Vec<AvailabilityFacetItem>,
    /// Present when nothing matches.
    pub empty_state: Option<EmptyStateView>,
    pub request_quote_label: String,
}

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug, Clone)]
pub struct PartItem {
    pub id: PartId,
    pub mpn: String,
    pub manufacturer: String,
    pub description: String,
    pub stock: u32,
    pub status: PartStatus,
    pub price: PriceDisplay,
    pub currency: String,
    pub datasheet_url: Option<String>,
    pub rohs: bool,
}

impl From<&Part> for PartItem {
    fn from(part: &Part) -> Self {
        Self {
            id: part.id.clone(),
            mpn: part.mpn.clone(),
            manufacturer: part.manufacturer.clone(),
            description: part.description.clone(),
            stock: part.stock,
            status: part.status,
            price: PriceDisplay::for_part(part),
            currency: part.currency.clone(),
            datasheet_url: part.datasheet_url.clone(),
            rohs: part.rohs,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct ManufacturerFacetItem {
    pub manufacturer: String,
    pub selected: bool,
}

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct AvailabilityFacetItem {
    pub availability: Availability,
    pub label: String,
    pub selected: bool,
}

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct EmptyStateView {
    pub message: String,
    pub clear_filters_label: String,
}

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct BomModalView {
    pub title: String,
    /// Translated validation message of the last rejected submission.
    pub error: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Default, PartialEq, Eq, Debug, Clone)]
pub struct ChatView {
    pub active: bool,
    pub visible: bool,
    pub typing: bool,
    pub agent_name: String,
    pub messages: Vec<ChatMessage>,
}

pub(crate) fn build_view_model(model: &Model) -> StorefrontViewModel {
    let language = model.language;

    StorefrontViewModel {
        active_view: model.active_view,
        theme: model.theme,
        language,
        query: model.filter.query.clone(),
        search: build_search_view(model),
        bom_modal: model
            .bom_modal
            .as_ref()
            .map(|bom_modal| BomModalView {
                title: i18n::tr(language, "bom-modal-title"),
                error: bom_modal
                    .error
                    .as_ref()
                    .map(|error| i18n::tr(language, error.message_key())),
            }),
        toast: model
            .toast
            .as_ref()
            .map(|toast| i18n::tr(language, toast.key)),
        chat: build_chat_view(language, model.chat.as_ref(), model.chat_visible),
        error: model.error.clone(),
    }
}

fn build_search_view(model: &Model) -> SearchView {
    let language = model.language;
    let filter = &model.filter;

    let parts: Vec<PartItem> = model
        .catalog
        .as_ref()
        .map(|catalog| {
            catalog
                .search(filter)
                .into_iter()
                .map(PartItem::from)
                .collect()
        })
        .unwrap_or_default();

    let manufacturers = model
        .catalog
        .as_ref()
        .map(|catalog| {
            catalog
                .manufacturers()
                .iter()
                .map(|manufacturer| ManufacturerFacetItem {
                    manufacturer: manufacturer.clone(),
                    selected: filter
                        .manufacturers
                        .contains(manufacturer),
                })
                .collect()
        })
        .unwrap_or_default();

    let availability = Availability::iter()
        .map(|availability| AvailabilityFacetItem {
            availability,
            label: i18n::tr(language, availability.label_key()),
            selected: filter
                .availability
                .contains(&availability),
        })
        .collect();

    let query = filter.query.trim();
    let title = match query.is_empty() {
        true => i18n::tr(language, "results-query-all"),
        false => i18n::tr_args(
            language,
            "results-query",
            &build_fluent_args(&[("query", Arg::String(query.to_string()))]),
        ),
    };

    let hit_count = parts.len();
    let records_found = i18n::tr_args(
        language,
        "records-found",
        &build_fluent_args(&[("count", Arg::Integer(hit_count as i64))]),
    );

    let empty_state = parts
        .is_empty()
        .then(|| EmptyStateView {
            message: i18n::tr(language, "no-results"),
            clear_filters_label: i18n::tr(language, "clear-filters"),
        });

    SearchView {
        title,
        records_found,
        hit_count,
        parts,
        manufacturers,
        availability,
        empty_state,
        request_quote_label: i18n::tr(language, "request-quote"),
    }
}

fn build_chat_view(language: Language, session: Option<&ChatSession>, visible: bool) -> ChatView {
    let Some(session) = session else {
        return ChatView::default();
    };

    ChatView {
        active: true,
        visible,
        typing: session.is_typing(),
        agent_name: i18n::tr(language, "chat-agent-name"),
        messages: session.messages().to_vec(),
    }
}
