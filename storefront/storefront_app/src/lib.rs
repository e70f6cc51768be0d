use std::time::SystemTime;

use catalog::availability::Availability;
use catalog::filter::PartFilter;
use catalog::Catalog;
use crux_core::macros::effect;
use crux_core::render::RenderOperation;
pub use crux_core::Core;
use crux_core::{render, App, Command};
use i18n::fluent_argument_helpers::{build_fluent_args, Arg};
pub use i18n::Language;
use thiserror::Error;
use tracing::{debug, info, trace};
pub use util::source::Source;

pub use crate::bom::{BomSubmission, BomValidationError};
pub use crate::chat::{ChatMessage, ChatSender, MessageId, SessionId, Ticket};
use crate::chat::ChatSession;
use crate::effects::delay;
use crate::effects::delay::DelayOperation;
pub use crate::view::*;

pub mod bom;
pub mod chat;
pub mod effects;
mod view;

pub const CHAT_REPLY_DELAY_MILLIS: u64 = 1500;
pub const TOAST_DELAY_MILLIS: u64 = 3000;

#[derive(Default)]
pub struct Storefront;

#[derive(Default)]
pub struct Model {
    catalog: Option<Catalog>,
    filter: PartFilter,

    active_view: ActiveView,
    theme: Theme,
    language: Language,

    bom_modal: Option<BomModal>,

    toast: Option<Toast>,
    last_toast_ticket: u64,

    chat: Option<ChatSession>,
    chat_visible: bool,
    last_chat_session: u64,

    error: Option<(chrono::DateTime<chrono::Utc>, String)>,
}

#[derive(Default)]
struct BomModal {
    error: Option<BomValidationError>,
}

struct Toast {
    ticket: u64,
    key: &'static str,
}

impl Model {
    /// Show a toast, replacing any current one, and schedule its dismissal.
    fn show_toast(&mut self, key: &'static str) -> Command<Effect, Event> {
        self.last_toast_ticket += 1;
        let ticket = self.last_toast_ticket;

        self.toast.replace(Toast {
            ticket,
            key,
        });

        delay::delay(TOAST_DELAY_MILLIS, move || Event::ToastElapsed {
            ticket,
        })
    }

    fn start_chat_session(&mut self) {
        self.last_chat_session += 1;
        let session = ChatSession::new(SessionId(self.last_chat_session), i18n::tr(self.language, "chat-welcome"));
        self.chat.replace(session);
    }
}

#[effect]
pub enum Effect {
    Render(RenderOperation),
    Delay(DelayOperation),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Event {
    None,

    //
    // Catalog and search
    //
    LoadCatalog {
        source: Source,
    },
    SetQuery {
        query: String,
    },
    SubmitSearch,
    Navigate {
        view: ActiveView,
    },
    ToggleManufacturer {
        manufacturer: String,
    },
    ToggleAvailability {
        availability: Availability,
    },
    ClearFilters,

    //
    // Preferences
    //
    SetTheme {
        theme: Theme,
    },
    ToggleTheme,
    SetLanguage {
        language: Language,
    },

    //
    // BOM upload
    //
    OpenBomModal,
    CloseBomModal,
    SubmitBom {
        submission: BomSubmission,
    },

    //
    // Toast
    //
    DismissToast,
    ToastElapsed {
        ticket: u64,
    },

    //
    // Chat
    //
    StartChatSession,
    OpenChat,
    MinimizeChat,
    SendChatMessage {
        text: String,
    },
    ChatReplyElapsed {
        session: SessionId,
        ticket: Ticket,
    },
    RequestHuman,
    EndChatSession,
}

impl Storefront {
    fn update_inner(
        &self,
        event: <Storefront as App>::Event,
    ) -> Box<
        dyn FnOnce(
            &mut <Storefront as App>::Model,
        ) -> Result<Command<<Storefront as App>::Effect, <Storefront as App>::Event>, AppError>,
    > {
        match event {
            Event::None => Box::new(|_model: &mut Model| Ok(render::render())),
            Event::LoadCatalog {
                source,
            } => Box::new(move |model: &mut Model| {
                if model.catalog.is_some() {
                    return Err(AppError::CatalogAlreadyLoaded);
                }

                let catalog = stores::parts::load_catalog(&source).map_err(AppError::CatalogError)?;
                info!(
                    "Catalog ready. parts: {}, manufacturers: {}",
                    catalog.len(),
                    catalog.manufacturers().len()
                );
                model.catalog.replace(catalog);

                Ok(render::render())
            }),
            Event::SetQuery {
                query,
            } => Box::new(move |model: &mut Model| {
                model.filter.query = query;
                Ok(render::render())
            }),
            Event::SubmitSearch => Box::new(|model: &mut Model| {
                if model.filter.query.trim().is_empty() {
                    debug!("Ignoring search, query is blank");
                } else {
                    model.active_view = ActiveView::Search;
                }
                Ok(render::render())
            }),
            Event::Navigate {
                view,
            } => Box::new(move |model: &mut Model| {
                model.active_view = view;
                Ok(render::render())
            }),
            Event::ToggleManufacturer {
                manufacturer,
            } => Box::new(move |model: &mut Model| {
                let selected = model
                    .filter
                    .manufacturers
                    .toggle(manufacturer.clone());
                debug!("Toggled manufacturer. manufacturer: {}, selected: {}", manufacturer, selected);
                Ok(render::render())
            }),
            Event::ToggleAvailability {
                availability,
            } => Box::new(move |model: &mut Model| {
                let selected = model
                    .filter
                    .availability
                    .toggle(availability);
                debug!("Toggled availability. availability: {}, selected: {}", availability, selected);
                Ok(render::render())
            }),
            Event::ClearFilters => Box::new(|model: &mut Model| {
                model.filter.clear();
                Ok(render::render())
            }),
            Event::SetTheme {
                theme,
            } => Box::new(move |model: &mut Model| {
                model.theme = theme;
                Ok(render::render())
            }),
            Event::ToggleTheme => Box::new(|model: &mut Model| {
                model.theme = model.theme.toggled();
                Ok(render::render())
            }),
            Event::SetLanguage {
                language,
            } => Box::new(move |model: &mut Model| {
                model.language = language;
                Ok(render::render())
            }),
            Event::OpenBomModal => Box::new(|model: &mut Model| {
                model.bom_modal.replace(BomModal::default());
                Ok(render::render())
            }),
            Event::CloseBomModal => Box::new(|model: &mut Model| {
                model.bom_modal.take();
                Ok(render::render())
            }),
            Event::SubmitBom {
                submission,
            } => Box::new(move |model: &mut Model| {
                let Some(bom_modal) = model.bom_modal.as_mut() else {
                    return Err(AppError::OperationRequiresBomModal);
                };

                if let Err(error) = submission.check() {
                    bom_modal.error.replace(error.clone());
                    return Err(AppError::BomRejected(error));
                }

                info!(
                    "BOM received. name: {}, email: {}, file: {:?}",
                    submission.name, submission.email, submission.file
                );
                model.bom_modal.take();

                let toast_command = model.show_toast("bom-received");
                Ok(Command::all([render::render(), toast_command]))
            }),
            Event::DismissToast => Box::new(|model: &mut Model| {
                model.toast.take();
                Ok(render::render())
            }),
            Event::ToastElapsed {
                ticket,
            } => Box::new(move |model: &mut Model| {
                match &model.toast {
                    Some(toast) if toast.ticket == ticket => {
                        model.toast.take();
                        Ok(render::render())
                    }
                    _ => {
                        trace!("Ignoring stale toast timer. ticket: {}", ticket);
                        Ok(Command::done())
                    }
                }
            }),
            Event::StartChatSession => Box::new(|model: &mut Model| {
                model.start_chat_session();
                Ok(render::render())
            }),
            Event::OpenChat => Box::new(|model: &mut Model| {
                if model.chat.is_none() {
                    model.start_chat_session();
                }
                model.chat_visible = true;
                Ok(render::render())
            }),
            Event::MinimizeChat => Box::new(|model: &mut Model| {
                model.chat_visible = false;
                Ok(render::render())
            }),
            Event::SendChatMessage {
                text,
            } => Box::new(move |model: &mut Model| {
                let session = model
                    .chat
                    .as_mut()
                    .ok_or(AppError::OperationRequiresChatSession)?;

                match session.send(&text) {
                    Some(ticket) => {
                        let reply_command = schedule_chat_reply(session.id(), ticket);
                        Ok(Command::all([render::render(), reply_command]))
                    }
                    None => Ok(render::render()),
                }
            }),
            Event::ChatReplyElapsed {
                session: session_id,
                ticket,
            } => Box::new(move |model: &mut Model| {
                let language = model.language;

                let Some(session) = model
                    .chat
                    .as_mut()
                    .filter(|session| session.id() == session_id)
                else {
                    trace!("Ignoring chat reply for ended session. session: {}", session_id);
                    return Ok(Command::done());
                };

                let Some(reply) = session.take_reply(ticket) else {
                    trace!("Ignoring stale chat reply. session: {}, ticket: {:?}", session_id, ticket);
                    return Ok(Command::done());
                };

                let text = i18n::tr_args(
                    language,
                    "chat-reply",
                    &build_fluent_args(&[("inquiry", Arg::String(reply.inquiry))]),
                );
                session.push_message(ChatSender::Agent, text);

                let mut commands = vec![render::render()];
                if let Some(next) = session.in_flight() {
                    commands.push(schedule_chat_reply(session_id, next.ticket));
                }

                Ok(Command::all(commands))
            }),
            Event::RequestHuman => Box::new(|model: &mut Model| {
                let text = i18n::tr(model.language, "connecting-human");
                let session = model
                    .chat
                    .as_mut()
                    .ok_or(AppError::OperationRequiresChatSession)?;

                session.push_message(ChatSender::System, text);
                Ok(render::render())
            }),
            Event::EndChatSession => Box::new(|model: &mut Model| {
                if let Some(session) = model.chat.take() {
                    debug!("Ended chat session. session: {}", session.id());
                }
                model.chat_visible = false;
                Ok(render::render())
            }),
        }
    }
}

fn schedule_chat_reply(session: SessionId, ticket: Ticket) -> Command<Effect, Event> {
    delay::delay(CHAT_REPLY_DELAY_MILLIS, move || Event::ChatReplyElapsed {
        session,
        ticket,
    })
}

impl App for Storefront {
    type Event = Event;
    type Model = Model;
    type ViewModel = StorefrontViewModel;
    type Capabilities = ();
    type Effect = Effect;

    fn update(
        &self,
        event: Self::Event,
        model: &mut Self::Model,
        _caps: &Self::Capabilities,
    ) -> Command<Self::Effect, Self::Event> {
        let try_fn = self.update_inner(event);

        match try_fn(model) {
            Err(e) => {
                model
                    .error
                    .replace((chrono::DateTime::from(SystemTime::now()), e.to_string()));
                render::render()
            }
            Ok(command) => {
                model.error.take();
                command
            }
        }
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        let view_model = view::build_view_model(model);

        trace!("view model: {:?}", view_model);

        view_model
    }
}

#[derive(Error, Debug)]
enum AppError {
    #[error("Catalog already loaded")]
    CatalogAlreadyLoaded,
    #[error("Catalog error. cause: {0:?}")]
    CatalogError(anyhow::Error),
    #[error("Operation requires the BOM modal to be open")]
    OperationRequiresBomModal,
    #[error("BOM submission rejected. cause: {0}")]
    BomRejected(BomValidationError),
    #[error("Operation requires a chat session")]
    OperationRequiresChatSession,
}

#[cfg(test)]
mod app_tests {
    use crux_core::testing::AppTester;
    use crux_core::{assert_effect, Request};
    use stores::test::parts_builder::PartsCSVBuilder;

    use super::*;

    fn update(model: &mut Model, event: Event) -> Command<Effect, Event> {
        Storefront.update(event, model, &())
    }

    fn view(model: &Model) -> StorefrontViewModel {
        Storefront.view(model)
    }

    fn delays(command: &mut Command<Effect, Event>) -> Vec<Request<DelayOperation>> {
        command
            .effects()
            .filter_map(|effect| match effect {
                Effect::Delay(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    /// Resolve the delay, as a shell would after waiting, and return the resulting event.
    fn elapse(command: &mut Command<Effect, Event>, mut request: Request<DelayOperation>) -> Event {
        request.resolve(()).unwrap();
        let mut events = command.events().collect::<Vec<_>>();
        assert_eq!(events.len(), 1);
        events.remove(0)
    }

    fn loaded_model() -> Model {
        let mut model = Model::default();
        let _ = update(&mut model, Event::LoadCatalog {
            source: Source::Builtin,
        });
        assert_eq!(model.error, None);
        model
    }

    fn mpns(view: &StorefrontViewModel) -> Vec<&str> {
        view.search
            .parts
            .iter()
            .map(|part| part.mpn.as_str())
            .collect()
    }

    fn chat_texts(view: &StorefrontViewModel) -> Vec<(ChatSender, &str)> {
        view.chat
            .messages
            .iter()
            .map(|ChatMessage { sender, text, .. }| (*sender, text.as_str()))
            .collect()
    }

    #[test]
    fn minimal() {
        let hello = AppTester::<Storefront>::default();
        let mut model = Model::default();

        // Call 'update' and request effects
        let update = hello.update(Event::None, &mut model);

        // Check update asked us to `Render`
        assert_effect!(update, Effect::Render(_));

        // Make sure the view matches our expectations
        let actual_view = &hello.view(&model);
        assert_eq!(actual_view.active_view, ActiveView::Home);
        assert_eq!(actual_view.theme, Theme::Dark);
        assert_eq!(actual_view.language, Language::En);
        assert!(actual_view.search.parts.is_empty());
        assert!(actual_view.search.empty_state.is_some());
        assert_eq!(actual_view.error, None);
    }

    #[test]
    fn load_builtin_catalog() {
        // when
        let model = loaded_model();

        // then
        let view = view(&model);
        assert_eq!(view.search.hit_count, 12);
        assert_eq!(view.search.records_found, "12 RECORDS FOUND");
        assert_eq!(view.search.title, "ALL");
        assert_eq!(view.search.empty_state, None);

        let manufacturers = view
            .search
            .manufacturers
            .iter()
            .map(|item| item.manufacturer.as_str())
            .collect::<Vec<_>>();
        assert_eq!(manufacturers, vec![
            "Analog Devices",
            "Espressif",
            "Microchip",
            "Murata",
            "Nordic Semiconductor",
            "STMicroelectronics",
            "Texas Instruments",
        ]);
    }

    #[test]
    fn load_catalog_from_file() {
        // given
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("parts.csv");
        let parts = [catalog::part::Part::new("1", "NE555P", "Texas Instruments")
            .with_stock(10, catalog::part::PartStatus::InStock)];
        std::fs::write(
            &path,
            PartsCSVBuilder::new()
                .with_parts(&parts)
                .as_string(),
        )
        .unwrap();
        let mut model = Model::default();

        // when
        let _ = update(&mut model, Event::LoadCatalog {
            source: Source::File(path),
        });

        // then
        let view = view(&model);
        assert_eq!(view.error, None);
        assert_eq!(mpns(&view), vec!["NE555P"]);
    }

    #[test]
    fn loading_twice_is_an_error() {
        // given
        let mut model = loaded_model();

        // when
        let mut command = update(&mut model, Event::LoadCatalog {
            source: Source::Builtin,
        });

        // then
        assert!(command
            .effects()
            .any(|effect| matches!(effect, Effect::Render(_))));
        let view = view(&model);
        let (_timestamp, message) = view.error.unwrap();
        assert_eq!(message, "Catalog already loaded");
        assert_eq!(view.search.hit_count, 12);
    }

    #[test]
    fn successful_event_clears_error() {
        // given
        let mut model = loaded_model();
        let _ = update(&mut model, Event::LoadCatalog {
            source: Source::Builtin,
        });
        assert!(model.error.is_some());

        // when
        let _ = update(&mut model, Event::ToggleTheme);

        // then
        assert_eq!(view(&model).error, None);
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        // given
        let mut model = Model::default();

        // when
        let _ = update(&mut model, Event::LoadCatalog {
            source: Source::File("does/not/exist.csv".into()),
        });

        // then
        let (_timestamp, message) = view(&model).error.unwrap();
        assert!(message.starts_with("Catalog error."));
    }

    #[test]
    fn submit_search() {
        // given
        let mut model = loaded_model();

        // when
        let _ = update(&mut model, Event::SetQuery {
            query: "   ".to_string(),
        });
        let _ = update(&mut model, Event::SubmitSearch);

        // then
        assert_eq!(view(&model).active_view, ActiveView::Home);

        // when
        let _ = update(&mut model, Event::SetQuery {
            query: " stm32 ".to_string(),
        });
        let _ = update(&mut model, Event::SubmitSearch);

        // then
        let view = view(&model);
        assert_eq!(view.active_view, ActiveView::Search);
        assert_eq!(view.search.title, "DATA_QUERY: stm32");
        assert_eq!(mpns(&view), vec!["STM32F407VGT6", "STM32F103C8T6"]);
    }

    #[test]
    fn navigate() {
        // given
        let mut model = loaded_model();

        // when
        let _ = update(&mut model, Event::Navigate {
            view: ActiveView::Search,
        });

        // then
        assert_eq!(view(&model).active_view, ActiveView::Search);
    }

    #[test]
    fn facet_toggles() {
        // given
        let mut model = loaded_model();

        // when
        let _ = update(&mut model, Event::ToggleManufacturer {
            manufacturer: "Microchip".to_string(),
        });
        let _ = update(&mut model, Event::ToggleAvailability {
            availability: Availability::LeadTime,
        });

        // then
        let view = view(&model);
        assert_eq!(mpns(&view), vec!["PIC16F877A-I/P"]);
        assert!(view
            .search
            .manufacturers
            .iter()
            .any(|item| item.manufacturer == "Microchip" && item.selected));
        let selected_availability = view
            .search
            .availability
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.availability)
            .collect::<Vec<_>>();
        assert_eq!(selected_availability, vec![Availability::LeadTime]);

        // when
        let _ = update(&mut model, Event::ToggleManufacturer {
            manufacturer: "Microchip".to_string(),
        });
        let _ = update(&mut model, Event::ToggleAvailability {
            availability: Availability::LeadTime,
        });

        // then
        assert_eq!(self::view(&model).search.hit_count, 12);
    }

    #[test]
    fn empty_state_and_clear_filters() {
        // given
        let mut model = loaded_model();
        let _ = update(&mut model, Event::SetQuery {
            query: "no such part".to_string(),
        });
        let _ = update(&mut model, Event::ToggleManufacturer {
            manufacturer: "Murata".to_string(),
        });

        // then
        let view = view(&model);
        assert_eq!(view.search.hit_count, 0);
        let empty_state = view.search.empty_state.unwrap();
        assert_eq!(empty_state.message, "No components match your search.");
        assert_eq!(empty_state.clear_filters_label, "Clear all filters");

        // when
        let _ = update(&mut model, Event::ClearFilters);

        // then
        let view = self::view(&model);
        assert_eq!(view.query, "");
        assert_eq!(view.search.hit_count, 12);
        assert!(view
            .search
            .manufacturers
            .iter()
            .all(|item| !item.selected));
    }

    #[test]
    fn theme() {
        // given
        let mut model = Model::default();

        // when
        let _ = update(&mut model, Event::ToggleTheme);

        // then
        assert_eq!(view(&model).theme, Theme::Light);

        // when
        let _ = update(&mut model, Event::SetTheme {
            theme: Theme::Dark,
        });

        // then
        assert_eq!(view(&model).theme, Theme::Dark);
    }

    #[test]
    fn language_changes_labels() {
        // given
        let mut model = loaded_model();

        // when
        let _ = update(&mut model, Event::SetLanguage {
            language: Language::De,
        });

        // then
        let view = view(&model);
        let labels = view
            .search
            .availability
            .iter()
            .map(|item| item.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["Auf Lager", "Lieferzeit", "Abgekündigt"]);
    }

    #[test]
    fn rfq_parts_request_a_quote() {
        // given
        let mut model = loaded_model();

        // when
        let _ = update(&mut model, Event::SetQuery {
            query: "AD8605".to_string(),
        });

        // then
        let view = view(&model);
        assert_eq!(view.search.parts[0].price, catalog::pricing::PriceDisplay::RequestQuote);
        assert_eq!(view.search.request_quote_label, "Request Quote");
    }

    #[test]
    fn bom_rejected() {
        // given
        let mut model = Model::default();
        let _ = update(&mut model, Event::OpenBomModal);

        // when
        let _ = update(&mut model, Event::SubmitBom {
            submission: BomSubmission {
                name: "Ada".to_string(),
                email: "ada".to_string(),
                file: None,
            },
        });

        // then
        let view = view(&model);
        let bom_modal = view.bom_modal.unwrap();
        assert_eq!(bom_modal.error.as_deref(), Some("A valid email address is required."));
        assert!(view.error.is_some());
        assert_eq!(view.toast, None);
    }

    #[test]
    fn bom_requires_open_modal() {
        // given
        let mut model = Model::default();

        // when
        let _ = update(&mut model, Event::SubmitBom {
            submission: BomSubmission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                file: None,
            },
        });

        // then
        let (_timestamp, message) = view(&model).error.unwrap();
        assert_eq!(message, "Operation requires the BOM modal to be open");
    }

    #[test]
    fn bom_accepted_shows_toast_until_elapsed() {
        // given
        let mut model = Model::default();
        let _ = update(&mut model, Event::OpenBomModal);

        // when
        let mut command = update(&mut model, Event::SubmitBom {
            submission: BomSubmission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                file: Some("bom.csv".into()),
            },
        });

        // then
        let view = view(&model);
        assert_eq!(view.bom_modal, None);
        assert_eq!(view.toast.as_deref(), Some("BOM Data Stream Received. Analysis in progress."));

        let mut requests = delays(&mut command);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].operation.millis, TOAST_DELAY_MILLIS);

        // when
        let event = elapse(&mut command, requests.remove(0));
        let _ = update(&mut model, event);

        // then
        assert_eq!(self::view(&model).toast, None);
    }

    #[test]
    fn stale_toast_timer_is_ignored() {
        // given
        let mut model = Model::default();
        let first_command = model.show_toast("bom-received");
        let mut second_command = model.show_toast("bom-received");
        drop(first_command);

        // when
        let mut command = update(&mut model, Event::ToastElapsed {
            ticket: 1,
        });

        // then
        assert!(command.effects().next().is_none());
        assert!(view(&model).toast.is_some());

        // when
        let request = delays(&mut second_command).remove(0);
        let event = elapse(&mut second_command, request);
        let _ = update(&mut model, event);

        // then
        assert_eq!(view(&model).toast, None);
    }

    #[test]
    fn dismiss_toast() {
        // given
        let mut model = Model::default();
        let _command = model.show_toast("bom-received");

        // when
        let _ = update(&mut model, Event::DismissToast);

        // then
        assert_eq!(view(&model).toast, None);
    }

    #[test]
    fn chat_requires_session() {
        // given
        let mut model = Model::default();

        // when
        let _ = update(&mut model, Event::SendChatMessage {
            text: "stm32".to_string(),
        });

        // then
        let (_timestamp, message) = view(&model).error.unwrap();
        assert_eq!(message, "Operation requires a chat session");
    }

    #[test]
    fn chat_reply_after_delay() {
        // given
        let mut model = Model::default();
        let _ = update(&mut model, Event::StartChatSession);

        // when
        let mut command = update(&mut model, Event::SendChatMessage {
            text: "STM32F4".to_string(),
        });

        // then
        let view = view(&model);
        assert!(view.chat.typing);
        assert_eq!(chat_texts(&view), vec![
            (
                ChatSender::Agent,
                "Hello! I'm your sourcing assistant. How can I help you find components today?"
            ),
            (ChatSender::User, "STM32F4"),
        ]);

        let mut requests = delays(&mut command);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].operation.millis, CHAT_REPLY_DELAY_MILLIS);

        // when
        let event = elapse(&mut command, requests.remove(0));
        let _ = update(&mut model, event);

        // then
        let view = self::view(&model);
        assert!(!view.chat.typing);
        assert_eq!(
            chat_texts(&view)[2],
            (
                ChatSender::Agent,
                "I've received your inquiry about \"STM32F4\". Let me check our global inventory..."
            )
        );
    }

    #[test]
    fn blank_chat_message_is_ignored() {
        // given
        let mut model = Model::default();
        let _ = update(&mut model, Event::StartChatSession);

        // when
        let mut command = update(&mut model, Event::SendChatMessage {
            text: " ".to_string(),
        });

        // then
        assert!(delays(&mut command).is_empty());
        assert_eq!(view(&model).chat.messages.len(), 1);
    }

    #[test]
    fn chat_replies_are_queued_in_order() {
        // given
        let mut model = Model::default();
        let _ = update(&mut model, Event::StartChatSession);

        // when
        let mut first_command = update(&mut model, Event::SendChatMessage {
            text: "first".to_string(),
        });
        let mut second_command = update(&mut model, Event::SendChatMessage {
            text: "second".to_string(),
        });

        // then
        assert!(delays(&mut second_command).is_empty());

        // when
        let request = delays(&mut first_command).remove(0);
        let event = elapse(&mut first_command, request);
        let mut next_command = update(&mut model, event);

        // then
        let request = delays(&mut next_command).remove(0);
        let event = elapse(&mut next_command, request);
        let _ = update(&mut model, event);

        let view = view(&model);
        let senders = view
            .chat
            .messages
            .iter()
            .map(|message| message.sender)
            .collect::<Vec<_>>();
        assert_eq!(senders, vec![
            ChatSender::Agent,
            ChatSender::User,
            ChatSender::User,
            ChatSender::Agent,
            ChatSender::Agent,
        ]);
        assert!(view.chat.messages[3].text.contains("\"first\""));
        assert!(view.chat.messages[4].text.contains("\"second\""));
        assert!(!view.chat.typing);
    }

    #[test]
    fn ending_session_cancels_pending_reply() {
        // given
        let mut model = Model::default();
        let _ = update(&mut model, Event::StartChatSession);
        let mut command = update(&mut model, Event::SendChatMessage {
            text: "stm32".to_string(),
        });
        let request = delays(&mut command).remove(0);

        // when
        let _ = update(&mut model, Event::EndChatSession);
        let _ = update(&mut model, Event::StartChatSession);
        let event = elapse(&mut command, request);
        let mut stale_command = update(&mut model, event);

        // then
        assert!(stale_command.effects().next().is_none());
        let view = view(&model);
        assert_eq!(view.chat.messages.len(), 1);
        assert_eq!(view.error, None);
    }

    #[test]
    fn open_and_minimize_keep_session() {
        // given
        let mut model = Model::default();

        // when
        let _ = update(&mut model, Event::OpenChat);
        let _ = update(&mut model, Event::SendChatMessage {
            text: "stm32".to_string(),
        });
        let _ = update(&mut model, Event::MinimizeChat);

        // then
        let view = view(&model);
        assert!(view.chat.active);
        assert!(!view.chat.visible);
        assert_eq!(view.chat.messages.len(), 2);
    }

    #[test]
    fn request_human() {
        // given
        let mut model = Model::default();
        let _ = update(&mut model, Event::OpenChat);

        // when
        let _ = update(&mut model, Event::RequestHuman);

        // then
        let view = view(&model);
        assert_eq!(
            chat_texts(&view).last(),
            Some(&(ChatSender::System, "Connecting you to a human sales engineer..."))
        );
    }
}
