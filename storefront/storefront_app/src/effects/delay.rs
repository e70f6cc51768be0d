use std::future::Future;
use std::time::Duration;

use crux_core::capability::Operation;
use crux_core::command::RequestBuilder;
use crux_core::{Command, Request};

/// Ask the shell to wait, then resolve the request with `()`.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DelayOperation {
    pub millis: u64,
}

impl DelayOperation {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.millis)
    }
}

impl Operation for DelayOperation {
    type Output = ();
}

pub fn delay_builder<Effect, Event>(millis: u64) -> RequestBuilder<Effect, Event, impl Future<Output = ()>>
where
    Effect: From<Request<DelayOperation>> + Send + 'static,
    Event: Send + 'static,
{
    Command::request_from_shell(DelayOperation {
        millis,
    })
}

/// Send the event built by `make_event` once the delay has elapsed.
pub fn delay<Effect, Event, F>(millis: u64, make_event: F) -> Command<Effect, Event>
where
    Effect: From<Request<DelayOperation>> + Send + 'static,
    Event: Send + 'static,
    F: FnOnce() -> Event + Send + 'static,
{
    delay_builder(millis).then_send(move |()| make_event())
}
