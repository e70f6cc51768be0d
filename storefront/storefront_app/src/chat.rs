use std::collections::VecDeque;
use std::fmt::Formatter;

use chrono::{DateTime, Utc};
use strum_macros::Display;
use tracing::{debug, trace};

/// Identifies one chat session, a new session gets a new id.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message ids increase monotonically within a session.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

/// Identifies one scheduled reply.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ChatSender {
    User,
    Agent,
    System,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: ChatSender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: Ticket,
    pub inquiry: String,
}

/// The message log of one chat session, plus the replies that are still owed to the user.
///
/// At most one reply is in flight, the one at the front of the queue. Replies are produced in the order the
/// user messages were sent.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: SessionId,
    messages: Vec<ChatMessage>,
    next_message_id: u64,
    pending: VecDeque<PendingReply>,
    next_ticket: u64,
}

impl ChatSession {
    pub fn new(id: SessionId, welcome: String) -> Self {
        let mut session = Self {
            id,
            messages: vec![],
            next_message_id: 1,
            pending: VecDeque::new(),
            next_ticket: 1,
        };
        session.push_message(ChatSender::Agent, welcome);

        debug!("Started chat session. session: {}", id);

        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn in_flight(&self) -> Option<&PendingReply> {
        self.pending.front()
    }

    pub fn push_message(&mut self, sender: ChatSender, text: String) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;

        trace!("Chat message. session: {}, sender: {}, text: {}", self.id, sender, text);

        self.messages.push(ChatMessage {
            id,
            sender,
            text,
            timestamp: Utc::now(),
        });

        id
    }

    /// Append a user message and queue its reply.
    ///
    /// Returns the ticket of the queued reply if it is the one in flight, i.e. the caller must schedule it now.
    /// Returns `None` for blank text, which is ignored, or when an earlier reply is still in flight.
    pub fn send(&mut self, text: &str) -> Option<Ticket> {
        if text.trim().is_empty() {
            return None;
        }

        self.push_message(ChatSender::User, text.to_string());

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;

        let was_idle = self.pending.is_empty();
        self.pending.push_back(PendingReply {
            ticket,
            inquiry: text.to_string(),
        });

        was_idle.then_some(ticket)
    }

    /// Take the reply that is in flight, if it is the one identified by the ticket.
    pub fn take_reply(&mut self, ticket: Ticket) -> Option<PendingReply> {
        match self.pending.front() {
            Some(reply) if reply.ticket == ticket => self.pending.pop_front(),
            _ => None,
        }
    }
}
