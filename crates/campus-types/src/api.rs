use serde::Serialize;
use uuid::Uuid;

use crate::models::{Guide, User};

// -- Registration --

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RegisterOutcome {
    Welcome { username: String },
    Rejected { reason: RegisterRejection },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterRejection {
    UserExists,
    PasswordMismatch,
    MissingField,
}

// -- Login --

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoginOutcome {
    Dashboard(Dashboard),
    Rejected { reason: LoginRejection },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginRejection {
    UnknownUser,
    IncorrectPassword,
}

/// Everything the landing page shows after a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub user: User,
    pub friends: Vec<String>,
    pub todos: Vec<String>,
    pub guides: Vec<Guide>,
}

// -- Chat --

/// One conversation replayed in order. `participants` is the canonical
/// orientation the conversation was created with, which need not match the
/// direction of the call that produced this view.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationView {
    pub conversation_id: Uuid,
    pub participants: (String, String),
    pub messages: Vec<ChatLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatLine {
    pub seq: i64,
    pub sender: String,
    pub body: String,
}
