//! # Commands
//!
//! One module per user-facing operation. Every command follows the same
//! shape: take the catalog (and whatever inputs the operation needs), do
//! the work, and return a [`CmdResult`] describing what happened. Commands
//! never print; rendering is the caller's job.
//!
//! Partial failures that the operation survives (a photo that would not
//! upload, a blob that would not delete) come back as warning messages on
//! an otherwise successful result. Failures that abort the operation come
//! back as `Err`.

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod marking;
pub mod notes;
pub mod pick;
pub mod refresh;
pub mod update;

pub use create::NewPlace;
pub use update::PlaceUpdate;

use crate::model::Place;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        CmdMessage {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        CmdMessage {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        CmdMessage {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        CmdMessage {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command did, for the caller to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Places the command changed (created, edited, deleted, picked).
    pub affected_places: Vec<Place>,
    /// Places the command produced for display, in catalog order.
    pub listed_places: Vec<Place>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_affected_places(mut self, places: Vec<Place>) -> Self {
        self.affected_places = places;
        self
    }

    pub fn with_listed_places(mut self, places: Vec<Place>) -> Self {
        self.listed_places = places;
        self
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
