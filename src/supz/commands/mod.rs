use crate::model::{Draft, Supplier};

pub mod add;
pub mod draft;
pub mod image;
pub mod list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }
}

/// Structured outcome of a command, for any client to render.
/// Commands never print; the messages here are the only user-facing text
/// they produce.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Suppliers to list, already filtered and in display order.
    pub listed: Vec<Supplier>,
    /// The record a successful commit created.
    pub added: Option<Supplier>,
    /// Snapshot of the draft after the command ran.
    pub draft: Option<Draft>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, suppliers: Vec<Supplier>) -> Self {
        self.listed = suppliers;
        self
    }

    pub fn with_added(mut self, supplier: Supplier) -> Self {
        self.added = Some(supplier);
        self
    }

    pub fn with_draft(mut self, draft: Draft) -> Self {
        self.draft = Some(draft);
        self
    }
}
