//! Reply payloads handed back to the chat-delivery layer.

/// Semantic severity of an attachment, carrying the chat palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Good,
    Warning,
    Danger,
    Neutral,
}

impl Color {
    /// Hex color understood by the chat platform.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Good => "#36a64f",
            Self::Warning => "#daa038",
            Self::Danger => "#a30200",
            Self::Neutral => "#e5e7ea",
        }
    }
}

/// A rich block attached to a reply.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub title: Option<String>,
    pub text: String,
    pub color: Color,
}

impl Attachment {
    pub fn new(title: impl Into<String>, text: impl Into<String>, color: Color) -> Self {
        Self {
            title: Some(title.into()),
            text: text.into(),
            color,
        }
    }

    /// An attachment with no title line.
    pub fn untitled(text: impl Into<String>, color: Color) -> Self {
        Self {
            title: None,
            text: text.into(),
            color,
        }
    }
}

/// What a handler sends back: plain text plus optional attachments.
#[derive(Debug, Clone, Default)]
pub struct Reply {
    pub text: String,
    pub attachments: Vec<Attachment>,
}

impl Reply {
    /// A plain-text reply with no attachments.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    /// Append an attachment.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}
