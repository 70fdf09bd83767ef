// File: src/status.rs
// Purpose: Status banner state for the intake form

use serde::{Deserialize, Serialize};

/// Style category of the status banner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Neutral,
    Error,
    Success,
}

impl StatusKind {
    /// Style token for presentation layers; neutral renders as no token
    pub fn as_class(&self) -> &'static str {
        match self {
            StatusKind::Neutral => "",
            StatusKind::Error => "error",
            StatusKind::Success => "success",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_class())
    }
}

/// Status banner contents: message text plus style category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    message: String,
    kind: StatusKind,
}

impl StatusLine {
    /// Create a cleared status line
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the banner text and style
    pub fn set(&mut self, message: impl Into<String>, kind: StatusKind) {
        self.message = message.into();
        self.kind = kind;
    }

    /// Back to the cleared state: empty text, neutral style
    pub fn clear(&mut self) {
        self.message.clear();
        self.kind = StatusKind::Neutral;
    }

    /// Current banner text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current style category
    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    /// Check for the cleared state
    pub fn is_clear(&self) -> bool {
        self.message.is_empty() && self.kind == StatusKind::Neutral
    }
}
