use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a note was captured. Fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteKind {
    Text,
    Audio,
}

impl NoteKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Audio => "audio",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub kind: NoteKind,
    pub created: NaiveDateTime,
    pub favorite: bool,
    /// Locally-valid display reference for an attached image (never uploaded anywhere).
    pub image_url: Option<String>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>, kind: NoteKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            kind,
            created: chrono::Local::now().naive_local(),
            favorite: false,
            image_url: None,
        }
    }
}
