use thiserror::Error;
use uuid::Uuid;

use super::note::{Note, NoteKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("title and content must not be empty")]
    EmptyFields,
}

/// Partial update applied to a note. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub favorite: Option<bool>,
    pub image_url: Option<String>,
}

impl NotePatch {
    pub fn favorite(value: bool) -> Self {
        Self {
            favorite: Some(value),
            ..Self::default()
        }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        Self {
            image_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

/// In-memory note collection for the lifetime of the session.
///
/// The store is the single source of truth: the creator and the cards never
/// hold copies, they issue patches against it. Newest note first.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a note and prepend it to the collection.
    ///
    /// Rejects titles or contents that are empty after trimming; the raw
    /// (untrimmed) strings are what gets stored.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        kind: NoteKind,
    ) -> Result<&Note, StoreError> {
        let title = title.into();
        let content = content.into();
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(StoreError::EmptyFields);
        }
        let note = Note::new(title, content, kind);
        log::debug!("created {} note {}: {}", note.kind.label(), note.id, note.title);
        self.notes.insert(0, note);
        Ok(&self.notes[0])
    }

    /// Remove the note with the given id. Silent no-op if absent.
    pub fn delete(&mut self, id: Uuid) {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            log::debug!("delete for unknown note {id}");
        }
    }

    /// Merge the patch into the matching note. Silent no-op if absent.
    pub fn update(&mut self, id: Uuid, patch: NotePatch) {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            log::debug!("update for unknown note {id}");
            return;
        };
        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(favorite) = patch.favorite {
            note.favorite = favorite;
        }
        if let Some(image_url) = patch.image_url {
            note.image_url = Some(image_url);
        }
    }

    /// Case-insensitive substring search over title and content.
    ///
    /// Recomputed on every call; an empty query matches every note, so the
    /// full collection comes back in current order.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Note> + 'a {
        let needle = query.to_lowercase();
        self.notes.iter().filter(move |n| {
            n.title.to_lowercase().contains(&needle) || n.content.to_lowercase().contains(&needle)
        })
    }

    pub fn get(&self, id: Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
