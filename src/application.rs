use std::collections::HashMap;

use uuid::Uuid;

use crate::capability::Capabilities;
use crate::components::NoteCardState;
use crate::config::MurmurConfig;
use crate::core::{Note, NotePatch, NoteStore};
use crate::creator::NoteCreator;
use crate::message::{Command, Message, NoteField};

/// Widget state: the note store as single source of truth, the creator's
/// dictation machine, the search filter, and per-card view state. All
/// mutation funnels through `update`, one message at a time.
pub struct App {
    config: MurmurConfig,
    pub store: NoteStore,
    pub creator: NoteCreator,
    caps: Capabilities,
    pub search_query: String,
    cards: HashMap<Uuid, NoteCardState>,
}

impl App {
    pub fn new(config: MurmurConfig, caps: Capabilities) -> Self {
        Self {
            config,
            store: NoteStore::new(),
            creator: NoteCreator::new(),
            caps,
            search_query: String::new(),
            cards: HashMap::new(),
        }
    }

    /// Notes passing the current search filter, newest first.
    pub fn visible_notes(&self) -> Vec<&Note> {
        self.store.search(&self.search_query).collect()
    }

    pub fn card(&self, id: Uuid) -> Option<&NoteCardState> {
        self.cards.get(&id)
    }

    fn card_mut(&mut self, id: Uuid) -> &mut NoteCardState {
        self.cards.entry(id).or_default()
    }

    pub fn update(&mut self, message: Message) -> Vec<Command> {
        match message {
            // Creator inputs
            Message::CreatorTitleChanged(value) => {
                self.creator.title = value;
            }

            Message::CreatorContentChanged(value) => {
                self.creator.content = value;
            }

            Message::CreatorSubmit => {
                self.creator.submit(&mut self.store, &mut self.caps);
            }

            // Dictation
            Message::StartRecording => {
                if let Some(session) = self.creator.start_recording(&mut self.caps) {
                    return vec![Command::RecordingTimer {
                        session,
                        limit: self.config.recording_limit(),
                    }];
                }
            }

            Message::StopRecording => {
                self.creator.stop_recording(&mut self.caps);
            }

            Message::TranscriptReceived(transcript) => {
                self.creator.apply_transcript(transcript);
            }

            Message::RecordingElapsed(session) => {
                self.creator.handle_timeout(session, &mut self.caps);
            }

            // Search filter
            Message::SearchQueryChanged(query) => {
                self.search_query = query;
            }

            // Note cards. Arms that touch card state first check the note is
            // still live, so late messages for a deleted id cannot regrow the
            // card map.
            Message::ToggleNoteExpanded(id) => {
                if self.store.get(id).is_some() {
                    self.card_mut(id).toggle_expanded();
                }
            }

            Message::EditNote(id) => {
                if let Some(note) = self.store.get(id) {
                    let note = note.clone();
                    self.card_mut(id).begin_edit(&note);
                }
            }

            Message::CancelEditNote(id) => {
                if self.store.get(id).is_some() {
                    self.card_mut(id).cancel_edit();
                }
            }

            Message::SetNoteDraft(id, field, value) => {
                if self.store.get(id).is_none() {
                    return Vec::new();
                }
                let card = self.card_mut(id);
                if card.editing {
                    match field {
                        NoteField::Title => card.draft_title = value,
                        NoteField::Content => card.draft_content = value,
                    }
                }
            }

            Message::SaveNote(id) => {
                if self.store.get(id).is_none() {
                    return Vec::new();
                }
                let card = self.card_mut(id);
                if !card.editing {
                    return Vec::new();
                }
                if card.draft_title.trim().is_empty() || card.draft_content.trim().is_empty() {
                    // Stay in edit mode so the user can fix the drafts.
                    self.caps
                        .notifier
                        .error("Please fill in both title and content");
                    return Vec::new();
                }
                let (title, content) = card.take_drafts();
                self.store.update(id, NotePatch::text(title, content));
                self.caps.notifier.success("Note updated!");
            }

            Message::ToggleFavorite(id) => {
                if let Some(note) = self.store.get(id) {
                    let favorite = !note.favorite;
                    self.store.update(id, NotePatch::favorite(favorite));
                }
            }

            Message::AttachImage(id, path) => {
                if self.store.get(id).is_none() {
                    log::debug!("image attach for unknown note {id}");
                    return Vec::new();
                }
                match self.caps.images.local_url(&path) {
                    Ok(url) => {
                        self.store.update(id, NotePatch::image_url(url));
                        self.caps.notifier.success("Image uploaded!");
                    }
                    Err(e) => {
                        log::warn!("image attach failed: {e}");
                        self.caps.notifier.error("Could not attach image");
                    }
                }
            }

            Message::CopyNote(id) => {
                if let Some(note) = self.store.get(id) {
                    let content = note.content.clone();
                    match self.caps.clipboard.write_text(&content) {
                        Ok(()) => self.caps.notifier.success("Copied to clipboard!"),
                        Err(e) => {
                            log::warn!("clipboard write failed: {e}");
                            self.caps.notifier.error("Could not copy to clipboard");
                        }
                    }
                }
            }

            Message::DeleteNote(id) => {
                self.store.delete(id);
                self.cards.remove(&id);
                self.caps.notifier.success("Note deleted!");
            }

            // Runtime
            Message::Shutdown => {
                // Release capture capabilities before the loop exits.
                self.creator.stop_recording(&mut self.caps);
            }
        }
        Vec::new()
    }
}
