use std::path::PathBuf;
use std::time::Duration;

use uuid::Uuid;

use crate::capability::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    Title,
    Content,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Creator inputs
    CreatorTitleChanged(String),
    CreatorContentChanged(String),
    CreatorSubmit,

    // Dictation
    StartRecording,
    StopRecording,
    TranscriptReceived(Transcript),
    /// Auto-stop timer fired for the given recording session.
    RecordingElapsed(u64),

    // Search filter
    SearchQueryChanged(String),

    // Note cards
    ToggleNoteExpanded(Uuid),
    EditNote(Uuid),
    CancelEditNote(Uuid),
    SetNoteDraft(Uuid, NoteField, String),
    SaveNote(Uuid),
    ToggleFavorite(Uuid),
    AttachImage(Uuid, PathBuf),
    CopyNote(Uuid),
    DeleteNote(Uuid),

    // Runtime
    Shutdown,
}

/// Side effects `App::update` asks the runtime to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sleep for `limit`, then deliver `RecordingElapsed(session)`.
    RecordingTimer { session: u64, limit: Duration },
}
