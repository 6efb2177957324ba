//! Note creator: title/content inputs plus the dictation state machine.
//!
//! Two states, Idle and Recording. A recording acquires the microphone and
//! the speech engine together and releases them together on every exit path
//! (explicit stop, auto timeout, submit, acquisition failure). Session
//! counters keep a late timeout from touching a newer recording.

use uuid::Uuid;

use crate::capability::{Capabilities, Transcript};
use crate::core::{NoteKind, NoteStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dictation {
    Idle,
    Recording { session: u64 },
}

#[derive(Debug)]
pub struct NoteCreator {
    pub title: String,
    pub content: String,
    dictation: Dictation,
    next_session: u64,
}

impl Default for NoteCreator {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            dictation: Dictation::Idle,
            next_session: 1,
        }
    }
}

impl NoteCreator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.dictation, Dictation::Recording { .. })
    }

    pub fn dictation(&self) -> Dictation {
        self.dictation
    }

    /// Idle → Recording. Returns the new session id on success so the caller
    /// can schedule the auto-stop timer.
    ///
    /// Acquires the microphone first, then the speech engine; if the engine
    /// fails the microphone is closed again before reporting. Starting while
    /// already recording is a no-op.
    pub fn start_recording(&mut self, caps: &mut Capabilities) -> Option<u64> {
        if self.is_recording() {
            return None;
        }

        if let Err(e) = caps.microphone.open() {
            log::warn!("recording not started: {e}");
            caps.notifier.error("Could not access microphone");
            return None;
        }
        if let Err(e) = caps.speech.start() {
            log::warn!("recording not started: {e}");
            caps.microphone.close();
            caps.notifier.error("Could not access microphone");
            return None;
        }

        let session = self.next_session;
        self.next_session += 1;
        self.dictation = Dictation::Recording { session };
        log::info!("recording session {session} started");
        caps.notifier.success("Recording started!");
        Some(session)
    }

    /// Recording → Idle. Idempotent: stopping while Idle does nothing.
    pub fn stop_recording(&mut self, caps: &mut Capabilities) {
        let Dictation::Recording { session } = self.dictation else {
            return;
        };
        self.release(caps);
        log::info!("recording session {session} stopped");
        caps.notifier.success("Recording stopped!");
    }

    /// Auto-stop timer fired. Only the session it was armed for may stop the
    /// recording; anything else is stale and ignored.
    pub fn handle_timeout(&mut self, session: u64, caps: &mut Capabilities) {
        match self.dictation {
            Dictation::Recording { session: current } if current == session => {
                self.release(caps);
                log::info!("recording session {session} hit the time limit");
                caps.notifier.success("Recording stopped!");
            }
            _ => log::debug!("ignoring stale recording timeout for session {session}"),
        }
    }

    /// A transcript update replaces the content wholesale: interim and final
    /// results both carry the best-available full transcript.
    pub fn apply_transcript(&mut self, transcript: Transcript) {
        if !self.is_recording() {
            log::debug!("dropping transcript received while idle");
            return;
        }
        self.content = transcript.text;
    }

    /// Validate and hand the note to the store.
    ///
    /// The note kind reflects the dictation state at submit time. A submit
    /// during a recording also stops it — committing the text and leaving
    /// the engine transcribing into a cleared field helps nobody.
    pub fn submit(&mut self, store: &mut NoteStore, caps: &mut Capabilities) -> Option<Uuid> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            caps.notifier.error("Please fill in both title and content");
            return None;
        }

        let kind = if self.is_recording() {
            NoteKind::Audio
        } else {
            NoteKind::Text
        };
        let title = std::mem::take(&mut self.title);
        let content = std::mem::take(&mut self.content);

        // Trimmed fields were just checked, so create cannot reject here.
        let id = match store.create(title, content, kind) {
            Ok(note) => note.id,
            Err(e) => {
                log::error!("note creation rejected after validation: {e}");
                caps.notifier.error("Please fill in both title and content");
                return None;
            }
        };

        self.stop_recording(caps);
        caps.notifier.success("Note created!");
        Some(id)
    }

    fn release(&mut self, caps: &mut Capabilities) {
        caps.speech.stop();
        caps.microphone.close();
        self.dictation = Dictation::Idle;
    }
}
