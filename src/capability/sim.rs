//! In-process capability simulations used by the demo binary.
//!
//! These stand in for the host's real services: the speech engine replays a
//! scripted transcript over a tokio task, the clipboard remembers the last
//! write, the image store mints blob-style references, and toasts land in
//! the journal.

use std::path::Path;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::{CapabilityError, Clipboard, ImageStore, Microphone, Notifier, SpeechToText, Transcript};
use crate::message::Message;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

/// Always-granting microphone.
#[derive(Debug, Default)]
pub struct SimMicrophone {
    open: bool,
}

impl Microphone for SimMicrophone {
    fn open(&mut self) -> Result<(), CapabilityError> {
        self.open = true;
        log::debug!("microphone stream opened");
        Ok(())
    }

    fn close(&mut self) {
        if self.open {
            self.open = false;
            log::debug!("microphone stream closed");
        }
    }
}

/// Scripted speech engine. On start it spawns a task that sends the script
/// as cumulative interim transcripts, finishing with a final one.
pub struct SimSpeech {
    tx: UnboundedSender<Message>,
    script: Vec<String>,
    task: Option<JoinHandle<()>>,
}

impl SimSpeech {
    pub fn new(tx: UnboundedSender<Message>, script: Vec<String>) -> Self {
        Self {
            tx,
            script,
            task: None,
        }
    }
}

impl SpeechToText for SimSpeech {
    fn start(&mut self) -> Result<(), CapabilityError> {
        let tx = self.tx.clone();
        let script = self.script.clone();
        self.task = Some(tokio::spawn(async move {
            let last = script.len().saturating_sub(1);
            for (i, text) in script.into_iter().enumerate() {
                tokio::time::sleep(std::time::Duration::from_millis(300)).await;
                let event = Transcript {
                    text,
                    is_final: i == last,
                };
                if tx.send(Message::TranscriptReceived(event)).is_err() {
                    break;
                }
            }
        }));
        log::debug!("speech recognition started");
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("speech recognition stopped");
        }
    }
}

/// Clipboard that keeps the last written text.
#[derive(Debug, Default)]
pub struct SimClipboard {
    last: Option<String>,
}

impl SimClipboard {
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl Clipboard for SimClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CapabilityError> {
        log::debug!("clipboard write ({} chars)", text.len());
        self.last = Some(text.to_string());
        Ok(())
    }
}

/// Mints blob-style references for image files without touching storage.
#[derive(Debug, Default)]
pub struct SimImageStore;

impl ImageStore for SimImageStore {
    fn local_url(&mut self, path: &Path) -> Result<String, CapabilityError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => {
                Ok(format!("blob:murmur/{}", Uuid::new_v4()))
            }
            _ => Err(CapabilityError::Image(format!(
                "{} is not an image file",
                path.display()
            ))),
        }
    }
}

/// Toasts routed to the journal.
#[derive(Debug, Default)]
pub struct SimNotifier;

impl Notifier for SimNotifier {
    fn success(&mut self, message: &str) {
        log::info!("toast: {message}");
    }

    fn error(&mut self, message: &str) {
        log::warn!("toast: {message}");
    }
}
