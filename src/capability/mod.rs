//! Host capability interfaces.
//!
//! Everything the core depends on but does not implement — clipboard,
//! image handling, microphone, speech engine, toasts — sits behind one of
//! these traits so the creator's state machine runs without real devices.
//! Transcript updates arrive out-of-band as `Message::TranscriptReceived`;
//! the traits only cover acquisition and release.

pub mod sim;

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("could not access microphone: {0}")]
    Microphone(String),
    #[error("speech recognition unavailable: {0}")]
    Speech(String),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error("could not read image file: {0}")]
    Image(String),
}

/// One continuous-transcription update. Interim and final results both carry
/// the full transcript so far, so consumers replace rather than append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    pub is_final: bool,
}

pub trait Microphone {
    fn open(&mut self) -> Result<(), CapabilityError>;
    /// Release the capture stream. Must be idempotent.
    fn close(&mut self);
}

pub trait SpeechToText {
    fn start(&mut self) -> Result<(), CapabilityError>;
    /// Stop transcribing. Must be idempotent.
    fn stop(&mut self);
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CapabilityError>;
}

pub trait ImageStore {
    /// Derive a locally-valid display reference for an image file.
    /// Placeholder capability: nothing is uploaded anywhere.
    fn local_url(&mut self, path: &Path) -> Result<String, CapabilityError>;
}

/// Transient user-facing toasts. Fire-and-forget, no delivery guarantee.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// The capability set handed to the app at startup.
pub struct Capabilities {
    pub microphone: Box<dyn Microphone>,
    pub speech: Box<dyn SpeechToText>,
    pub clipboard: Box<dyn Clipboard>,
    pub images: Box<dyn ImageStore>,
    pub notifier: Box<dyn Notifier>,
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Shared counters/logs the fakes write into, held by the test as well.
    #[derive(Default)]
    pub struct Recorded {
        pub mic_opens: AtomicUsize,
        pub mic_closes: AtomicUsize,
        pub speech_starts: AtomicUsize,
        pub speech_stops: AtomicUsize,
        pub copied: Mutex<Vec<String>>,
        pub toasts: Mutex<Vec<String>>,
        pub errors: Mutex<Vec<String>>,
    }

    impl Recorded {
        pub fn mic_closes(&self) -> usize {
            self.mic_closes.load(Ordering::SeqCst)
        }

        pub fn speech_stops(&self) -> usize {
            self.speech_stops.load(Ordering::SeqCst)
        }

        pub fn error_count(&self) -> usize {
            self.errors.lock().unwrap().len()
        }
    }

    pub struct FakeMicrophone {
        pub recorded: Arc<Recorded>,
        pub deny: bool,
    }

    impl Microphone for FakeMicrophone {
        fn open(&mut self) -> Result<(), CapabilityError> {
            if self.deny {
                return Err(CapabilityError::Microphone("permission denied".into()));
            }
            self.recorded.mic_opens.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn close(&mut self) {
            self.recorded.mic_closes.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub struct FakeSpeech {
        pub recorded: Arc<Recorded>,
        pub deny: bool,
    }

    impl SpeechToText for FakeSpeech {
        fn start(&mut self) -> Result<(), CapabilityError> {
            if self.deny {
                return Err(CapabilityError::Speech("no engine".into()));
            }
            self.recorded.speech_starts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn stop(&mut self) {
            self.recorded.speech_stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub struct FakeClipboard {
        pub recorded: Arc<Recorded>,
        pub fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), CapabilityError> {
            if self.fail {
                return Err(CapabilityError::Clipboard("denied".into()));
            }
            self.recorded.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    pub struct FakeImageStore {
        pub fail: bool,
    }

    impl ImageStore for FakeImageStore {
        fn local_url(&mut self, path: &Path) -> Result<String, CapabilityError> {
            if self.fail {
                return Err(CapabilityError::Image(path.display().to_string()));
            }
            Ok(format!("blob:murmur/{}", path.display()))
        }
    }

    pub struct FakeNotifier {
        pub recorded: Arc<Recorded>,
    }

    impl Notifier for FakeNotifier {
        fn success(&mut self, message: &str) {
            self.recorded.toasts.lock().unwrap().push(message.to_string());
        }

        fn error(&mut self, message: &str) {
            self.recorded.errors.lock().unwrap().push(message.to_string());
        }
    }

    /// Fully permissive capability set plus the shared recording handle.
    pub fn capabilities() -> (Capabilities, Arc<Recorded>) {
        capabilities_with(false, false)
    }

    pub fn capabilities_with(deny_mic: bool, deny_speech: bool) -> (Capabilities, Arc<Recorded>) {
        let recorded = Arc::new(Recorded::default());
        let caps = Capabilities {
            microphone: Box::new(FakeMicrophone {
                recorded: recorded.clone(),
                deny: deny_mic,
            }),
            speech: Box::new(FakeSpeech {
                recorded: recorded.clone(),
                deny: deny_speech,
            }),
            clipboard: Box::new(FakeClipboard {
                recorded: recorded.clone(),
                fail: false,
            }),
            images: Box::new(FakeImageStore { fail: false }),
            notifier: Box::new(FakeNotifier {
                recorded: recorded.clone(),
            }),
        };
        (caps, recorded)
    }

    /// Capability set whose clipboard and/or image store reject every call.
    pub fn capabilities_failing(
        fail_clipboard: bool,
        fail_images: bool,
    ) -> (Capabilities, Arc<Recorded>) {
        let (mut caps, recorded) = capabilities();
        if fail_clipboard {
            caps.clipboard = Box::new(FakeClipboard {
                recorded: recorded.clone(),
                fail: true,
            });
        }
        if fail_images {
            caps.images = Box::new(FakeImageStore { fail: true });
        }
        (caps, recorded)
    }
}
