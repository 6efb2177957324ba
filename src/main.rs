#![allow(dead_code)]

use tokio::sync::mpsc;

use murmur::application::App;
use murmur::capability::sim::{SimClipboard, SimImageStore, SimMicrophone, SimNotifier, SimSpeech};
use murmur::capability::Capabilities;
use murmur::config::MurmurConfig;
use murmur::message::{Command, Message};

fn init_logging(config: &MurmurConfig) {
    // Log to the systemd user journal (`journalctl --user -t murmur -f`).
    // Wrapper filters: murmur crate at info/debug (per config), everything else at warn.
    struct FilteredJournal {
        inner: systemd_journal_logger::JournalLog,
    }

    impl log::Log for FilteredJournal {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            if metadata.target().starts_with("murmur") {
                let max = if murmur::debug_logging() {
                    log::LevelFilter::Debug
                } else {
                    log::LevelFilter::Info
                };
                metadata.level() <= max
            } else {
                metadata.level() <= log::LevelFilter::Warn
            }
        }
        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                self.inner.log(record);
            }
        }
        fn flush(&self) {
            self.inner.flush();
        }
    }

    let journal = systemd_journal_logger::JournalLog::new()
        .unwrap()
        .with_syslog_identifier("murmur".to_string());

    murmur::set_debug_logging(config.debug_logging);

    log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).unwrap();
    // Global max must be Debug so murmur debug logs can pass through when toggled
    log::set_max_level(log::LevelFilter::Debug);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = MurmurConfig::load();
    init_logging(&config);

    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

    let caps = Capabilities {
        microphone: Box::new(SimMicrophone::default()),
        speech: Box::new(SimSpeech::new(
            tx.clone(),
            vec!["hello".to_string(), "hello world".to_string()],
        )),
        clipboard: Box::new(SimClipboard::default()),
        images: Box::new(SimImageStore),
        notifier: Box::new(SimNotifier),
    };
    let mut app = App::new(config, caps);

    // Scripted session: a typed note, a dictated note, then shutdown.
    let script = tx.clone();
    tokio::spawn(async move {
        let pause = std::time::Duration::from_millis(100);
        let send = |msg| {
            let _ = script.send(msg);
        };

        send(Message::CreatorTitleChanged("Groceries".into()));
        send(Message::CreatorContentChanged("milk,eggs".into()));
        send(Message::CreatorSubmit);

        send(Message::StartRecording);
        send(Message::CreatorTitleChanged("Dictated".into()));
        // Give the simulated engine time to deliver both transcripts.
        tokio::time::sleep(pause * 10).await;
        send(Message::CreatorSubmit);

        send(Message::SearchQueryChanged("milk".into()));
        tokio::time::sleep(pause).await;
        send(Message::Shutdown);
    });

    while let Some(message) = rx.recv().await {
        let quit = matches!(message, Message::Shutdown);
        for command in app.update(message) {
            match command {
                Command::RecordingTimer { session, limit } => {
                    let timer_tx = tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(limit).await;
                        let _ = timer_tx.send(Message::RecordingElapsed(session));
                    });
                }
            }
        }
        if quit {
            break;
        }
    }

    log::info!(
        "session ended with {} notes, {} matching \"{}\"",
        app.store.len(),
        app.visible_notes().len(),
        app.search_query
    );
}
