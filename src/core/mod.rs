pub mod note;
pub mod store;

pub use note::{Note, NoteKind};
pub use store::{NotePatch, NoteStore, StoreError};
