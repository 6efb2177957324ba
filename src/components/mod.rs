pub mod note_card;

pub use note_card::NoteCardState;
