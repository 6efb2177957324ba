use crate::core::Note;

/// Per-card view state: expanded/fullscreen and edit mode with buffered
/// drafts. Local to the rendered card, never part of the note itself.
/// Drafts are committed on save and thrown away on cancel.
#[derive(Debug, Clone, Default)]
pub struct NoteCardState {
    pub expanded: bool,
    pub editing: bool,
    pub draft_title: String,
    pub draft_content: String,
}

impl NoteCardState {
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Enter edit mode, seeding the drafts from the current note.
    pub fn begin_edit(&mut self, note: &Note) {
        self.editing = true;
        self.draft_title = note.title.clone();
        self.draft_content = note.content.clone();
    }

    /// Leave edit mode without committing.
    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.draft_title.clear();
        self.draft_content.clear();
    }

    /// Leave edit mode, handing the drafts to the caller for committing.
    pub fn take_drafts(&mut self) -> (String, String) {
        self.editing = false;
        (
            std::mem::take(&mut self.draft_title),
            std::mem::take(&mut self.draft_content),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoteKind;

    fn note() -> Note {
        Note::new("title", "content", NoteKind::Text)
    }

    #[test]
    fn toggles_default_off_and_are_independent() {
        let mut state = NoteCardState::default();
        assert!(!state.expanded);
        assert!(!state.editing);
        state.toggle_expanded();
        assert!(state.expanded);
        assert!(!state.editing);
        state.begin_edit(&note());
        assert!(state.expanded);
        assert!(state.editing);
    }

    #[test]
    fn begin_edit_seeds_drafts_from_note() {
        let mut state = NoteCardState::default();
        state.begin_edit(&note());
        assert_eq!(state.draft_title, "title");
        assert_eq!(state.draft_content, "content");
    }

    #[test]
    fn cancel_discards_drafts() {
        let mut state = NoteCardState::default();
        state.begin_edit(&note());
        state.draft_title = "changed".to_string();
        state.cancel_edit();
        assert!(!state.editing);
        assert!(state.draft_title.is_empty());
    }

    #[test]
    fn take_drafts_exits_edit_mode() {
        let mut state = NoteCardState::default();
        state.begin_edit(&note());
        state.draft_content = "edited".to_string();
        let (title, content) = state.take_drafts();
        assert!(!state.editing);
        assert_eq!(title, "title");
        assert_eq!(content, "edited");
    }
}
