//! In-memory notes store owned by the host shell

use notes_types::{Note, NoteId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Note not found: {0}")]
    NotFound(NoteId),
}

/// Ordered notes (newest first) plus the current selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteStore {
    notes: Vec<Note>,
    current: Option<NoteId>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store; the first note becomes current.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let current = notes.first().map(|note| note.id.clone());
        Self { notes, current }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The selected note, or the first note when the selection is stale.
    pub fn current_note(&self) -> Option<&Note> {
        self.current
            .as_ref()
            .and_then(|id| self.find(id))
            .or_else(|| self.notes.first())
    }

    pub fn current_id(&self) -> Option<NoteId> {
        self.current_note().map(|note| note.id.clone())
    }

    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Insert a new note at the front and select it.
    pub fn create_note(&mut self, body: impl Into<String>) -> NoteId {
        let note = Note::new(body);
        let id = note.id.clone();
        self.notes.insert(0, note);
        self.current = Some(id.clone());
        dioxus_logger::tracing::debug!("Created note {}", id);
        id
    }

    pub fn select(&mut self, id: &NoteId) -> Result<(), StoreError> {
        if self.find(id).is_none() {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.current = Some(id.clone());
        Ok(())
    }

    /// Remove a note. Deleting the current note moves the selection to the
    /// first remaining note.
    pub fn delete_note(&mut self, id: &NoteId) -> Result<Note, StoreError> {
        let index = self
            .notes
            .iter()
            .position(|note| &note.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let removed = self.notes.remove(index);

        if self.current.as_ref() == Some(id) {
            self.current = self.notes.first().map(|note| note.id.clone());
        }
        dioxus_logger::tracing::debug!("Deleted note {}", id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> NoteStore {
        NoteStore::with_notes(vec![
            Note::with_id("a", "Alpha"),
            Note::with_id("b", "Beta"),
            Note::with_id("c", "Gamma"),
        ])
    }

    fn ids(store: &NoteStore) -> Vec<&str> {
        store.notes().iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn seeding_selects_first_note() {
        let store = seeded();
        assert_eq!(store.current_id(), Some(NoteId::from("a")));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn empty_store_has_no_current_note() {
        let store = NoteStore::new();
        assert!(store.is_empty());
        assert_eq!(store.current_note(), None);
    }

    #[test]
    fn created_note_goes_first_and_is_selected() {
        let mut store = seeded();
        let id = store.create_note("# New");
        assert_eq!(store.notes()[0].id, id);
        assert_eq!(store.current_id(), Some(id));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn select_unknown_id_fails() {
        let mut store = seeded();
        let err = store.select(&NoteId::from("nope")).unwrap_err();
        assert_eq!(err, StoreError::NotFound(NoteId::from("nope")));
        assert_eq!(store.current_id(), Some(NoteId::from("a")));
    }

    #[test]
    fn deleting_current_moves_selection_to_first() {
        let mut store = seeded();
        store.select(&NoteId::from("b")).unwrap();
        let removed = store.delete_note(&NoteId::from("b")).unwrap();
        assert_eq!(removed.body, "Beta");
        assert_eq!(ids(&store), vec!["a", "c"]);
        assert_eq!(store.current_id(), Some(NoteId::from("a")));
    }

    #[test]
    fn deleting_other_note_keeps_selection() {
        let mut store = seeded();
        store.select(&NoteId::from("c")).unwrap();
        store.delete_note(&NoteId::from("a")).unwrap();
        assert_eq!(store.current_id(), Some(NoteId::from("c")));
    }

    #[test]
    fn deleting_last_note_clears_selection() {
        let mut store = NoteStore::with_notes(vec![Note::with_id("only", "x")]);
        store.delete_note(&NoteId::from("only")).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.current_id(), None);
    }

    #[test]
    fn deleting_unknown_note_fails() {
        let mut store = seeded();
        assert!(matches!(
            store.delete_note(&NoteId::from("zzz")),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.len(), 3);
    }
}
