use std::collections::BTreeMap;

use crate::models::Note;

const SEED_NOTES: [(&str, &str); 4] = [
    ("First Note", "Just a note"),
    ("Shopping", "Milk, eggs, bread"),
    ("Ideas", "Write a notes server"),
    ("Reminder", "Call the dentist on Monday"),
];

/// In-memory note collection keyed by id.
///
/// `last_id` only ever grows, so ids of deleted notes are never handed out
/// again.
#[derive(Debug, Default)]
pub struct Repository {
    notes: BTreeMap<i64, Note>,
    last_id: i64,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with the four seed notes, ids 1 to 4.
    pub fn seeded() -> Self {
        let mut repo = Self::new();

        for (title, content) in SEED_NOTES {
            repo.create_note(title.to_string(), content.to_string());
        }

        repo
    }

    pub fn create_note(&mut self, title: String, content: String) -> Note {
        self.last_id += 1;

        let note = Note::new(self.last_id, title, content);
        self.notes.insert(note.id, note.clone());

        note
    }

    pub fn update_note(&mut self, id: i64, title: String, content: String) -> Option<Note> {
        let note = self.notes.get_mut(&id)?;
        note.title = title;
        note.content = content;

        Some(note.clone())
    }

    pub fn delete_note(&mut self, id: i64) -> bool {
        self.notes.remove(&id).is_some()
    }

    pub fn get_one_note(&self, id: i64) -> Option<Note> {
        self.notes.get(&id).cloned()
    }

    pub fn get_all_notes(&self) -> Vec<Note> {
        self.notes.values().cloned().collect()
    }

    pub const fn last_id(&self) -> i64 {
        self.last_id
    }

    pub fn count(&self) -> usize {
        self.notes.len()
    }
}
