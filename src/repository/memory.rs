use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{NoteRepository, RepositoryError};
use crate::models::{NewNote, Note};

#[derive(Default)]
struct State {
    last_id: i64,
    notes: BTreeMap<i64, Note>,
}

/// Process-local note store. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryNoteRepository {
    state: Mutex<State>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn get_all_notes(&self) -> Result<Vec<Note>, RepositoryError> {
        Ok(self.state.lock().await.notes.values().cloned().collect())
    }

    async fn save_note(&self, note: NewNote) -> Result<Note, RepositoryError> {
        let mut state = self.state.lock().await;
        state.last_id += 1;

        let note = Note {
            id: state.last_id,
            title: note.title,
            content: note.content,
            status: note.status,
            created_at: note.created_at,
        };
        state.notes.insert(note.id, note.clone());

        Ok(note)
    }

    async fn delete_note(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.state.lock().await.notes.remove(&id).is_some())
    }

    async fn update_note(&self, note: Note) -> Result<Option<Note>, RepositoryError> {
        let mut state = self.state.lock().await;

        Ok(state.notes.get_mut(&note.id).map(|stored| {
            *stored = note;
            stored.clone()
        }))
    }

    async fn get_note_by_id(&self, id: i64) -> Result<Option<Note>, RepositoryError> {
        Ok(self.state.lock().await.notes.get(&id).cloned())
    }
}
