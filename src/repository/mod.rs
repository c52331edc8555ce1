mod embedded;
mod memory;
mod postgres;
pub mod schema;

pub use memory::InMemoryNoteRepository;
pub use postgres::PgNoteRepository;

use async_trait::async_trait;

use crate::models::{NewNote, Note};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Data access for notes.
///
/// Implementations do no validation of their own; callers are expected to
/// hand over notes that already satisfy the non-empty field rules.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Every stored note, ordered by id.
    async fn get_all_notes(&self) -> Result<Vec<Note>, RepositoryError>;

    /// Inserts a note and returns it with its store-assigned id.
    async fn save_note(&self, note: NewNote) -> Result<Note, RepositoryError>;

    /// Returns `false` when no note had this id.
    async fn delete_note(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Overwrites every field of the note with the same id. Returns `None`
    /// without inserting anything when the id is unknown.
    async fn update_note(&self, note: Note) -> Result<Option<Note>, RepositoryError>;

    async fn get_note_by_id(&self, id: i64) -> Result<Option<Note>, RepositoryError>;
}
