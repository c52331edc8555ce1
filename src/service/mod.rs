use crate::{
    dto::NoteRequest,
    models::{NewNote, Note},
    repository::{NoteRepository, RepositoryError},
};

use chrono::{DateTime, SubsecRound, Utc};

use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum NoteServiceError {
    #[error("Fields should not be empty")]
    EmptyFields,

    #[error("Note {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
}

/// Current time at the precision the database keeps.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl NoteService {
    pub const fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.repo.get_all_notes().await?)
    }

    pub async fn add_note(&self, request: NoteRequest) -> Result<Note, NoteServiceError> {
        if request.has_empty_fields() {
            return Err(NoteServiceError::EmptyFields);
        }

        let note = self
            .repo
            .save_note(NewNote {
                title: request.title,
                content: request.content,
                status: request.status,
                created_at: now(),
            })
            .await?;

        tracing::info!("Created note {}", note.id);
        Ok(note)
    }

    /// Deleting an id that does not exist is not an error.
    pub async fn delete_note(&self, id: i64) -> Result<(), NoteServiceError> {
        if self.repo.delete_note(id).await? {
            tracing::info!("Deleted note {id}");
        } else {
            tracing::debug!("Delete of unknown note {id} ignored");
        }
        Ok(())
    }

    /// Overwrites every field of the note, including `created_at`, which is
    /// reset to the time of the update.
    pub async fn update_note(
        &self,
        id: i64,
        request: NoteRequest,
    ) -> Result<Note, NoteServiceError> {
        if request.has_empty_fields() {
            return Err(NoteServiceError::EmptyFields);
        }

        let note = Note {
            id,
            title: request.title,
            content: request.content,
            status: request.status,
            created_at: now(),
        };

        match self.repo.update_note(note).await? {
            Some(note) => {
                tracing::info!("Updated note {id}");
                Ok(note)
            }
            None => Err(NoteServiceError::NotFound(id)),
        }
    }

    pub async fn get_note(&self, id: i64) -> Result<Note, NoteServiceError> {
        self.repo
            .get_note_by_id(id)
            .await?
            .ok_or(NoteServiceError::NotFound(id))
    }
}
