use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Note;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID
    pub id: i64,
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
    /// Free-form status label
    pub status: String,
    /// Creation time, reset on every update
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            status: note.status,
            created_at: note.created_at,
        }
    }
}

/// Client-supplied note fields, used by both create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteRequest {
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
    /// Free-form status label
    pub status: String,
}

impl NoteRequest {
    pub fn has_empty_fields(&self) -> bool {
        self.title.is_empty() || self.content.is_empty() || self.status.is_empty()
    }
}

impl From<&Note> for NoteRequest {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            status: note.status.clone(),
        }
    }
}

// HTML form parameters

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteForm {
    pub note_title: String,
    pub note_content: String,
    pub note_status: String,
}

impl From<NoteForm> for NoteRequest {
    fn from(form: NoteForm) -> Self {
        Self {
            title: form.note_title,
            content: form.note_content,
            status: form.note_status,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteIdForm {
    pub note_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteForm {
    pub note_id: i64,
    pub note_title: String,
    pub note_content: String,
    pub note_status: String,
}

impl UpdateNoteForm {
    pub fn into_parts(self) -> (i64, NoteRequest) {
        (
            self.note_id,
            NoteRequest {
                title: self.note_title,
                content: self.note_content,
                status: self.note_status,
            },
        )
    }
}
