use async_trait::async_trait;
use tokio_postgres::{Client, NoTls};

use super::{
    NoteRepository, RepositoryError,
    embedded::migrations,
    schema::{self, note_from_row},
};
use crate::models::{NewNote, Note};

pub struct PgNoteRepository {
    client: Client,
}

impl PgNoteRepository {
    pub async fn new(database_dsn: &str) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }

    fn client(&self) -> Result<&Client, RepositoryError> {
        if self.client.is_closed() {
            return Err(RepositoryError::Unavailable(
                "database connection is closed".to_string(),
            ));
        }
        Ok(&self.client)
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn get_all_notes(&self) -> Result<Vec<Note>, RepositoryError> {
        let rows = self
            .client()?
            .query(schema::select_all_sql().as_str(), &[])
            .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn save_note(&self, note: NewNote) -> Result<Note, RepositoryError> {
        let row = self
            .client()?
            .query_one(
                schema::insert_sql().as_str(),
                &[&note.title, &note.content, &note.status, &note.created_at],
            )
            .await?;

        Ok(note_from_row(&row))
    }

    async fn delete_note(&self, id: i64) -> Result<bool, RepositoryError> {
        let rows = self
            .client()?
            .execute(schema::delete_sql().as_str(), &[&id])
            .await?;

        Ok(rows == 1)
    }

    async fn update_note(&self, note: Note) -> Result<Option<Note>, RepositoryError> {
        let row = self
            .client()?
            .query_opt(
                schema::update_sql().as_str(),
                &[
                    &note.title,
                    &note.content,
                    &note.status,
                    &note.created_at,
                    &note.id,
                ],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn get_note_by_id(&self, id: i64) -> Result<Option<Note>, RepositoryError> {
        let row = self
            .client()?
            .query_opt(schema::select_one_sql().as_str(), &[&id])
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }
}
