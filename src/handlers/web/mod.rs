use axum::{
    Form,
    extract::{FromRequest, Query, Request, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_macros::debug_handler;
use serde::de::DeserializeOwned;

use std::sync::Arc;

use crate::{
    dto::{NoteForm, NoteIdForm, NoteRequest, UpdateNoteForm},
    service::{NoteService, NoteServiceError},
    views,
};

/// Form parameters read from an urlencoded body, or from the query string
/// when the request has no body content type. Lets `POST /add?noteTitle=..`
/// behave like the `GET` form of the same route.
pub struct FormParams<T>(pub T);

impl<S, T> FromRequest<S> for FormParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Form(params) = Form::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(params))
        } else {
            let Query(params) =
                Query::<T>::try_from_uri(req.uri()).map_err(IntoResponse::into_response)?;
            Ok(Self(params))
        }
    }
}

fn internal_error(err: &NoteServiceError, custom_error_string: &str) -> Response {
    tracing::error!("{custom_error_string}: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(views::message_page("Something went wrong", custom_error_string)),
    )
        .into_response()
}

fn not_found(err: &NoteServiceError) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(views::message_page("Note not found", &err.to_string())),
    )
        .into_response()
}

fn redirect_to_list() -> Response {
    Redirect::to("/").into_response()
}

#[debug_handler]
pub async fn list_notes(State(service): State<Arc<NoteService>>) -> Response {
    match service.list_notes().await {
        Ok(notes) => Html(views::index_page(&notes, None)).into_response(),
        Err(e) => internal_error(&e, "Failed to get notes"),
    }
}

#[debug_handler]
pub async fn add_note(
    State(service): State<Arc<NoteService>>,
    FormParams(form): FormParams<NoteForm>,
) -> Response {
    match service.add_note(form.into()).await {
        Ok(_) => redirect_to_list(),
        Err(e @ NoteServiceError::EmptyFields) => match service.list_notes().await {
            Ok(notes) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(views::index_page(&notes, Some(&e.to_string()))),
            )
                .into_response(),
            Err(e) => internal_error(&e, "Failed to get notes"),
        },
        Err(e) => internal_error(&e, "Failed to create note"),
    }
}

#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    FormParams(form): FormParams<NoteIdForm>,
) -> Response {
    match service.delete_note(form.note_id).await {
        Ok(()) => redirect_to_list(),
        Err(e) => internal_error(&e, "Failed to delete note"),
    }
}

#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    FormParams(form): FormParams<UpdateNoteForm>,
) -> Response {
    let (id, request) = form.into_parts();

    match service.update_note(id, request.clone()).await {
        Ok(_) => redirect_to_list(),
        Err(e @ NoteServiceError::EmptyFields) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::edit_page(id, &request, Some(&e.to_string()))),
        )
            .into_response(),
        Err(e @ NoteServiceError::NotFound(_)) => not_found(&e),
        Err(e) => internal_error(&e, "Failed to update note"),
    }
}

#[debug_handler]
pub async fn edit_note_form(
    State(service): State<Arc<NoteService>>,
    Query(params): Query<NoteIdForm>,
) -> Response {
    match service.get_note(params.note_id).await {
        Ok(note) => {
            Html(views::edit_page(note.id, &NoteRequest::from(&note), None)).into_response()
        }
        Err(e @ NoteServiceError::NotFound(_)) => not_found(&e),
        Err(e) => internal_error(&e, "Failed to get note"),
    }
}

#[debug_handler]
pub async fn health_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}
