use crate::{
    dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest},
    repository::Repository,
};

use std::sync::Arc;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NoteServiceError {
    #[error("client supplied note id {0}, ids are assigned by the server")]
    IdSupplied(i64),

    #[error("note {0} not found")]
    NotFound(i64),
}

/// CRUD operations over the shared note collection.
///
/// Every operation holds the repository lock for its whole duration.
#[derive(Clone)]
pub struct NoteService {
    repo: Arc<tokio::sync::Mutex<Repository>>,
}

impl NoteService {
    pub const fn new(repo: Arc<tokio::sync::Mutex<Repository>>) -> Self {
        Self { repo }
    }

    pub async fn create_note(
        &self,
        request: CreateNoteRequest,
    ) -> Result<NoteResponse, NoteServiceError> {
        if let Some(id) = request.id.filter(|id| *id != 0) {
            return Err(NoteServiceError::IdSupplied(id));
        }

        let note = self
            .repo
            .lock()
            .await
            .create_note(request.title, request.content);

        tracing::debug!("Created note {}", note.id);

        Ok(note.into())
    }

    pub async fn update_note(
        &self,
        id: i64,
        request: UpdateNoteRequest,
    ) -> Result<NoteResponse, NoteServiceError> {
        self.repo
            .lock()
            .await
            .update_note(id, request.title, request.content)
            .map(NoteResponse::from)
            .ok_or(NoteServiceError::NotFound(id))
    }

    pub async fn delete_note(&self, id: i64) -> Result<(), NoteServiceError> {
        if self.repo.lock().await.delete_note(id) {
            tracing::debug!("Deleted note {id}");
            Ok(())
        } else {
            Err(NoteServiceError::NotFound(id))
        }
    }

    pub async fn get_one_note(&self, id: i64) -> Result<NoteResponse, NoteServiceError> {
        self.repo
            .lock()
            .await
            .get_one_note(id)
            .map(NoteResponse::from)
            .ok_or(NoteServiceError::NotFound(id))
    }

    pub async fn get_all_notes(&self) -> Vec<NoteResponse> {
        self.repo
            .lock()
            .await
            .get_all_notes()
            .into_iter()
            .map(NoteResponse::from)
            .collect()
    }
}
