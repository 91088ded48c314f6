//! Document upload, CRUD, search, and download handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use futures::TryStreamExt;

use docflow_core::error::AppError;
use docflow_core::types::{CategoryId, DocumentId};
use docflow_service::document::{DocumentQuery, Upload};
use docflow_storage::StoredFile;

use super::parse_id;
use crate::dto::request::{DocumentListParams, UpdateDocumentRequest};
use crate::dto::response::{DocumentResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Non-file fields of an upload form.
#[derive(Debug, Default)]
struct UploadForm {
    title: Option<String>,
    category_id: Option<CategoryId>,
    tags: Option<String>,
}

/// The saved `file` part of an upload form.
#[derive(Debug)]
struct SavedPart {
    stored: StoredFile,
    file_name: String,
    file_type: Option<String>,
}

async fn field_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart field: {e}")))
}

/// Read the multipart body, streaming the `file` part straight into the file store.
async fn read_upload(
    state: &AppState,
    multipart: &mut Multipart,
    saved: &mut Option<SavedPart>,
) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" if saved.is_none() => {
                let file_name = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .map(String::from)
                    .ok_or_else(|| AppError::validation("Uploaded file has no name"))?;
                let file_type = field.content_type().map(String::from);

                let body = Box::pin(field.map_err(std::io::Error::other));
                let stored = state.document_service.save_content(body, &file_name).await?;

                *saved = Some(SavedPart {
                    stored,
                    file_name,
                    file_type,
                });
            }
            "title" => form.title = Some(field_text(field).await?),
            "tags" => form.tags = Some(field_text(field).await?),
            "category_id" => {
                let raw = field_text(field).await?;
                form.category_id = match raw.trim() {
                    "" => None,
                    id => Some(
                        id.parse()
                            .map_err(|_| AppError::validation("Invalid category_id"))?,
                    ),
                };
            }
            _ => {}
        }
    }

    Ok(form)
}

/// POST /api/documents
pub async fn upload_document(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<DocumentResponse>, ApiError> {
    let mut saved = None;
    let form = match read_upload(&state, &mut multipart, &mut saved).await {
        Ok(form) => form,
        Err(e) => {
            if let Some(part) = saved {
                state
                    .document_service
                    .discard_content(&part.stored.locator)
                    .await;
            }
            return Err(e.into());
        }
    };

    let part = saved.ok_or_else(|| AppError::validation("file is required"))?;

    let document = state
        .document_service
        .finish_upload(
            &auth,
            Upload {
                stored: part.stored,
                file_name: part.file_name,
                file_type: part.file_type,
                title: form.title,
                category_id: form.category_id,
                tags: form.tags,
            },
        )
        .await?;

    Ok(Json(document.into()))
}

/// GET /api/documents?category_id=&search=
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<DocumentListParams>,
) -> Result<Json<Vec<DocumentResponse>>, ApiError> {
    let category_id = match params.category_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<CategoryId>() {
            Ok(id) => Some(id),
            // No document can reference an id that is not a valid category id.
            Err(_) => return Ok(Json(Vec::new())),
        },
    };

    let query = DocumentQuery {
        category_id,
        search: params.search,
    };
    let documents = state.document_service.list(&auth, &query).await?;
    Ok(Json(documents.into_iter().map(Into::into).collect()))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let id: DocumentId = parse_id(&id, "Document")?;
    let document = state.document_service.get(&auth, id).await?;
    Ok(Json(document.into()))
}

/// PUT /api/documents/{id}
pub async fn update_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateDocumentRequest>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let id: DocumentId = parse_id(&id, "Document")?;
    let document = state
        .document_service
        .update(&auth, id, &req.into())
        .await?;
    Ok(Json(document.into()))
}

/// DELETE /api/documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id: DocumentId = parse_id(&id, "Document")?;
    state.document_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Document deleted successfully")))
}

/// GET /api/documents/{id}/download
pub async fn download_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id: DocumentId = parse_id(&id, "Document")?;
    let download = state.document_service.download(&auth, id).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, download.file_type.as_str())
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition(&download.file_name),
        )
        .body(Body::from_stream(download.stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// `attachment` disposition with an ASCII fallback and an RFC 5987 UTF-8 name.
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if fallback == file_name {
        return format!("attachment; filename=\"{file_name}\"");
    }

    let encoded: String = file_name
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect();
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        assert_eq!(
            content_disposition("invoice q1.pdf"),
            "attachment; filename=\"invoice q1.pdf\""
        );
    }

    #[test]
    fn test_non_ascii_name_gets_encoded_form() {
        let value = content_disposition("résumé.pdf");
        assert!(value.starts_with("attachment; filename=\"r_sum_.pdf\""));
        assert!(value.ends_with("filename*=UTF-8''r%C3%A9sum%C3%A9.pdf"));
        assert!(axum::http::HeaderValue::from_str(&value).is_ok());
    }

    #[test]
    fn test_quotes_are_replaced() {
        let value = content_disposition("a\"b.txt");
        assert!(value.starts_with("attachment; filename=\"a_b.txt\""));
    }
}
