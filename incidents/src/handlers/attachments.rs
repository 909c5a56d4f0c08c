//! Attachment handlers
//!
//! Files present in the attachments directory are served by `ServeDir`.
//! Anything it cannot find lands here: a bare file name gets its metadata,
//! deeper paths are a 404.

use axum::{extract::State, http::Uri, Json};

use crate::domain::entities::AttachmentMetadata;
use crate::error::AppError;
use crate::AppState;

/// GET /api/adjuntos/:filename (when the file is not on disk)
pub async fn attachment_metadata(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<AttachmentMetadata>, AppError> {
    let raw = uri.path().trim_start_matches('/');
    let filename = urlencoding::decode(raw)
        .map_err(|_| AppError::BadRequest(format!("Nombre de adjunto no válido: {}", raw)))?;

    if filename.is_empty() || filename.contains('/') {
        tracing::debug!(path = %filename, "Attachment not found");
        return Err(AppError::NotFound(format!(
            "Adjunto no encontrado: {}",
            filename
        )));
    }

    Ok(Json(state.attachment_service.resolve(&filename)))
}
