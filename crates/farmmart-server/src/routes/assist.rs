//! Assistant proxy handlers: chat and crop-disease prediction.

use std::io::Write;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// `POST /api/chat`: forward a message to the farming assistant.
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::MissingField("message"));
    }

    let assistant = state
        .assistant
        .as_ref()
        .ok_or(ApiError::AssistantUnavailable)?;

    let response = assistant.chat(message).await?;
    info!(chars = response.len(), "chat response generated");

    Ok(Json(ChatResponse { response }))
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: String,
    /// ISO-8601 timestamp of the analysis.
    pub timestamp: String,
}

/// `POST /api/predict-disease`: analyze an uploaded crop photo.
///
/// The upload is spooled to a temp file that is removed when the request
/// ends, whether the analysis succeeds or not.
pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<PredictResponse>, ApiError> {
    let upload = read_image_field(multipart).await?;
    let (spool, mime_type) = upload.ok_or(ApiError::MissingField("image"))?;

    let image = std::fs::read(spool.path()).map_err(|e| ApiError::Upload(e.to_string()))?;

    let prediction = match &state.assistant {
        Some(assistant) => assistant.diagnose(&image, &mime_type).await?,
        None => state.predictor.predict().summary_text(),
    };

    Ok(Json(PredictResponse {
        prediction,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Spool the `image` multipart field to a temp file.
///
/// The file is unlinked when the returned handle drops.
async fn read_image_field(
    mut multipart: Multipart,
) -> Result<Option<(NamedTempFile, String)>, ApiError> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field
            .content_type()
            .unwrap_or("image/jpeg")
            .to_string();

        let mut spool = NamedTempFile::new().map_err(|e| ApiError::Upload(e.to_string()))?;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| ApiError::Upload(e.to_string()))?
        {
            spool
                .write_all(&chunk)
                .map_err(|e| ApiError::Upload(e.to_string()))?;
        }

        return Ok(Some((spool, mime_type)));
    }

    Ok(None)
}
