//! The chat transport handler.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::catalog::{self, SiteContext};
use crate::error::ApiError;
use crate::models::PropertyListing;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    /// Client-side context; accepted for compatibility, not consulted.
    #[serde(default)]
    pub context: Value,
}

/// Normalized response envelope for every successful chat turn.
#[derive(Debug, Serialize)]
pub struct ChatEnvelope {
    pub response: String,
    pub recommendations: Vec<PropertyListing>,
    #[serde(rename = "type")]
    pub category: String,
    pub context: &'static SiteContext,
    pub ai_powered: bool,
}

/// `POST /api/chat`: validate, run the assistant chain, wrap the reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatEnvelope>, ApiError> {
    let message = req
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or(ApiError::MissingFields)?;
    let user_id = req
        .user_id
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(ApiError::MissingFields)?;
    if !req.context.is_null() {
        debug!("client supplied context, ignoring: {}", req.context);
    }

    info!("Chat message from {}: {:?}", user_id, message);
    let reply = state.service.reply(message, user_id).await;
    info!("Replying to {} with category {}", user_id, reply.category);

    Ok(Json(ChatEnvelope {
        response: reply.response,
        recommendations: reply.recommendations,
        category: reply.category,
        context: catalog::site_context(),
        ai_powered: true,
    }))
}
