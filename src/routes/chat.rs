use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::{
        gateway::{GatewayClient, GatewayError},
        prompt::build_messages,
        usage::UsageSnapshot,
    },
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = Uuid::new_v4();

    let (language, result) = match accept(&state, payload) {
        Ok((gateway, request)) => {
            let result = forward(gateway, &request, request_id).await;
            (Some(request.language), result)
        }
        Err(err) => (None, Err(err)),
    };

    let outcome = match &result {
        Ok(_) => "ok",
        Err(err) => {
            log_failure(request_id, err);
            err.outcome()
        }
    };
    state.usage.record(language, outcome).await;

    result.map(|response| Json(ChatResponse { response }))
}

/// Everything that can refuse a request without touching the network.
fn accept(
    state: &SharedState,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<(&GatewayClient, ChatRequest), AppError> {
    // Checked first so a missing credential never reaches the network, whatever the body.
    let gateway = state.gateway.as_ref().ok_or(AppError::NotConfigured)?;

    let Json(mut request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let trimmed = request.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }
    request.message = trimmed.to_string();

    Ok((gateway, request))
}

async fn forward(
    gateway: &GatewayClient,
    request: &ChatRequest,
    request_id: Uuid,
) -> Result<String, AppError> {
    info!(
        %request_id,
        language = request.language.code(),
        context = request.context.as_deref().unwrap_or(""),
        "relaying chat message"
    );

    let messages = build_messages(request.language, request.context.as_deref(), &request.message);
    let reply = gateway.complete(&messages).await?;

    info!(%request_id, reply_len = reply.len(), "completion received");
    Ok(reply)
}

fn log_failure(request_id: Uuid, err: &AppError) {
    match err {
        AppError::BadRequest(reason) => warn!(%request_id, "rejected chat request: {reason}"),
        AppError::Gateway(GatewayError::Upstream { status, body }) => {
            error!(%request_id, %status, "AI gateway error: {body}")
        }
        AppError::Gateway(GatewayError::Transport(source)) => {
            error!(%request_id, "AI gateway request failed: {source}")
        }
        other => error!(%request_id, "error in chat relay: {other}"),
    }
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<UsageSnapshot> {
    Json(state.usage.snapshot().await)
}
