use std::sync::Arc;

use {
    anyhow::Context,
    axum::{
        Json, Router,
        extract::State,
        http::StatusCode,
        response::IntoResponse,
        routing::{get, post},
    },
    tracing::{debug, info, warn},
};

use {
    flowbridge_convert::convert,
    flowbridge_engine::{client::SessionClient, token::StaticTokenSource},
    flowbridge_teams::{activity::TeamsActivity, outbound::TeamsSender},
};

use crate::config::BridgeConfig;

/// Shared per-process state: immutable config plus the two collaborators.
/// Turns for independent conversations may run concurrently on it.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<SessionClient>,
    sender: Arc<TeamsSender>,
    platform: Arc<str>,
    welcome_event: Arc<str>,
}

impl AppState {
    pub fn new(config: BridgeConfig) -> Self {
        let tokens = Arc::new(StaticTokenSource::new(config.access_token));
        Self {
            engine: Arc::new(SessionClient::new(config.engine, tokens)),
            sender: Arc::new(TeamsSender::new(config.teams)),
            platform: config.platform.into(),
            welcome_event: config.welcome_event.into(),
        }
    }
}

/// Build the bridge router (shared between production startup and tests).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", post(webhook_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub async fn serve(bind: &str, port: u16, config: BridgeConfig) -> anyhow::Result<()> {
    let app = build_app(AppState::new(config));
    let addr = format!("{bind}:{port}");
    info!(%addr, "listening for bot framework activities");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn webhook_handler(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let activity: TeamsActivity = match serde_json::from_value(body) {
        Ok(activity) => activity,
        Err(e) => {
            warn!("rejecting unparseable activity: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "malformed activity" })),
            )
                .into_response();
        },
    };

    match handle_turn(&state, &activity).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => {
            warn!("turn failed: {e:#}");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        },
    }
}

async fn handle_turn(state: &AppState, activity: &TeamsActivity) -> anyhow::Result<()> {
    if activity.is_message() {
        return handle_message(state, activity).await;
    }
    let added = activity.added_member_ids();
    if !added.is_empty() {
        return handle_members_added(state, activity, &added).await;
    }
    // Other activity types (typing, reactions, ...) are acknowledged and ignored.
    Ok(())
}

/// One utterance turn: detect intent keyed by the sender, convert the batch,
/// deliver in order.
async fn handle_message(state: &AppState, activity: &TeamsActivity) -> anyhow::Result<()> {
    let Some(utterance) = activity.utterance() else {
        return Ok(());
    };
    let (service_url, conversation_id) = delivery_target(activity)?;
    let session_id = activity.sender_id().unwrap_or(conversation_id);

    let responses = state.engine.detect_intent(utterance, session_id, None).await?;
    let messages = convert(responses, &state.platform);
    debug!(conversation_id, count = messages.len(), "converted response batch");
    state
        .sender
        .send_all(service_url, conversation_id, &messages)
        .await
}

/// One welcome turn per added member, keyed by the member's own session.
async fn handle_members_added(
    state: &AppState,
    activity: &TeamsActivity,
    added: &[&str],
) -> anyhow::Result<()> {
    let (service_url, conversation_id) = delivery_target(activity)?;
    for &member_id in added {
        let responses = state
            .engine
            .detect_intent_with_event(&state.welcome_event, member_id)
            .await?;
        let messages = convert(responses, &state.platform);
        debug!(conversation_id, member_id, count = messages.len(), "welcoming member");
        state
            .sender
            .send_all(service_url, conversation_id, &messages)
            .await?;
    }
    Ok(())
}

fn delivery_target(activity: &TeamsActivity) -> anyhow::Result<(&str, &str)> {
    let service_url = activity
        .service_url
        .as_deref()
        .context("activity has no serviceUrl")?;
    let conversation_id = activity
        .conversation_id()
        .context("activity has no conversation ID")?;
    Ok((service_url, conversation_id))
}
